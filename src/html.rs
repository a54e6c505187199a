//! Viewer and index page rendering.
//!
//! Pages are plain string templating: static CSS and markup live in consts,
//! the per-family pieces are composed with `format!`. The viewer itself is
//! ReDoc loaded from its CDN bundle; nothing is bundled and spec contents
//! are never inspected.

use crate::catalog::SiteMeta;
use crate::discovery::FamilySpecs;

/// Client-side renderer loaded by every viewer page.
pub const REDOC_BUNDLE_URL: &str =
    "https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js";

/// Standalone viewer page for one published spec copy.
///
/// `spec_filename` is the renamed JSON copy sitting next to the page, so the
/// reference stays relative and the docs directory can be hosted anywhere.
pub fn viewer_page(title: &str, spec_filename: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <redoc spec-url="{spec_filename}"></redoc>
    <script src="{REDOC_BUNDLE_URL}"></script>
</body>
</html>
"#
    )
}

/// Index landing page: one card per family, newest version as the primary
/// call-to-action, older versions behind a toggle, explicit placeholder when
/// a family has nothing published yet.
pub fn index_page(site: &SiteMeta, families: &[FamilySpecs]) -> String {
    let disclaimer = match &site.disclaimer {
        Some(text) => format!(
            r#"        <div class="disclaimer">
            <strong>Disclaimer:</strong> {text}
        </div>

"#
        ),
        None => String::new(),
    };

    let cards: String = families.iter().map(family_card).collect();

    let repo_line = match &site.repository_url {
        Some(url) => format!(
            r#"            <p><a href="{url}">View on GitHub</a></p>
"#
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{INDEX_STYLE}
{family_styles}    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
            <p class="subtitle">{subtitle}</p>
        </header>

{disclaimer}        <div class="api-grid">
{cards}        </div>

        <footer>
            <p>Generated automatically from OpenAPI specifications</p>
{repo_line}        </footer>
    </div>

    <script>
        function toggleVersions(button) {{
            button.classList.toggle('open');
            const list = button.nextElementSibling;
            list.classList.toggle('open');
        }}
    </script>
</body>
</html>
"#,
        title = site.title,
        subtitle = site.subtitle,
        family_styles = family_styles(families),
    )
}

// Per-family gradient rules; the rest of the stylesheet is static.
fn family_styles(families: &[FamilySpecs]) -> String {
    families
        .iter()
        .map(|fam| {
            format!(
                "        .card-header.{id} {{\n            background: linear-gradient(135deg, {from} 0%, {to} 100%);\n        }}\n",
                id = fam.family.id,
                from = fam.family.accent[0],
                to = fam.family.accent[1],
            )
        })
        .collect()
}

fn family_card(fam: &FamilySpecs) -> String {
    let count = fam.specs.len();
    let plural = if count == 1 { "" } else { "s" };

    format!(
        r#"            <div class="api-card">
                <div class="card-header {id}">
                    <div class="card-icon">
                        {CARD_ICON}
                    </div>
                    <div class="card-title">
                        <h2>{title}</h2>
                        <span class="version-count">{count} version{plural} available</span>
                    </div>
                </div>
                <div class="card-body">
{latest}{toggle}                </div>
            </div>
"#,
        id = fam.family.id,
        title = fam.family.title,
        latest = latest_section(fam),
        toggle = older_versions_toggle(fam),
    )
}

fn latest_section(fam: &FamilySpecs) -> String {
    let Some(latest) = fam.latest() else {
        return r#"                    <div class="latest-section">
                        <div class="latest-label">Latest Version</div>
                        <p class="empty-note">No versions available yet</p>
                    </div>
"#
        .to_string();
    };

    format!(
        r#"                    <div class="latest-section">
                        <div class="latest-label">Latest Version</div>
                        <div class="latest-row">
                            <span class="latest-version">{label}</span>
                            <div class="btn-group">
                                <a href="{page}" class="btn btn-primary">
                                    {DOCS_ICON}
                                    Docs
                                </a>
                                <a href="{json}" class="btn btn-secondary">
                                    {JSON_ICON}
                                    JSON
                                </a>
                            </div>
                        </div>
                    </div>
"#,
        label = latest.label,
        page = fam.page_name(latest),
        json = fam.json_name(latest),
    )
}

fn older_versions_toggle(fam: &FamilySpecs) -> String {
    if fam.older().is_empty() {
        return String::new();
    }

    let rows: String = fam
        .older()
        .iter()
        .map(|spec| {
            format!(
                r#"                        <div class="version-row">
                            <span class="version-num">{label}</span>
                            <div class="version-links">
                                <a href="{page}" class="btn btn-secondary btn-xs">Docs</a>
                                <a href="{json}" class="btn btn-secondary btn-xs">JSON</a>
                            </div>
                        </div>
"#,
                label = spec.label,
                page = fam.page_name(spec),
                json = fam.json_name(spec),
            )
        })
        .collect();

    format!(
        r#"                    <button class="versions-toggle" onclick="toggleVersions(this)">
                        <span>Older versions</span>
                        {CHEVRON_ICON}
                    </button>
                    <div class="versions-list">
{rows}                    </div>
"#
    )
}

const CARD_ICON: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M14 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z"/></svg>"#;

const DOCS_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M14 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6zm-1 7V3.5L18.5 9H13z"/></svg>"#;

const JSON_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/></svg>"#;

const CHEVRON_ICON: &str = r#"<svg viewBox="0 0 24 24"><path d="M7.41 8.59L12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z"/></svg>"#;

const INDEX_STYLE: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: #333;
            background: #1a1a2e;
            min-height: 100vh;
            padding: 2rem;
        }

        .container {
            max-width: 1100px;
            margin: 0 auto;
        }

        header {
            text-align: center;
            margin-bottom: 2rem;
            color: white;
        }

        h1 {
            font-size: 2.2rem;
            font-weight: 700;
            margin-bottom: 0.5rem;
        }

        .subtitle {
            color: rgba(255,255,255,0.7);
            font-size: 1rem;
        }

        .disclaimer {
            background: rgba(255, 193, 7, 0.15);
            border: 1px solid rgba(255, 193, 7, 0.3);
            color: #ffc107;
            padding: 0.75rem 1rem;
            margin-bottom: 2rem;
            border-radius: 8px;
            font-size: 0.9rem;
            text-align: center;
        }

        .api-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.5rem;
            margin-bottom: 2rem;
        }

        @media (max-width: 800px) {
            .api-grid {
                grid-template-columns: 1fr;
            }
        }

        .api-card {
            background: #16213e;
            border-radius: 16px;
            overflow: hidden;
            box-shadow: 0 4px 20px rgba(0,0,0,0.3);
            transition: transform 0.2s ease, box-shadow 0.2s ease;
        }

        .api-card:hover {
            transform: translateY(-2px);
            box-shadow: 0 8px 30px rgba(0,0,0,0.4);
        }

        .card-header {
            padding: 1.5rem;
            display: flex;
            align-items: center;
            gap: 1rem;
        }

        .card-icon {
            width: 48px;
            height: 48px;
            background: rgba(255,255,255,0.15);
            border-radius: 12px;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .card-icon svg {
            width: 24px;
            height: 24px;
            fill: white;
        }

        .card-title {
            flex: 1;
        }

        .card-title h2 {
            color: white;
            font-size: 1.3rem;
            font-weight: 600;
            margin-bottom: 0.15rem;
        }

        .card-title .version-count {
            color: rgba(255,255,255,0.7);
            font-size: 0.85rem;
        }

        .card-body {
            padding: 1.5rem;
        }

        .latest-section {
            margin-bottom: 1rem;
        }

        .latest-label {
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            color: #888;
            margin-bottom: 0.5rem;
        }

        .latest-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
        }

        .latest-version {
            font-size: 1.5rem;
            font-weight: 700;
            color: white;
        }

        .empty-note {
            color: #888;
            font-size: 0.95rem;
        }

        .btn-group {
            display: flex;
            gap: 0.5rem;
        }

        .btn {
            padding: 0.5rem 1rem;
            border-radius: 6px;
            text-decoration: none;
            font-weight: 500;
            font-size: 0.85rem;
            transition: all 0.2s ease;
            display: inline-flex;
            align-items: center;
            gap: 0.4rem;
            border: none;
            cursor: pointer;
        }

        .btn svg {
            width: 14px;
            height: 14px;
        }

        .btn-primary {
            background: #3b82f6;
            color: white;
        }

        .btn-primary:hover {
            background: #2563eb;
        }

        .btn-secondary {
            background: rgba(255,255,255,0.1);
            color: #ccc;
        }

        .btn-secondary:hover {
            background: rgba(255,255,255,0.15);
            color: white;
        }

        .versions-toggle {
            width: 100%;
            padding: 0.75rem 1rem;
            background: rgba(255,255,255,0.05);
            border: 1px solid rgba(255,255,255,0.1);
            border-radius: 8px;
            color: #999;
            font-size: 0.9rem;
            cursor: pointer;
            display: flex;
            align-items: center;
            justify-content: space-between;
            transition: all 0.2s ease;
        }

        .versions-toggle:hover {
            background: rgba(255,255,255,0.08);
            border-color: rgba(255,255,255,0.2);
            color: #ccc;
        }

        .versions-toggle svg {
            width: 16px;
            height: 16px;
            fill: currentColor;
            transition: transform 0.2s ease;
        }

        .versions-toggle.open svg {
            transform: rotate(180deg);
        }

        .versions-list {
            display: none;
            margin-top: 0.75rem;
        }

        .versions-list.open {
            display: block;
        }

        .version-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 0.6rem 0.75rem;
            background: rgba(255,255,255,0.03);
            border-radius: 6px;
            margin-bottom: 0.4rem;
            transition: background 0.2s ease;
        }

        .version-row:hover {
            background: rgba(255,255,255,0.08);
        }

        .version-row:last-child {
            margin-bottom: 0;
        }

        .version-num {
            color: #ddd;
            font-weight: 500;
            font-size: 0.9rem;
            font-family: 'SF Mono', 'Fira Code', 'Consolas', monospace;
        }

        .version-links {
            display: flex;
            gap: 0.5rem;
        }

        .btn-xs {
            padding: 0.3rem 0.6rem;
            font-size: 0.75rem;
        }

        footer {
            text-align: center;
            color: rgba(255,255,255,0.4);
            font-size: 0.85rem;
            padding-top: 1rem;
        }

        footer a {
            color: rgba(255,255,255,0.6);
            text-decoration: none;
        }

        footer a:hover {
            color: white;
            text-decoration: underline;
        }

        footer p {
            margin-bottom: 0.3rem;
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Family;
    use crate::discovery::{SpecFile, SpecVersion};
    use std::path::PathBuf;

    fn spec(label: &str) -> SpecFile {
        SpecFile {
            path: PathBuf::from(format!("specs/network/{label}.json")),
            file_name: format!("{label}.json"),
            label: label.to_string(),
            version: SpecVersion::parse(label).unwrap(),
        }
    }

    fn family(id: &str, labels: &[&str]) -> FamilySpecs {
        FamilySpecs {
            family: Family {
                id: id.to_string(),
                title: format!("{id} API"),
                spec_dir: format!("specs/{id}"),
                accent: ["#0f4c75".to_string(), "#1a237e".to_string()],
            },
            specs: labels.iter().map(|l| spec(l)).collect(),
        }
    }

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "Console API Documentation".to_string(),
            subtitle: "OpenAPI specifications".to_string(),
            intro: "Intro.".to_string(),
            disclaimer: Some("Community-maintained.".to_string()),
            repository_url: Some("https://example.com/repo".to_string()),
        }
    }

    #[test]
    fn viewer_page_wires_title_and_spec() {
        let page = viewer_page("Network API 1.0.0", "network-1.0.0.json");
        assert!(page.contains("<title>Network API 1.0.0</title>"));
        assert!(page.contains(r#"<redoc spec-url="network-1.0.0.json">"#));
        assert!(page.contains(REDOC_BUNDLE_URL));
    }

    #[test]
    fn single_version_has_latest_slot_and_no_older_section() {
        let page = index_page(&meta(), &[family("network", &["3.1.0"])]);
        assert!(page.contains(r#"<span class="latest-version">3.1.0</span>"#));
        assert!(page.contains("1 version available"));
        assert!(!page.contains("Older versions"));
    }

    #[test]
    fn older_versions_get_docs_and_json_links() {
        let page = index_page(&meta(), &[family("network", &["1.1.0", "1.0.0"])]);
        assert!(page.contains("Older versions"));
        assert!(page.contains("2 versions available"));
        assert!(page.contains(r#"<span class="version-num">1.0.0</span>"#));
        assert!(page.contains(r#"href="network-1.0.0.html""#));
        assert!(page.contains(r#"href="network-1.0.0.json""#));
        // The latest version never appears as an older row.
        assert!(!page.contains(r#"<span class="version-num">1.1.0</span>"#));
    }

    #[test]
    fn empty_family_renders_placeholder_not_buttons() {
        let page = index_page(&meta(), &[family("protect", &[])]);
        assert!(page.contains("No versions available yet"));
        assert!(page.contains("0 versions available"));
        assert!(!page.contains(r#"class="btn btn-primary""#));
    }

    #[test]
    fn every_family_gets_a_card_and_a_gradient_rule() {
        let page = index_page(
            &meta(),
            &[family("network", &["1.0.0"]), family("protect", &[])],
        );
        assert!(page.contains(".card-header.network {"));
        assert!(page.contains(".card-header.protect {"));
        assert!(page.contains("network API"));
        assert!(page.contains("protect API"));
    }

    #[test]
    fn disclaimer_and_repo_link_are_optional() {
        let mut site = meta();
        site.disclaimer = None;
        site.repository_url = None;
        let page = index_page(&site, &[family("network", &["1.0.0"])]);
        assert!(!page.contains("Disclaimer"));
        assert!(!page.contains("View on GitHub"));
    }
}
