//! Site manifest wiring.
//!
//! `specsite.json` describes everything the renderers need to know about a
//! site: the page copy, the output directory, and the ordered list of API
//! families with their spec directories. Loading is intentionally strict
//! about schema versions and malformed family entries so a typo in the
//! manifest fails the run instead of producing a half-rendered site.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

// A single manifest schema ships today; reject unexpected versions rather
// than guess at future field meanings. Callers can widen the accepted set
// via env.
const DEFAULT_SCHEMA_VERSION: &str = "specsite_v1";
const ENV_ALLOWED_MANIFEST_SCHEMAS: &str = "SPECPRESS_ALLOWED_MANIFEST_SCHEMAS";

/// Parsed and validated `specsite.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCatalog {
    pub schema_version: String,
    pub site: SiteMeta,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    pub families: Vec<Family>,
}

/// Page copy shared by the index page and the README.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    #[serde(default)]
    pub disclaimer: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
}

/// One API product line whose versions are tracked in its own directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Family {
    pub id: String,
    pub title: String,
    pub spec_dir: String,
    /// Gradient endpoints for the family's index card.
    #[serde(default = "default_accent")]
    pub accent: [String; 2],
}

fn default_output_dir() -> String {
    "docs".to_string()
}

fn default_accent() -> [String; 2] {
    ["#0f4c75".to_string(), "#1a237e".to_string()]
}

impl SiteCatalog {
    /// Load and validate the manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let catalog: SiteCatalog = serde_json::from_str(&raw)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        catalog
            .validate()
            .with_context(|| format!("validating manifest {}", path.display()))?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        validate_schema_version(&self.schema_version)?;

        if self.site.title.trim().is_empty() {
            bail!("site.title must not be empty");
        }
        if self.output_dir.trim().is_empty() {
            bail!("output_dir must not be empty");
        }
        if self.families.is_empty() {
            bail!("manifest lists no families");
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for family in &self.families {
            validate_family_id(&family.id)?;
            if !seen.insert(family.id.as_str()) {
                bail!("duplicate family id {}", family.id);
            }
            if family.title.trim().is_empty() {
                bail!("family {} has an empty title", family.id);
            }
            if family.spec_dir.trim().is_empty() {
                bail!("family {} has an empty spec_dir", family.id);
            }
            for color in &family.accent {
                if !is_hex_color(color) {
                    bail!(
                        "family {} accent '{}' is not a #rrggbb color",
                        family.id,
                        color
                    );
                }
            }
        }

        Ok(())
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_MANIFEST_SCHEMAS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

// Family ids end up in file names and CSS class names, so keep them boring.
fn validate_family_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("encountered family with no id");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
    {
        bail!("family id must match ^[a-z0-9_-]+$, got {}", id);
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(families: serde_json::Value) -> String {
        json!({
            "schema_version": "specsite_v1",
            "site": {
                "title": "Console API Documentation",
                "subtitle": "OpenAPI specifications for the console APIs",
                "intro": "This repository tracks versioned OpenAPI specs."
            },
            "families": families
        })
        .to_string()
    }

    fn parse(raw: &str) -> Result<SiteCatalog> {
        let catalog: SiteCatalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    #[test]
    fn accepts_minimal_manifest() {
        let raw = manifest(json!([
            {"id": "network", "title": "Network API", "spec_dir": "specs/network"}
        ]));
        let catalog = parse(&raw).expect("manifest should validate");
        assert_eq!(catalog.output_dir, "docs");
        assert_eq!(catalog.families.len(), 1);
        assert_eq!(catalog.families[0].accent, default_accent());
    }

    #[test]
    fn preserves_family_order() {
        let raw = manifest(json!([
            {"id": "protect", "title": "Protect API", "spec_dir": "specs/protect"},
            {"id": "network", "title": "Network API", "spec_dir": "specs/network"}
        ]));
        let catalog = parse(&raw).unwrap();
        let ids: Vec<&str> = catalog.families.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["protect", "network"]);
    }

    #[test]
    fn rejects_duplicate_family_ids() {
        let raw = manifest(json!([
            {"id": "network", "title": "Network API", "spec_dir": "a"},
            {"id": "network", "title": "Network API v2", "spec_dir": "b"}
        ]));
        let err = parse(&raw).unwrap_err().to_string();
        assert!(err.contains("duplicate family id"), "got: {err}");
    }

    #[test]
    fn rejects_empty_family_list() {
        let err = parse(&manifest(json!([]))).unwrap_err().to_string();
        assert!(err.contains("no families"), "got: {err}");
    }

    #[test]
    fn rejects_unruly_family_ids() {
        for bad in ["", "Network", "net work", "net/work"] {
            let raw = manifest(json!([
                {"id": bad, "title": "Network API", "spec_dir": "specs/network"}
            ]));
            assert!(parse(&raw).is_err(), "id {bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let raw = manifest(json!([
            {"id": "network", "title": "Network API", "spec_dir": "specs/network"}
        ]))
        .replace("specsite_v1", "specsite_v9");
        let err = parse(&raw).unwrap_err().to_string();
        assert!(err.contains("not in allowed set"), "got: {err}");
    }

    #[test]
    fn rejects_bad_accent_colors() {
        let raw = manifest(json!([
            {
                "id": "network",
                "title": "Network API",
                "spec_dir": "specs/network",
                "accent": ["#0f4c75", "blue"]
            }
        ]));
        let err = parse(&raw).unwrap_err().to_string();
        assert!(err.contains("#rrggbb"), "got: {err}");
    }
}
