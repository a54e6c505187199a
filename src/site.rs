//! The two build operations: regenerate the docs directory and regenerate
//! the README.
//!
//! Both are idempotent given identical inputs: every output path is
//! computed, existing files are overwritten, and nothing is deleted. Spec
//! files are copied as opaque bytes; whatever is wrong inside one is the
//! viewer's problem, not ours.

use crate::catalog::SiteCatalog;
use crate::discovery::FamilySpecs;
use crate::{html, readme};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Discover every family's collection in manifest order.
pub fn discover_all(root: &Path, catalog: &SiteCatalog) -> Result<Vec<FamilySpecs>> {
    catalog
        .families
        .iter()
        .map(|family| FamilySpecs::discover(root, family))
        .collect()
}

/// Copy every spec into the output directory under its published name and
/// render the viewer pages plus the index landing page.
pub fn build_docs(root: &Path, catalog: &SiteCatalog) -> Result<()> {
    let families = discover_all(root, catalog)?;
    let out_dir = root.join(&catalog.output_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for fam in &families {
        println!("Found {} {} spec(s)", fam.specs.len(), fam.family.title);
    }

    let mut pages = 0usize;
    for fam in &families {
        for spec in &fam.specs {
            let dest = out_dir.join(fam.json_name(spec));
            fs::copy(&spec.path, &dest).with_context(|| {
                format!("copying {} to {}", spec.path.display(), dest.display())
            })?;
            println!("Copied: {}", dest.display());

            let page_path = out_dir.join(fam.page_name(spec));
            let title = format!("{} {}", fam.family.title, spec.label);
            let page = html::viewer_page(&title, &fam.json_name(spec));
            fs::write(&page_path, page)
                .with_context(|| format!("writing {}", page_path.display()))?;
            println!("Generated: {}", page_path.display());
            pages += 1;
        }
    }

    let index_path = out_dir.join("index.html");
    fs::write(&index_path, html::index_page(&catalog.site, &families))
        .with_context(|| format!("writing {}", index_path.display()))?;
    println!("Generated: {}", index_path.display());

    println!();
    println!("Documentation build complete!");
    println!("Total pages generated: {}", pages + 1);
    Ok(())
}

/// Regenerate README.md at the site root with the given date stamp.
pub fn update_readme(root: &Path, catalog: &SiteCatalog, date: NaiveDate) -> Result<()> {
    let families = discover_all(root, catalog)?;
    let content = readme::render_readme(&catalog.site, &families, date);

    let readme_path = root.join("README.md");
    fs::write(&readme_path, content)
        .with_context(|| format!("writing {}", readme_path.display()))?;

    println!("README.md updated successfully!");
    for fam in &families {
        println!("{} versions: {}", fam.family.title, fam.specs.len());
    }
    Ok(())
}
