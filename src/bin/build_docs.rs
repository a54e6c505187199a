//! Parameterless docs build: discover every family's specs and regenerate
//! the publishable docs directory.

use anyhow::Result;
use specpress::{SiteCatalog, find_site_root, manifest_path, site};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = find_site_root()?;
    let catalog = SiteCatalog::load(&manifest_path(&root))?;
    site::build_docs(&root, &catalog)
}
