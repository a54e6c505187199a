//! Parameterless README refresh, stamped with today's date.

use anyhow::Result;
use chrono::Local;
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
    site::update_readme(&root, &catalog, Local::now().date_naive())
}
