//! Combined CLI over both build steps.
//!
//! Usage:
//!   specpress                 # docs + README
//!   specpress --docs          # docs directory only
//!   specpress --readme        # README only
//!   specpress --root ../site  # explicit site root

use anyhow::{Result, bail};
use chrono::Local;
use clap::Parser;
use specpress::{SITE_MANIFEST, SiteCatalog, find_site_root, manifest_path, site};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "specpress")]
#[command(about = "Build the static docs site and README for versioned OpenAPI specs")]
struct Cli {
    /// Regenerate the docs directory (spec copies, viewer pages, index).
    #[arg(long)]
    docs: bool,
    /// Regenerate README.md at the site root.
    #[arg(long)]
    readme: bool,
    /// Run both steps; the default when no step is selected.
    #[arg(long)]
    all: bool,
    /// Site root override; discovered via SPECPRESS_ROOT or upward search when omitted.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(path) => {
            if !path.join(SITE_MANIFEST).is_file() {
                bail!("{} is not a site root (no {SITE_MANIFEST})", path.display());
            }
            fs::canonicalize(&path)
                .unwrap_or(path)
        }
        None => find_site_root()?,
    };
    let catalog = SiteCatalog::load(&manifest_path(&root))?;

    let run_all = cli.all || (!cli.docs && !cli.readme);
    if run_all || cli.docs {
        site::build_docs(&root, &catalog)?;
    }
    if run_all || cli.readme {
        site::update_readme(&root, &catalog, Local::now().date_naive())?;
    }

    Ok(())
}
