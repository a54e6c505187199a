//! Static documentation builder for versioned OpenAPI specs.
//!
//! A site root is any directory carrying a `specsite.json` manifest next to
//! one spec directory per API family. The library discovers the spec files,
//! orders them by version, and renders the publishable artifacts: renamed
//! JSON copies, one ReDoc viewer page per spec, an index landing page, and
//! the README version listing. Everything is plain filesystem work; nothing
//! here parses spec contents or talks to the network.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod discovery;
pub mod html;
pub mod readme;
pub mod site;

pub use catalog::{Family, SiteCatalog, SiteMeta};
pub use discovery::{FamilySpecs, SpecFile, SpecVersion, discover_specs};

/// Manifest file name that marks a directory as a site root.
pub const SITE_MANIFEST: &str = "specsite.json";

const ENV_SITE_ROOT: &str = "SPECPRESS_ROOT";

fn is_site_root(candidate: &Path) -> bool {
    candidate.join(SITE_MANIFEST).is_file()
}

fn site_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_site_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_site_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the site root from the environment.
///
/// Checks `SPECPRESS_ROOT`, then walks up from the current directory looking
/// for the manifest, then falls back to the compile-time hint injected by
/// `build.rs`.
pub fn find_site_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_SITE_ROOT) {
        if let Some(root) = site_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Some(hint) = option_env!("SPECPRESS_ROOT_HINT") {
        if let Some(root) = site_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate a site root (no {SITE_MANIFEST} found here or above). Set SPECPRESS_ROOT to the checkout holding the spec directories."
    );
}

/// Path to the manifest under a given site root.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(SITE_MANIFEST)
}
