//! Spec file discovery and version ordering.
//!
//! A family's spec directory holds flat `<version>.json` files. Discovery
//! enumerates them fresh on every run and returns them newest-first by
//! parsed version. A file whose stem is not a dot-separated numeric version
//! fails the run outright: a silently misordered or skipped version would
//! corrupt the published index, so there is no best-effort mode.

use crate::catalog::Family;
use anyhow::{Context, Result, bail};
use semver::Version;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed version identifier of a spec file.
///
/// Accepts one to three dot-separated numeric components ("3", "1.0",
/// "10.0.0"), padding missing components with zero. Anything else —
/// including semver pre-release or build suffixes — is rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpecVersion(Version);

impl SpecVersion {
    pub fn parse(label: &str) -> Result<Self> {
        let parts: Vec<&str> = label.split('.').collect();
        if label.is_empty() || parts.len() > 3 {
            bail!("'{label}' is not a dot-separated numeric version");
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                bail!("'{label}' is not a dot-separated numeric version");
            }
            *slot = part
                .parse()
                .with_context(|| format!("version component '{part}' overflows"))?;
        }

        Ok(Self(Version::new(
            components[0],
            components[1],
            components[2],
        )))
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One discovered spec file.
#[derive(Debug, Clone)]
pub struct SpecFile {
    pub path: PathBuf,
    pub file_name: String,
    /// File stem, used verbatim in artifact names and rendered text.
    pub label: String,
    pub version: SpecVersion,
}

/// Enumerate the `.json` spec files directly inside `dir`, newest first.
///
/// A missing directory is the normal pre-publication state and yields an
/// empty collection. Files parsing to the same version value (for example
/// `1.0` and `1.0.0`) order by ascending file name so regeneration stays
/// deterministic.
pub fn discover_specs(dir: &Path) -> Result<Vec<SpecFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("reading spec directory {}", dir.display()))?;

    let mut specs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading spec directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            bail!("spec file name is not valid UTF-8: {}", path.display());
        };
        let Some(label) = path.file_stem().and_then(|s| s.to_str()) else {
            bail!("spec file name is not valid UTF-8: {}", path.display());
        };

        let version = SpecVersion::parse(label)
            .with_context(|| format!("unparsable version in spec file {}", path.display()))?;

        specs.push(SpecFile {
            file_name: file_name.to_string(),
            label: label.to_string(),
            version,
            path,
        });
    }

    specs.sort_by(|a, b| {
        b.version
            .cmp(&a.version)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });

    Ok(specs)
}

/// A family paired with its discovered collection, newest first.
#[derive(Debug, Clone)]
pub struct FamilySpecs {
    pub family: Family,
    pub specs: Vec<SpecFile>,
}

impl FamilySpecs {
    pub fn discover(root: &Path, family: &Family) -> Result<Self> {
        let specs = discover_specs(&root.join(&family.spec_dir))?;
        Ok(Self {
            family: family.clone(),
            specs,
        })
    }

    pub fn latest(&self) -> Option<&SpecFile> {
        self.specs.first()
    }

    pub fn older(&self) -> &[SpecFile] {
        self.specs.get(1..).unwrap_or(&[])
    }

    /// Published name of a spec copy: `<family>-<label>.json`.
    pub fn json_name(&self, spec: &SpecFile) -> String {
        format!("{}-{}.json", self.family.id, spec.label)
    }

    /// Published name of a spec's viewer page: `<family>-<label>.html`.
    pub fn page_name(&self, spec: &SpecFile) -> String {
        format!("{}-{}.html", self.family.id, spec.label)
    }
}
