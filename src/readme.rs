//! README rendering.
//!
//! The README is regenerated wholesale on every run; nothing in it is
//! hand-edited. The date stamp comes in as an argument so the output is a
//! pure function of its inputs and the re-run property is testable without
//! freezing the clock.

use crate::catalog::SiteMeta;
use crate::discovery::FamilySpecs;
use chrono::NaiveDate;
use std::fmt::Write;

pub fn render_readme(site: &SiteMeta, families: &[FamilySpecs], date: NaiveDate) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", site.title);
    let _ = writeln!(out, "{}\n", site.intro);

    out.push_str("## Available Versions\n\n");
    for fam in families {
        let _ = writeln!(out, "### {}\n", fam.family.title);
        let _ = writeln!(out, "{} version(s) available:\n", fam.specs.len());
        if fam.specs.is_empty() {
            out.push_str("No versions available yet\n");
        } else {
            for spec in &fam.specs {
                let _ = writeln!(
                    out,
                    "- [{}]({}/{})",
                    spec.label, fam.family.spec_dir, spec.file_name
                );
            }
        }
        out.push('\n');
    }

    out.push_str("## Directory Structure\n\n```\n");
    for fam in families {
        let newest = fam
            .latest()
            .map(|spec| spec.file_name.as_str())
            .unwrap_or("...");
        let _ = writeln!(out, "{}/", fam.family.spec_dir);
        let _ = writeln!(out, "  ├── {newest}");
        out.push_str("  └── ...\n");
    }
    out.push_str("```\n\n");

    out.push_str(
        "## Usage\n\n\
         These OpenAPI specifications can be used to:\n\
         - Generate API clients in various languages\n\
         - Generate API documentation\n\
         - Validate API requests and responses\n\
         - Understand API capabilities and changes between versions\n\n",
    );

    out.push_str("## Generating Clients\n\n```bash\n# Install openapi-python-client\npip install openapi-python-client\n");
    for fam in families {
        let newest = fam
            .latest()
            .map(|spec| spec.file_name.as_str())
            .unwrap_or("VERSION.json");
        let _ = writeln!(
            out,
            "\n# Generate {} client\nopenapi-python-client generate --path {}/{} --output-path {}-client",
            fam.family.title, fam.family.spec_dir, newest, fam.family.id
        );
    }
    out.push_str("```\n\n");

    out.push_str(
        "## Notes\n\n\
         - Each version is stored as a separate file for easy comparison and version management\n\
         - Updates are published automatically when new versions are detected\n\n",
    );

    let _ = writeln!(out, "_Last updated: {}_", date.format("%Y-%m-%d"));

    out
}
