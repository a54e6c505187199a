#![allow(dead_code)]

use anyhow::Result;
use serde_json::json;
use specpress::{SITE_MANIFEST, SiteCatalog, manifest_path};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

// A disposable site root: manifest with two families plus their (initially
// empty) spec directories. Removed on drop.
pub struct TempSite {
    pub root: PathBuf,
}

impl TempSite {
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let mut root = env::temp_dir();
        root.push(format!(
            "specpress-site-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&root).expect("failed to create temp site");

        let manifest = json!({
            "schema_version": "specsite_v1",
            "site": {
                "title": "Console API Documentation",
                "subtitle": "OpenAPI specifications for the console APIs",
                "intro": "This repository tracks versioned OpenAPI specs.",
                "disclaimer": "Community-maintained specifications.",
                "repository_url": "https://example.com/console-apis"
            },
            "families": [
                {"id": "network", "title": "Network API", "spec_dir": "specs/network"},
                {
                    "id": "protect",
                    "title": "Protect API",
                    "spec_dir": "specs/protect",
                    "accent": ["#5c2a7e", "#7b1fa2"]
                }
            ]
        });
        fs::write(
            root.join(SITE_MANIFEST),
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .expect("failed to write manifest");
        fs::create_dir_all(root.join("specs/network")).unwrap();
        fs::create_dir_all(root.join("specs/protect")).unwrap();

        Self { root }
    }

    pub fn add_spec(&self, family: &str, file_name: &str, contents: &str) {
        let dir = self.root.join("specs").join(family);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), contents).unwrap();
    }

    pub fn catalog(&self) -> Result<SiteCatalog> {
        SiteCatalog::load(&manifest_path(&self.root))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.join("docs")
    }
}

impl Drop for TempSite {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

// Sorted file names directly inside a directory.
pub fn dir_listing(dir: &PathBuf) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to list directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
