//! Named JSON fixtures for the curve converter's integration tests.
//!
//! `fixtures/manifest.json` maps a fixture name to a path relative to the
//! `fixtures/` directory, grouped by kind.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    animations: BTreeMap<String, String>,
    #[serde(default)]
    configs: BTreeMap<String, String>,
}

fn read_fixture(group: &BTreeMap<String, String>, kind: &str, name: &str) -> Result<String> {
    let rel = group
        .get(name)
        .ok_or_else(|| anyhow!("no {kind} fixture named '{name}'"))?;
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    fs::read_to_string(&path).with_context(|| format!("reading {kind} fixture {}", path.display()))
}

/// Decoded animation documents, as read by `parse_decoded_animation_json`.
pub mod animations {
    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.animations.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_fixture(&MANIFEST.animations, "animation", name)
    }
}

/// Converter `Config` documents.
pub mod configs {
    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_fixture(&MANIFEST.configs, "config", name)
    }
}
