use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MAX_MENU_DEPTH: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuEntry {
    label: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    accent: bool,
    #[serde(default)]
    chevron: bool,
    #[serde(default)]
    bookmarkable: bool,
    #[serde(default)]
    location: bool,
    #[serde(default)]
    children: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct MenuManifest {
    schema_version: u32,
    items: Vec<MenuEntry>,
}

fn validate(entries: &[MenuEntry], depth: usize, path: &str) {
    if depth > MAX_MENU_DEPTH {
        panic!("menu in {path} nests deeper than {MAX_MENU_DEPTH} levels");
    }
    for entry in entries {
        if entry.label.trim().is_empty() {
            panic!("menu entry at level {depth} in {path} has an empty label");
        }
        if depth == 1 && entry.icon.is_none() {
            panic!("top-level menu entry `{}` in {path} needs an icon", entry.label);
        }
        if depth > 1 && entry.icon.is_some() {
            panic!(
                "menu entry `{}` in {path} sets an icon; nested entries inherit the top-level icon",
                entry.label
            );
        }
        validate(&entry.children, depth + 1, path);
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("menu.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: MenuManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "menu schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    validate(&manifest.items, 1, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest.items).expect("serialize menu catalog");
    let generated = format!(
        "/// Build-time generated admin menu catalog JSON.\n\
pub const MENU_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("menu_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
