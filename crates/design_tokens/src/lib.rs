//! Design-token pipeline for the admin console theme.
//!
//! Exported token documents (primitive spacing/radius scales plus light and dark semantic color
//! sets) are read into a [`TokenSet`], which renders CSS custom properties for the stylesheet and a
//! theme map that resolves semantic color names to `var(--...)` references.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

pub mod source;

/// Extra color aliases layered on top of the semantic set.
pub const COLOR_ALIASES: [(&str, &str); 6] = [
    ("tealPrimary", "var(--teal-primary)"),
    ("tealSecondary", "var(--teal-secondary)"),
    ("red", "var(--content-red)"),
    ("amber", "var(--content-amber)"),
    ("emerald", "var(--content-emerald)"),
    ("sky", "var(--content-sky)"),
];

/// Responsive breakpoints shared by the stylesheet and layout code.
pub const SCREENS: [(&str, &str); 5] = [
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to parse token document `{document}`: {source}")]
    Json {
        document: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("token document `{0}` must be a JSON object")]
    NotAnObject(String),
    #[error("failed to serialize theme map: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Resolved token tables for one build of the theme.
pub struct TokenSet {
    pub spacing: BTreeMap<String, String>,
    pub border_radius: BTreeMap<String, String>,
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Theme map consumed by style tooling.
pub struct ThemeMap {
    pub colors: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub border_radius: BTreeMap<String, String>,
    pub screens: BTreeMap<String, String>,
}

impl TokenSet {
    /// Builds the token set from the three exported documents.
    pub fn from_sources(primitives: &str, light: &str, dark: &str) -> Result<Self, TokenError> {
        let primitives = source::parse_document("primitives", primitives)?;
        let light = source::parse_document("light", light)?;
        let dark = source::parse_document("dark", dark)?;

        Ok(Self {
            spacing: source::spacing_tokens(&primitives),
            border_radius: source::border_radius_tokens(&primitives),
            light: source::semantic_colors(&light),
            dark: source::semantic_colors(&dark),
        })
    }

    /// Semantic color names mapped to CSS variable references. The light set defines the names.
    pub fn color_vars(&self) -> BTreeMap<String, String> {
        self.light
            .keys()
            .map(|key| (key.clone(), format!("var(--{})", css_var_name(key))))
            .collect()
    }

    pub fn theme_map(&self) -> ThemeMap {
        let mut colors = self.color_vars();
        for (alias, reference) in COLOR_ALIASES {
            colors.insert(alias.to_string(), reference.to_string());
        }
        ThemeMap {
            colors,
            spacing: self.spacing.clone(),
            border_radius: self.border_radius.clone(),
            screens: SCREENS
                .iter()
                .map(|(name, width)| (name.to_string(), width.to_string()))
                .collect(),
        }
    }

    /// Pretty-printed theme map JSON.
    pub fn theme_json(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(&self.theme_map())?)
    }

    /// Stylesheet declaring light values on `:root` and dark overrides on `.dark`.
    pub fn render_css(&self) -> String {
        let mut css = String::new();
        push_block(&mut css, ":root", &self.light);
        css.push('\n');
        push_block(&mut css, ".dark", &self.dark);
        css
    }
}

/// `contentPrimary` -> `content-primary`.
///
/// A dash is inserted only where a lowercase letter or digit is followed by an uppercase letter,
/// so runs of capitals stay together.
pub fn css_var_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut previous: Option<char> = None;
    for ch in key.chars() {
        if ch.is_ascii_uppercase()
            && previous.is_some_and(|prev| prev.is_ascii_lowercase() || prev.is_ascii_digit())
        {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
        previous = Some(ch);
    }
    out
}

fn push_block(css: &mut String, selector: &str, colors: &BTreeMap<String, String>) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in colors {
        css.push_str(&format!("  --{}: {};\n", css_var_name(name), value));
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PRIMITIVES: &str = r#"{
        "Spacing (Margin & Padding)": { "2": { "$value": 8 } },
        "Border Radius": { "rounded-lg": { "$value": 8 } }
    }"#;
    const LIGHT: &str = r##"{
        "content": { "contentPrimary": { "$value": { "hex": "#09090B" } } },
        "background": { "backgroundInversePrimary": { "$value": { "hex": "#18181B" } } }
    }"##;
    const DARK: &str = r##"{
        "content": { "contentPrimary": { "$value": { "hex": "#FAFAFA" } } }
    }"##;

    #[test]
    fn camel_case_names_become_kebab_case() {
        assert_eq!(css_var_name("contentPrimary"), "content-primary");
        assert_eq!(
            css_var_name("backgroundInversePrimary"),
            "background-inverse-primary"
        );
        assert_eq!(css_var_name("border2Strong"), "border2-strong");
        assert_eq!(css_var_name("contentRED"), "content-red");
    }

    #[test]
    fn css_declares_light_root_and_dark_overrides() {
        let tokens = TokenSet::from_sources(PRIMITIVES, LIGHT, DARK).expect("tokens");
        assert_eq!(
            tokens.render_css(),
            ":root {\n  --background-inverse-primary: #18181B;\n  --content-primary: #09090B;\n}\n\n.dark {\n  --content-primary: #FAFAFA;\n}\n"
        );
    }

    #[test]
    fn theme_map_references_variables_and_keeps_scales() {
        let tokens = TokenSet::from_sources(PRIMITIVES, LIGHT, DARK).expect("tokens");
        let theme = tokens.theme_map();
        assert_eq!(theme.colors["contentPrimary"], "var(--content-primary)");
        assert_eq!(theme.colors["tealPrimary"], "var(--teal-primary)");
        assert_eq!(theme.spacing["2"], "8px");
        assert_eq!(theme.border_radius["rounded-lg"], "8px");
        assert_eq!(theme.screens["2xl"], "1536px");
    }

    #[test]
    fn invalid_json_names_the_document() {
        let err = TokenSet::from_sources(PRIMITIVES, "{", DARK).expect_err("broken light");
        assert!(err.to_string().contains("`light`"));
    }
}
