//! Design-token generation command.
//!
//! Reads the exported token documents listed in `tools/tokens.toml`, then writes the theme CSS
//! variables and the theme map JSON. `--check` reports stale outputs without writing anything.

use crate::runtime::config::{relative_path_problem, ConfigLoader, ValidateConfig};
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::runtime::fs::{read_text, write_if_changed};
use crate::XtaskCommand;
use design_tokens::TokenSet;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "tools/tokens.toml";

/// `cargo xtask tokens` entry point.
pub struct TokensCommand;

/// Parsed `tokens` options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensOptions {
    /// Compare outputs instead of writing them.
    pub check: bool,
    /// Workspace-relative config path.
    pub config: String,
}

impl Default for TokensOptions {
    fn default() -> Self {
        Self {
            check: false,
            config: DEFAULT_CONFIG_PATH.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct TokensConfig {
    sources: TokenSources,
    output: TokenOutputs,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct TokenSources {
    primitives: String,
    light: String,
    dark: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
struct TokenOutputs {
    css: String,
    theme: String,
}

impl ValidateConfig for TokensConfig {
    fn problems(&self) -> Vec<String> {
        let fields = [
            ("sources.primitives", &self.sources.primitives),
            ("sources.light", &self.sources.light),
            ("sources.dark", &self.sources.dark),
            ("output.css", &self.output.css),
            ("output.theme", &self.output.theme),
        ];
        let mut problems: Vec<String> = fields
            .iter()
            .filter_map(|(field, value)| relative_path_problem(field, value))
            .collect();
        if self.output.css == self.output.theme {
            problems.push("`output.css` and `output.theme` point at the same file".to_string());
        }
        problems
    }
}

/// Rendered output files, keyed by workspace-relative path.
#[derive(Clone, Debug, Eq, PartialEq)]
struct RenderedOutputs {
    css: (String, String),
    theme: (String, String),
}

impl XtaskCommand for TokensCommand {
    type Options = TokensOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = TokensOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--check" => options.check = true,
                "--config" => {
                    let Some(path) = iter.next() else {
                        return Err(XtaskError::validation("`--config` requires a path")
                            .with_operation("tokens"));
                    };
                    options.config = path.clone();
                }
                other => {
                    return Err(XtaskError::validation(format!(
                        "unsupported tokens argument: {other}"
                    ))
                    .with_hint("usage: cargo xtask tokens [--check] [--config <path>]"));
                }
            }
        }
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        let loader = ConfigLoader::<TokensConfig>::new(ctx.root(), &options.config);
        let config = loader.load()?;
        let outputs = render(ctx, &config).map_err(|err| err.with_operation("tokens"))?;

        let files = [&outputs.css, &outputs.theme];
        if options.check {
            let stale: Vec<&str> = files
                .iter()
                .filter(|(path, contents)| {
                    read_text(&ctx.path(path)).map_or(true, |existing| existing != *contents)
                })
                .map(|(path, _)| path.as_str())
                .collect();
            if !stale.is_empty() {
                return Err(XtaskError::stale(format!(
                    "generated token files are out of date: {}",
                    stale.join(", ")
                ))
                .with_operation("tokens --check")
                .with_hint("run `cargo xtask tokens`"));
            }
            eprintln!("tokens: outputs are up to date");
            return Ok(());
        }

        for (path, contents) in files {
            let written = write_if_changed(&ctx.path(path), contents)?;
            eprintln!(
                "tokens: {} {path}",
                if written { "wrote" } else { "unchanged" }
            );
        }
        Ok(())
    }
}

fn render(ctx: &CommandContext, config: &TokensConfig) -> XtaskResult<RenderedOutputs> {
    let primitives = read_source(ctx, &config.sources.primitives)?;
    let light = read_source(ctx, &config.sources.light)?;
    let dark = read_source(ctx, &config.sources.dark)?;

    let tokens = TokenSet::from_sources(&primitives, &light, &dark)?;
    let mut theme = tokens.theme_json()?;
    theme.push('\n');

    Ok(RenderedOutputs {
        css: (config.output.css.clone(), tokens.render_css()),
        theme: (config.output.theme.clone(), theme),
    })
}

fn read_source(ctx: &CommandContext, relative: &str) -> XtaskResult<String> {
    read_text(&ctx.path(relative)).map_err(|err| err.with_path(Path::new(relative)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const CONFIG: &str = r#"
[sources]
primitives = "tokens/primitive.json"
light = "tokens/light.json"
dark = "tokens/dark.json"

[output]
css = "out/tokens.css"
theme = "out/theme.json"
"#;

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-tokens-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    fn seed_workspace() -> PathBuf {
        let root = unique_test_root();
        fs::create_dir_all(root.join("tokens")).expect("create tokens dir");
        fs::create_dir_all(root.join("tools")).expect("create tools dir");
        fs::write(root.join("tools/tokens.toml"), CONFIG).expect("write config");
        fs::write(
            root.join("tokens/primitive.json"),
            r#"{ "Spacing (Margin & Padding)": { "1": { "$value": 4 } } }"#,
        )
        .expect("write primitives");
        fs::write(
            root.join("tokens/light.json"),
            r##"{ "content": { "contentPrimary": { "$value": { "hex": "#09090B" } } } }"##,
        )
        .expect("write light");
        fs::write(
            root.join("tokens/dark.json"),
            r##"{ "content": { "contentPrimary": { "$value": { "hex": "#FAFAFA" } } } }"##,
        )
        .expect("write dark");
        root
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_defaults_to_write_mode_with_standard_config() {
        assert_eq!(
            TokensCommand::parse(&[]).expect("parse"),
            TokensOptions::default()
        );
    }

    #[test]
    fn parse_accepts_check_and_config_override() {
        let options =
            TokensCommand::parse(&args(&["--config", "alt.toml", "--check"])).expect("parse");
        assert!(options.check);
        assert_eq!(options.config, "alt.toml");
    }

    #[test]
    fn parse_rejects_dangling_config_flag_and_unknown_args() {
        let err = TokensCommand::parse(&args(&["--config"])).expect_err("missing value");
        assert_eq!(err.category, XtaskErrorCategory::Validation);

        let err = TokensCommand::parse(&args(&["--watch"])).expect_err("unknown flag");
        assert!(err.to_string().contains("--watch"));
    }

    #[test]
    fn config_rejects_shared_output_and_absolute_paths() {
        let mut config: TokensConfig = toml::from_str(CONFIG).expect("config");
        assert!(config.problems().is_empty());

        config.output.theme = config.output.css.clone();
        config.sources.dark = "/tmp/dark.json".to_string();
        let problems = config.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("sources.dark"));
        assert!(problems[1].contains("same file"));
    }

    #[test]
    fn run_writes_outputs_then_check_passes() {
        let root = seed_workspace();
        let ctx = CommandContext::with_root(&root);

        TokensCommand::run(&ctx, TokensOptions::default()).expect("generate");
        let css = fs::read_to_string(root.join("out/tokens.css")).expect("css written");
        assert!(css.starts_with(":root {\n  --content-primary: #09090B;\n}"));
        assert!(css.contains(".dark {\n  --content-primary: #FAFAFA;\n}"));
        let theme = fs::read_to_string(root.join("out/theme.json")).expect("theme written");
        assert!(theme.contains("\"contentPrimary\": \"var(--content-primary)\""));

        let check = TokensOptions {
            check: true,
            ..TokensOptions::default()
        };
        TokensCommand::run(&ctx, check).expect("fresh outputs pass check");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn check_reports_missing_outputs_as_stale() {
        let root = seed_workspace();
        let ctx = CommandContext::with_root(&root);
        let check = TokensOptions {
            check: true,
            ..TokensOptions::default()
        };

        let err = TokensCommand::run(&ctx, check).expect_err("nothing generated yet");
        assert_eq!(err.category, XtaskErrorCategory::Stale);
        assert!(err.to_string().contains("out/tokens.css"));
        assert!(!root.join("out").exists());

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn broken_source_document_is_a_validation_error() {
        let root = seed_workspace();
        fs::write(root.join("tokens/dark.json"), "{").expect("break dark");
        let ctx = CommandContext::with_root(&root);

        let err = TokensCommand::run(&ctx, TokensOptions::default()).expect_err("broken json");
        assert_eq!(err.category, XtaskErrorCategory::Validation);
        assert!(err.to_string().contains("`dark`"));

        let _ = fs::remove_dir_all(root);
    }
}
