//! Workspace config files under `tools/`.

use crate::runtime::error::{XtaskError, XtaskResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Semantic checks run after a config file deserializes.
pub trait ValidateConfig {
    /// Returns one message per problem. An empty list means the config is usable.
    fn problems(&self) -> Vec<String>;
}

/// Loads a TOML config relative to the workspace root and validates it.
///
/// ```rust
/// # use serde::Deserialize;
/// # use std::path::Path;
/// # use xtask::runtime::config::{ConfigLoader, ValidateConfig};
/// #[derive(Deserialize)]
/// struct IconConfig {
///     sprite: String,
/// }
///
/// impl ValidateConfig for IconConfig {
///     fn problems(&self) -> Vec<String> {
///         Vec::new()
///     }
/// }
///
/// let loader = ConfigLoader::<IconConfig>::new(Path::new("/workspace"), "tools/icons.toml");
/// assert!(loader.path().ends_with("tools/icons.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned + ValidateConfig,
{
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Read, parse, and validate. Every failure is a config error carrying the file path.
    pub fn load(&self) -> XtaskResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            XtaskError::config(format!("failed to read {}: {err}", self.path.display()))
                .with_path(&self.path)
        })?;
        let config: T = toml::from_str(&body).map_err(|err| {
            XtaskError::config(format!("failed to parse {}: {err}", self.path.display()))
                .with_path(&self.path)
        })?;

        let problems = config.problems();
        if !problems.is_empty() {
            return Err(XtaskError::config(format!(
                "invalid {}: {}",
                self.path.display(),
                problems.join("; ")
            ))
            .with_path(&self.path));
        }
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Problem message for a workspace-relative path field, if any.
///
/// Paths must be non-empty, relative, and stay inside the workspace.
pub fn relative_path_problem(field: &str, value: &str) -> Option<String> {
    let path = Path::new(value);
    if value.trim().is_empty() {
        Some(format!("`{field}` is empty"))
    } else if path.is_absolute() {
        Some(format!("`{field}` must be workspace-relative, got {value}"))
    } else if path
        .components()
        .any(|component| matches!(component, std::path::Component::ParentDir))
    {
        Some(format!("`{field}` must not leave the workspace, got {value}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct StyleConfig {
        stylesheet: String,
    }

    impl ValidateConfig for StyleConfig {
        fn problems(&self) -> Vec<String> {
            relative_path_problem("stylesheet", &self.stylesheet)
                .into_iter()
                .collect()
        }
    }

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-config-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    fn write_config(root: &Path, body: &str) {
        fs::create_dir_all(root.join("tools")).expect("create tools dir");
        fs::write(root.join("tools/style.toml"), body).expect("write config");
    }

    #[test]
    fn load_reads_and_validates_workspace_config() {
        let root = unique_test_root();
        write_config(&root, "stylesheet = \"crates/site/style/app.css\"\n");

        let loaded = ConfigLoader::<StyleConfig>::new(&root, "tools/style.toml")
            .load()
            .expect("load config");
        assert_eq!(
            loaded,
            StyleConfig {
                stylesheet: "crates/site/style/app.css".into()
            }
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_and_malformed_files_are_config_errors() {
        let root = unique_test_root();
        let loader = ConfigLoader::<StyleConfig>::new(&root, "tools/style.toml");

        let err = loader.load().expect_err("missing config");
        assert_eq!(err.category, XtaskErrorCategory::Config);
        assert!(err.to_string().contains("style.toml"));

        write_config(&root, "stylesheet = [");
        let err = loader.load().expect_err("broken toml");
        assert_eq!(err.category, XtaskErrorCategory::Config);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn validation_problems_reject_the_config() {
        let root = unique_test_root();
        write_config(&root, "stylesheet = \"../outside.css\"\n");

        let err = ConfigLoader::<StyleConfig>::new(&root, "tools/style.toml")
            .load()
            .expect_err("path escapes workspace");
        assert_eq!(err.category, XtaskErrorCategory::Config);
        assert!(err.to_string().contains("must not leave the workspace"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn relative_path_rules() {
        assert_eq!(relative_path_problem("css", "out/tokens.css"), None);
        assert_eq!(
            relative_path_problem("css", "  "),
            Some("`css` is empty".to_string())
        );
        assert!(relative_path_problem("css", "/tmp/tokens.css").is_some());
    }
}
