//! Error type shared by every xtask command.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Failure class. Picks the process exit status and the `error[..]` prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// `tools/*.toml` missing, malformed, or rejected by its checks.
    Config,
    /// Bad arguments or token sources that do not resolve.
    Validation,
    Io,
    /// `--check` found generated files that differ from a fresh render.
    Stale,
}

impl XtaskErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Validation => "validation",
            Self::Io => "io",
            Self::Stale => "stale",
        }
    }

    /// Stale output exits with 2 so CI can tell "regenerate" apart from a broken run.
    pub fn exit_status(self) -> u8 {
        match self {
            Self::Stale => 2,
            _ => 1,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    pub category: XtaskErrorCategory,
    pub message: String,
    /// `(key, value)` notes rendered after the message in attachment order.
    context: Vec<(&'static str, String)>,
}

pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            context: Vec::new(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    pub fn stale(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Stale, message)
    }

    pub fn with_operation(self, operation: impl Into<String>) -> Self {
        self.note("operation", operation.into())
    }

    /// Records the file involved. A later call replaces an earlier one.
    pub fn with_path(self, path: &Path) -> Self {
        self.note("target", path.display().to_string())
    }

    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.note("hint", hint.into())
    }

    /// Value attached under `key`, if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    fn note(mut self, key: &'static str, value: String) -> Self {
        match self.context.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = value,
            None => self.context.push((key, value)),
        }
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for (key, value) in &self.context {
            write!(f, " [{key}: {value}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

impl From<design_tokens::TokenError> for XtaskError {
    fn from(value: design_tokens::TokenError) -> Self {
        XtaskError::validation(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_appends_context_fields_in_order() {
        let err = XtaskError::config("bad tokens config")
            .with_operation("tokens")
            .with_path(Path::new("tools/tokens.toml"))
            .with_hint("check the [sources] table");
        assert_eq!(
            err.to_string(),
            "bad tokens config [operation: tokens] [target: tools/tokens.toml] [hint: check the [sources] table]"
        );
    }

    #[test]
    fn outer_path_replaces_inner_one() {
        let err = XtaskError::io("failed to read")
            .with_path(Path::new("/abs/tokens/primitives.json"))
            .with_path(Path::new("tokens/primitives.json"));
        assert_eq!(err.context("target"), Some("tokens/primitives.json"));
        assert_eq!(err.to_string(), "failed to read [target: tokens/primitives.json]");
    }

    #[test]
    fn only_stale_output_uses_exit_status_two() {
        assert_eq!(XtaskErrorCategory::Stale.exit_status(), 2);
        assert_eq!(XtaskErrorCategory::Config.exit_status(), 1);
        assert_eq!(XtaskErrorCategory::Validation.label(), "validation");
    }
}
