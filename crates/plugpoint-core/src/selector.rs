//! Variant selector.
//!
//! Resolves which single variant code to load. Precedence is fixed and must
//! not be reordered: explicit code, then environment value, then the config
//! file's first line. No other sources are consulted. The winning code is
//! trimmed and lowercased.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{PlugpointError, Result};

/// Resolves the variant code from explicit input, environment or config file.
#[derive(Debug, Clone)]
pub struct VariantSelector {
    env_var: String,
    config_path: PathBuf,
}

impl Default for VariantSelector {
    fn default() -> Self {
        Self {
            env_var: config::env_vars::VARIANT.to_string(),
            config_path: PathBuf::from(config::files::VARIANT_CONFIG),
        }
    }
}

impl VariantSelector {
    /// Selector using the default deployment contract
    /// ([`config::env_vars::VARIANT`], [`config::files::VARIANT_CONFIG`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different environment variable.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Use a different config-file path.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// The config-file path this selector reads.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the variant code to load.
    ///
    /// Fails with [`PlugpointError::NoVariantSelected`] when no source yields
    /// a non-empty code. Config-file read errors are downgraded to a warning
    /// and treated as "no entry".
    pub fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(code) = explicit {
            let code = code.trim();
            if !code.is_empty() {
                tracing::info!(code, "variant selected explicitly");
                return Ok(code.to_lowercase());
            }
        }

        if let Ok(value) = std::env::var(&self.env_var) {
            let value = value.trim();
            if !value.is_empty() {
                tracing::info!(code = value, env_var = %self.env_var, "variant selected from environment");
                return Ok(value.to_lowercase());
            }
        }

        if self.config_path.exists() {
            match fs::read_to_string(&self.config_path) {
                Ok(contents) => {
                    if let Some(line) = contents.lines().next() {
                        let line = line.trim();
                        if !line.is_empty() {
                            tracing::info!(
                                code = line,
                                path = %self.config_path.display(),
                                "variant selected from config file"
                            );
                            return Ok(line.to_lowercase());
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        path = %self.config_path.display(),
                        error = %err,
                        "failed to read variant config file"
                    );
                }
            }
        }

        tracing::warn!("no variant selection found");
        Err(PlugpointError::NoVariantSelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Each test uses its own environment variable name so parallel test
    // threads cannot interfere with each other.
    fn selector(env_var: &str, dir: &Path) -> VariantSelector {
        VariantSelector::new()
            .with_env_var(env_var)
            .with_config_path(dir.join("variant.conf"))
    }

    fn write_config(dir: &Path, contents: &str) {
        let mut file = fs::File::create(dir.join("variant.conf")).unwrap();
        write!(file, "{contents}").unwrap();
    }

    #[test]
    fn explicit_wins_over_environment_and_config() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "de\n");
        std::env::set_var("PLUGPOINT_TEST_EXPLICIT", "hu");

        let selector = selector("PLUGPOINT_TEST_EXPLICIT", dir.path());
        assert_eq!(selector.resolve(Some("CZ")).unwrap(), "cz");

        std::env::remove_var("PLUGPOINT_TEST_EXPLICIT");
    }

    #[test]
    fn environment_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "de\n");
        std::env::set_var("PLUGPOINT_TEST_ENV", "HU");

        let selector = selector("PLUGPOINT_TEST_ENV", dir.path());
        assert_eq!(selector.resolve(None).unwrap(), "hu");

        std::env::remove_var("PLUGPOINT_TEST_ENV");
    }

    #[test]
    fn config_first_line_used_when_nothing_else_set() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "  de  \nsecond line ignored\n");

        let selector = selector("PLUGPOINT_TEST_CONFIG", dir.path());
        assert_eq!(selector.resolve(None).unwrap(), "de");
    }

    #[test]
    fn blank_sources_fall_through() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "\n\ncz\n");
        std::env::set_var("PLUGPOINT_TEST_BLANK", "   ");

        // Blank explicit and blank environment fall through; the config
        // file's first line is empty, so nothing is selected.
        let selector = selector("PLUGPOINT_TEST_BLANK", dir.path());
        let err = selector.resolve(Some("  ")).unwrap_err();
        assert!(matches!(err, PlugpointError::NoVariantSelected));

        std::env::remove_var("PLUGPOINT_TEST_BLANK");
    }

    #[test]
    fn nothing_present_fails() {
        let dir = tempfile::tempdir().unwrap();
        let selector = selector("PLUGPOINT_TEST_NOTHING", dir.path());
        let err = selector.resolve(None).unwrap_err();
        assert!(matches!(err, PlugpointError::NoVariantSelected));
    }
}
