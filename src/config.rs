//! CLI settings: built-in defaults + optional TOML file.
//!
//! Lookup order: `--config FILE`, then ~/.qsim/config.toml. Every key is
//! optional; command-line flags override whatever the file says.
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::Strategy;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: usize,
    pub strategy: Strategy,
    pub bloch: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { format: OutputFormat::Json, precision: 6, strategy: Strategy::Dense, bloch: false }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            if !p.exists() {
                bail!("config file {} does not exist", p.display());
            }
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.qsim\config.toml on Windows; ~/.qsim/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".qsim").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
