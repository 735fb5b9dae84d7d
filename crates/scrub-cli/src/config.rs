//! TOML configuration for a scrub run.
//!
//! Every table and key is optional. Without a config file the KW Command to
//! AMCards schema and the default input/output settings are used.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use scrub_filter::HeaderPolicy;
use scrub_ingest::{DEFAULT_PREAMBLE_MARKERS, IngestOptions};
use scrub_model::FieldSchema;
use scrub_output::OutputNaming;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "contact-scrub.toml";

/// `[input]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub preamble_markers: Vec<String>,
    pub header_policy: HeaderPolicy,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            preamble_markers: DEFAULT_PREAMBLE_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            header_policy: HeaderPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    pub schema: FieldSchema,
    pub input: InputSettings,
    pub output: OutputNaming,
}

impl ScrubConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`CONFIG_FILENAME`] in the
    /// working directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = PathBuf::from(CONFIG_FILENAME);
                match fs::read_to_string(&implicit) {
                    Ok(content) => Self::parse(&content, &implicit)?,
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        tracing::debug!("No config file found, using defaults");
                        Self::default()
                    }
                    Err(e) => {
                        return Err(e).with_context(|| {
                            format!("read config file {}", implicit.display())
                        });
                    }
                }
            }
        };
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Parses and validates TOML text. `origin` only appears in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .with_context(|| format!("parse config file {}", origin.display()))?;
        config
            .schema
            .validate()
            .with_context(|| format!("invalid [schema] in {}", origin.display()))?;
        tracing::info!(path = %origin.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            preamble_markers: self.input.preamble_markers.clone(),
        }
    }
}
