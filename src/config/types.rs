use crate::document::DocumentKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// How `inspect` prints a document
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{Label: value,...}` rendering
    #[default]
    Text,
    /// Normalized JSON
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputConfig {
    /// Kind assumed for documents without a response envelope
    #[serde(default)]
    pub default_kind: DocumentKind,

    /// Fail when a document carries enumeration values this build does not know
    #[serde(default)]
    pub strict_enums: bool,
}
