use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{tokenizer::token::ScanOptions, PseudolexError, PseudolexResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default)]
    pub recognize_comments: bool,

    #[serde(default = "default_scope_suffix")]
    pub scope_suffix: String,

    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `line:column<TAB>class<TAB>lexeme`
    #[default]
    Tsv,
    /// One JSON object per token
    Json,
    /// Editor scope name per token
    Scopes,
}

fn default_scope_suffix() -> String {
    "pseudocode".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recognize_comments: false,
            scope_suffix: default_scope_suffix(),
            format: OutputFormat::default(),
        }
    }
}

impl ScanConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> PseudolexResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PseudolexError::Config(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_str(s: &str) -> PseudolexResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recognize_comments: self.recognize_comments,
        }
    }
}
