//! `[output]` section: how the rendered documents are emitted

use festa_domain::{DocumentSelection, OutputFormat};
use serde::{Deserialize, Serialize};

/// Output settings as written in `festa.toml`
///
/// `format` and `documents` stay `None` unless configured, so CLI flags and
/// built-in defaults can fill them in later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub documents: Option<DocumentSelection>,
    /// Colour the stderr banner and summary
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            documents: None,
            color: true,
        }
    }
}
