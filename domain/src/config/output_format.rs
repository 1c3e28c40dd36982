//! Output format value object

use serde::{Deserialize, Serialize};

/// How rendered party text is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The rendered blocks, unchanged (default)
    #[default]
    Text,
    /// JSON object holding the rendered blocks
    Json,
}
