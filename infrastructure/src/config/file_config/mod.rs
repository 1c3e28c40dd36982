//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;

pub use output::FileOutputConfig;

use festa_domain::Party;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Party to render when no party file is given (`[party]` section)
    pub party: Party,
    /// Output settings
    pub output: FileOutputConfig,
}
