//! Party file adapter
//!
//! Reads a single party record from a `.toml` or `.json` file. Fields sit at
//! the top level of the file, using the same names as the `[party]` config
//! section.

use festa_application::{PartySource, PartySourceError};
use festa_domain::Party;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Party file encodings understood by [`FilePartySource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartyFileFormat {
    Toml,
    Json,
}

impl PartyFileFormat {
    fn from_path(path: &Path) -> Result<Self, PartySourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "" => Err(PartySourceError::UnsupportedFormat(path.display().to_string())),
            other => Err(PartySourceError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Loads a party from a file on disk
#[derive(Debug, Clone)]
pub struct FilePartySource {
    path: PathBuf,
}

impl FilePartySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartySource for FilePartySource {
    fn load(&self) -> Result<Party, PartySourceError> {
        let format = PartyFileFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path).map_err(|source| PartySourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), self.path.display());

        let parse_error = |message: String| PartySourceError::Parse {
            origin: self.path.display().to_string(),
            message,
        };

        match format {
            PartyFileFormat::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            PartyFileFormat::Json => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    fn describe(&self) -> String {
        format!("party file {}", self.path.display())
    }
}
