use bcn_inspect_api::InspectError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Inspect(#[from] InspectError),
    #[error("Memory mapping failed: {0}")]
    Mmap(String),
    #[error("{path}: {source}")]
    File {
        path: String,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Attaches `path` to errors raised while opening or mapping it.
    pub fn in_file(self, path: &std::path::Path) -> Self {
        match self {
            Self::Io(_) | Self::Mmap(_) => Self::File {
                path: path.display().to_string(),
                source: Box::new(self),
            },
            other => other,
        }
    }
}
