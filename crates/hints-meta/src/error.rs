//! Error types for hints-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] hints_fs::Error),

    #[error("Unable to parse hint source '{provenance}': {source}")]
    Parse {
        provenance: String,
        #[source]
        source: serde_json::Error,
    },
}
