use std::io;
use std::path::PathBuf;

/// Everything that can stop a payload build.
#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    #[error("content directory {} does not exist", .0.display())]
    MissingContentDir(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("front matter in {} is not terminated", .0.display())]
    UnterminatedFrontMatter(PathBuf),
    #[error("invalid YAML front matter in {}: {source}", .path.display())]
    Yaml { path: PathBuf, source: serde_yaml::Error },
    #[error("invalid TOML front matter in {}: {source}", .path.display())]
    Toml { path: PathBuf, source: toml::de::Error },
    #[error("invalid site config {}: {message}", .path.display())]
    SiteConfig { path: PathBuf, message: String },
    #[error("too many pages for document ids: {0}")]
    TooManyPages(usize),
    #[error("payload rejected: {0}")]
    Payload(#[from] search::PayloadError),
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
