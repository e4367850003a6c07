use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid file name pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    /// A pair could not be read or scored. Aborts the whole run.
    #[error(
        "Failed comparing\nSource: {}\nDestination: {}\n{cause}",
        .source_file.display(),
        .destination_file.display()
    )]
    Compare {
        source_file: PathBuf,
        destination_file: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}
