//! Error types produced by the option store.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type IniResult<T> = Result<T, IniFileError>;

/// Errors that can occur while building or persisting an option store.
///
/// Tolerated input is deliberately absent here: malformed ini lines, unknown
/// keys during a strict read, and unknown command-line options are skipped,
/// never reported.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IniFileError {
    /// An option name was empty, or blank after trimming.
    #[error("option name must not be empty")]
    EmptyName,

    /// The ini file could not be found, even after the home-directory
    /// fallback for relative paths.
    #[error("ini file '{path}' not found")]
    NotFound {
        /// Path as given by the caller.
        path: Utf8PathBuf,
    },

    /// A parameterless read or write was requested but the store has no
    /// default path.
    #[error("no default ini file path has been set")]
    NoDefaultPath,

    /// The ini file could not be read or written.
    #[error("i/o error on ini file '{path}': {source}")]
    Io {
        /// Path of the file being read or written.
        path: Utf8PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },
}
