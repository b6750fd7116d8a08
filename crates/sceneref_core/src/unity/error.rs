use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, UnityError>;

/// Errors produced at the filesystem boundary of a project analysis.
///
/// Parsing itself never fails: malformed scene or script text degrades to
/// "contributes nothing" instead of surfacing an error.
#[derive(Debug, Error)]
pub enum UnityError {
	/// Reading or writing a file failed.
	#[error("io: {path}: {source}")]
	Io {
		/// Path being read or written.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Directory traversal failed below the project root.
	#[error("walk: {0}")]
	Walk(#[from] walkdir::Error),
	/// Project root does not exist or is not a directory.
	#[error("project folder does not exist: {path}")]
	ProjectRootMissing {
		/// Offending root path.
		path: PathBuf,
	},
}

impl UnityError {
	/// Wrap an IO error with the path it happened on.
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
