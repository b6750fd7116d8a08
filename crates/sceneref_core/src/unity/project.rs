use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::unity::{Guid, Result, UnityError, read_meta_guid};

/// One C# script with a GUID-bearing `.meta` sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRecord {
	/// GUID read from `<file>.cs.meta`.
	pub guid: Guid,
	/// Path relative to the project root, `/`-separated.
	pub relative_path: String,
	/// Full path of the `.cs` file.
	pub path: PathBuf,
}

impl ScriptRecord {
	/// Directory nesting depth of the relative path.
	pub fn depth(&self) -> usize {
		self.relative_path.matches('/').count()
	}
}

/// Script and scene files found under a project root.
#[derive(Debug, Clone, Default)]
pub struct ProjectFiles {
	/// Scripts with a readable GUID, in walk order.
	pub scripts: Vec<ScriptRecord>,
	/// Scene documents (`*.unity`), in walk order.
	pub scenes: Vec<PathBuf>,
}

/// Walk a project tree and collect scripts and scenes.
///
/// Scripts without a `.meta` sidecar or without a `guid:` line are skipped.
/// Entries are visited in file-name order so results are deterministic.
pub fn scan_project(root: &Path) -> Result<ProjectFiles> {
	if !root.is_dir() {
		return Err(UnityError::ProjectRootMissing { path: root.to_path_buf() });
	}

	let mut files = ProjectFiles::default();
	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = entry?;
		if !entry.file_type().is_file() {
			continue;
		}

		let path = entry.path();
		match path.extension().and_then(|ext| ext.to_str()) {
			Some("cs") => {
				if let Some(record) = script_record(root, path)? {
					files.scripts.push(record);
				}
			}
			Some("unity") => files.scenes.push(path.to_path_buf()),
			_ => {}
		}
	}

	debug!(
		root = %root.display(),
		scripts = files.scripts.len(),
		scenes = files.scenes.len(),
		"project scanned"
	);
	Ok(files)
}

/// Read a text file, replacing invalid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
	let bytes = fs::read(path).map_err(|err| UnityError::io(path, err))?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Path relative to `root` with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
	let rel = path.strip_prefix(root).unwrap_or(path);
	rel.to_string_lossy().replace('\\', "/")
}

fn script_record(root: &Path, path: &Path) -> Result<Option<ScriptRecord>> {
	let meta = meta_path(path);
	if !meta.is_file() {
		debug!(script = %path.display(), "no meta sidecar");
		return Ok(None);
	}

	let Some(guid) = read_meta_guid(&read_text(&meta)?) else {
		debug!(meta = %meta.display(), "meta without guid");
		return Ok(None);
	};

	Ok(Some(ScriptRecord {
		guid,
		relative_path: relative_path(root, path),
		path: path.to_path_buf(),
	}))
}

fn meta_path(path: &Path) -> PathBuf {
	let mut meta = OsString::from(path.as_os_str());
	meta.push(".meta");
	PathBuf::from(meta)
}
