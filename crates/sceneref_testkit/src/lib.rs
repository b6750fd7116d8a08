//! Shared test helpers for workspace crates: temporary Unity projects and
//! scene/script text builders.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Unity project laid out in a temporary directory, removed on drop.
pub struct TempProject {
	dir: TempDir,
}

impl TempProject {
	/// Create an empty project root.
	pub fn new() -> Self {
		Self {
			dir: tempfile::tempdir().expect("create temp project dir"),
		}
	}

	/// Project root path.
	pub fn root(&self) -> &Path {
		self.dir.path()
	}

	/// Write a file relative to the root, creating parent directories.
	pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
		let path = self.root().join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("create parent dirs");
		}
		fs::write(&path, contents).expect("write project file");
		path
	}

	/// Write a `.cs` script plus its `.cs.meta` sidecar carrying `guid`.
	pub fn script(&self, relative: &str, source: &str, guid: &str) -> PathBuf {
		self.file(&format!("{relative}.meta"), &meta_text(guid));
		self.file(relative, source)
	}

	/// Write a scene document.
	pub fn scene(&self, relative: &str, text: &str) -> PathBuf {
		self.file(relative, text)
	}
}

impl Default for TempProject {
	fn default() -> Self {
		Self::new()
	}
}

/// Minimal `.meta` sidecar text for `guid`.
pub fn meta_text(guid: &str) -> String {
	format!("fileFormatVersion: 2\nguid: {guid}\nMonoImporter:\n  serializedVersion: 2\n")
}

/// C# source of a `MonoBehaviour` subclass with public fields `name: type`.
pub fn behaviour_source(class: &str, fields: &[(&str, &str)]) -> String {
	let mut out = format!("using UnityEngine;\n\npublic class {class} : MonoBehaviour\n{{\n");
	for (name, ty) in fields {
		let _ = writeln!(out, "\tpublic {ty} {name};");
	}
	out.push_str("\n\tvoid Update() { }\n}\n");
	out
}

/// Builder for scene document text.
#[derive(Debug, Clone, Default)]
pub struct SceneText {
	text: String,
}

impl SceneText {
	/// Start a document with the usual YAML preamble.
	pub fn new() -> Self {
		Self {
			text: "%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n".to_owned(),
		}
	}

	/// Append a GameObject block.
	pub fn game_object(mut self, id: i64, name: &str) -> Self {
		let _ = write!(
			self.text,
			"--- !u!1 &{id}\nGameObject:\n  m_ObjectHideFlags: 0\n  serializedVersion: 6\n  m_Name: {name}\n  m_IsActive: 1\n"
		);
		self
	}

	/// Append a Transform block owned by `owner` with ordered `children`.
	pub fn transform(mut self, id: i64, owner: i64, children: &[i64]) -> Self {
		let _ = write!(self.text, "--- !u!4 &{id}\nTransform:\n  m_GameObject: {{fileID: {owner}}}\n  m_Children:");
		if children.is_empty() {
			self.text.push_str(" []\n");
		} else {
			self.text.push('\n');
			for child in children {
				let _ = writeln!(self.text, "  - {{fileID: {child}}}");
			}
		}
		self.text.push_str("  m_Father: {fileID: 0}\n");
		self
	}

	/// Append a MonoBehaviour block bound to `guid` with `field: {fileID: target}` lines.
	pub fn behaviour(mut self, id: i64, owner: i64, guid: &str, fields: &[(&str, i64)]) -> Self {
		let _ = write!(
			self.text,
			"--- !u!114 &{id}\nMonoBehaviour:\n  m_GameObject: {{fileID: {owner}}}\n  m_Enabled: 1\n  m_Script: {{fileID: 11500000, guid: {guid}, type: 3}}\n  m_Name: \n"
		);
		for (name, target) in fields {
			let _ = writeln!(self.text, "  {name}: {{fileID: {target}}}");
		}
		self
	}

	/// Append the SceneRoots block listing root transforms.
	pub fn roots(mut self, transforms: &[i64]) -> Self {
		self.text.push_str("--- !u!1660057539 &9223372036854775807\nSceneRoots:\n  m_ObjectHideFlags: 0\n  m_Roots:\n");
		for id in transforms {
			let _ = writeln!(self.text, "  - {{fileID: {id}}}");
		}
		self
	}

	/// Finished document text.
	pub fn build(self) -> String {
		self.text
	}
}
