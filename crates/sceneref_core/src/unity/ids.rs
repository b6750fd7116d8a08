use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Scene-local object identifier (`&<fileID>` in a block header).
pub type FileId = i64;

/// Unity serialized class id of a scene block (`!u!<classId>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassId {
	/// `GameObject` (class id 1): carries the display name.
	GameObject,
	/// `Transform` (class id 4): carries owner and ordered children.
	Transform,
	/// `MonoBehaviour` (class id 114): an attached script instance.
	MonoBehaviour,
	/// `SceneRoots` (class id 1660057539): declared top-level order.
	SceneRoots,
	/// Any other class id, kept verbatim.
	Other(u32),
}

impl ClassId {
	/// Raw class id for `GameObject`.
	pub const GAME_OBJECT: u32 = 1;
	/// Raw class id for `Transform`.
	pub const TRANSFORM: u32 = 4;
	/// Raw class id for `MonoBehaviour`.
	pub const MONO_BEHAVIOUR: u32 = 114;
	/// Raw class id for `SceneRoots`.
	pub const SCENE_ROOTS: u32 = 1_660_057_539;

	/// Classify a raw class id.
	pub fn from_raw(raw: u32) -> Self {
		match raw {
			Self::GAME_OBJECT => Self::GameObject,
			Self::TRANSFORM => Self::Transform,
			Self::MONO_BEHAVIOUR => Self::MonoBehaviour,
			Self::SCENE_ROOTS => Self::SceneRoots,
			other => Self::Other(other),
		}
	}

	/// Raw class id as written in the header.
	pub fn raw(self) -> u32 {
		match self {
			Self::GameObject => Self::GAME_OBJECT,
			Self::Transform => Self::TRANSFORM,
			Self::MonoBehaviour => Self::MONO_BEHAVIOUR,
			Self::SceneRoots => Self::SCENE_ROOTS,
			Self::Other(raw) => raw,
		}
	}

	/// Stable label for text and JSON output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::GameObject => "GameObject",
			Self::Transform => "Transform",
			Self::MonoBehaviour => "MonoBehaviour",
			Self::SceneRoots => "SceneRoots",
			Self::Other(_) => "Other",
		}
	}
}

/// Stable asset identifier read from a `.meta` sidecar or an `m_Script` line.
///
/// Keeps the token as written for display; equality, hashing, and ordering
/// ignore ASCII case.
#[derive(Debug, Clone)]
pub struct Guid(Box<str>);

impl Guid {
	/// Trim and wrap a GUID token.
	pub fn new(token: &str) -> Self {
		Self(token.trim().into())
	}

	/// GUID text as written.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	fn folded(&self) -> impl Iterator<Item = u8> + '_ {
		self.0.bytes().map(|byte| byte.to_ascii_lowercase())
	}
}

impl PartialEq for Guid {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_ignore_ascii_case(&other.0)
	}
}

impl Eq for Guid {}

impl Hash for Guid {
	fn hash<H: Hasher>(&self, state: &mut H) {
		for byte in self.folded() {
			state.write_u8(byte);
		}
		state.write_usize(self.0.len());
	}
}

impl PartialOrd for Guid {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Guid {
	fn cmp(&self, other: &Self) -> Ordering {
		self.folded().cmp(other.folded())
	}
}

impl fmt::Display for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
