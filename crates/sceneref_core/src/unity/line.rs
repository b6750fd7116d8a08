//! Line-level conventions of Unity scene YAML.
//!
//! Everything here works on single physical lines and takes the first match;
//! no YAML nesting is interpreted.

use std::sync::LazyLock;

use regex::Regex;

use crate::unity::{FileId, Guid};

static FILE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"fileID:\s*(-?\d+)").expect("static regex"));
static SCRIPT_GUID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"guid:\s*([0-9a-fA-F]{32})").expect("static regex"));
static FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(.*)$").expect("static regex"));

/// Return the text after `name:` when the trimmed line starts with it.
pub(crate) fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
	line.trim().strip_prefix(name)?.strip_prefix(':')
}

/// Split a trimmed line into `identifier: value`.
pub(crate) fn split_field(line: &str) -> Option<(&str, &str)> {
	let caps = FIELD.captures(line.trim())?;
	Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// First `fileID: <n>` pointer in `text`.
pub(crate) fn find_file_id(text: &str) -> Option<FileId> {
	FILE_ID.captures(text)?.get(1)?.as_str().parse().ok()
}

/// First 32-digit hex `guid:` token in `text`.
pub(crate) fn find_script_guid(text: &str) -> Option<Guid> {
	SCRIPT_GUID.captures(text).and_then(|caps| caps.get(1)).map(|token| Guid::new(token.as_str()))
}

/// Collect the `fileID` of each `- ` item following the `name:` line.
///
/// The list ends at the first line that is not an item. Items without a
/// pointer are skipped. An absent field yields `None`.
pub(crate) fn read_id_list(body: &[&str], name: &str) -> Option<Vec<FileId>> {
	let start = body.iter().position(|line| field_value(line, name).is_some())?;
	let ids = body[start + 1..]
		.iter()
		.map(|line| line.trim())
		.take_while(|line| line.starts_with('-'))
		.filter_map(find_file_id)
		.collect();
	Some(ids)
}
