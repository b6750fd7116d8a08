use crate::unity::Guid;

/// Read the asset GUID from `.meta` sidecar text.
///
/// The first line whose left-trimmed text starts with `guid:` wins. The
/// token keeps its case. A missing or empty token yields `None`.
pub fn read_meta_guid(text: &str) -> Option<Guid> {
	let line = text.lines().map(str::trim_start).find(|line| line.starts_with("guid:"))?;
	let token = line["guid:".len()..].trim();
	if token.is_empty() {
		return None;
	}
	Some(Guid::new(token))
}
