use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;

use crate::unity::{ClassId, FileId};

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---\s*!u!(\d+)\s*&(-?\d+)").expect("static regex"));

/// One `--- !u!<classId> &<fileId>` block borrowed from scene text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBlock<'a> {
	/// Serialized class of the block.
	pub class: ClassId,
	/// Scene-local object identifier.
	pub file_id: FileId,
	/// 1-based line number of the header.
	pub line: usize,
	/// Lines between this header and the next one (or end of text).
	pub body: Vec<&'a str>,
}

/// Lazy iterator over scene blocks in document order.
///
/// Lines before the first header are discarded. Call [`split_blocks`] again
/// on the same text to restart.
pub struct BlockIter<'a> {
	lines: std::iter::Enumerate<Lines<'a>>,
	pending: Option<(ClassId, FileId, usize)>,
	body: Vec<&'a str>,
}

impl<'a> BlockIter<'a> {
	/// Create a block iterator over the full text of one scene.
	pub fn new(text: &'a str) -> Self {
		Self {
			lines: text.lines().enumerate(),
			pending: None,
			body: Vec::new(),
		}
	}

	fn finish(&mut self, (class, file_id, line): (ClassId, FileId, usize)) -> SceneBlock<'a> {
		SceneBlock {
			class,
			file_id,
			line,
			body: std::mem::take(&mut self.body),
		}
	}
}

impl<'a> Iterator for BlockIter<'a> {
	type Item = SceneBlock<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		for (idx, line) in self.lines.by_ref() {
			let Some((class, file_id)) = parse_header(line) else {
				if self.pending.is_some() {
					self.body.push(line);
				}
				continue;
			};

			if let Some(prev) = self.pending.replace((class, file_id, idx + 1)) {
				return Some(self.finish(prev));
			}
		}

		let last = self.pending.take()?;
		Some(self.finish(last))
	}
}

/// Split scene text into blocks.
pub fn split_blocks(text: &str) -> BlockIter<'_> {
	BlockIter::new(text)
}

/// Parse a block header line into its class and file id.
///
/// Only matches at the start of the line; numbers that overflow their
/// integer types make the line an ordinary body line.
pub fn parse_header(line: &str) -> Option<(ClassId, FileId)> {
	let caps = HEADER.captures(line)?;
	let class = caps.get(1)?.as_str().parse::<u32>().ok()?;
	let file_id = caps.get(2)?.as_str().parse::<FileId>().ok()?;
	Some((ClassId::from_raw(class), file_id))
}

#[cfg(test)]
mod tests;
