use std::collections::HashMap;

use tracing::{debug, trace};

use crate::unity::line::{field_value, find_file_id, find_script_guid, read_id_list, split_field};
use crate::unity::{ClassId, FieldIndex, FileId, Guid, SceneBlock, split_blocks};

const SCRIPT_FIELD: &str = "m_Script";
const OWNER_FIELD: &str = "m_GameObject";
const CHILDREN_FIELD: &str = "m_Children";
const NAME_FIELD: &str = "m_Name";
const ROOTS_FIELD: &str = "m_Roots";

/// MonoBehaviour instance to script GUID bindings of one scene.
///
/// Produced by [`bind_scripts`] and consumed read-only by [`collect_field_refs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBindings {
	by_instance: HashMap<FileId, Guid>,
}

impl ScriptBindings {
	/// Script GUID bound to a MonoBehaviour instance.
	pub fn get(&self, instance: FileId) -> Option<&Guid> {
		self.by_instance.get(&instance)
	}

	/// Iterate `(instance, guid)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (FileId, &Guid)> {
		self.by_instance.iter().map(|(id, guid)| (*id, guid))
	}

	/// Number of bound instances.
	pub fn len(&self) -> usize {
		self.by_instance.len()
	}

	/// Whether no instance is bound.
	pub fn is_empty(&self) -> bool {
		self.by_instance.is_empty()
	}
}

/// One serialized field of a script instance pointing at another scene object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
	/// Source MonoBehaviour instance.
	pub from: FileId,
	/// Referenced scene object.
	pub to: FileId,
	/// Field name holding the pointer.
	pub field: Box<str>,
}

/// Owner and ordered children of one Transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformLink {
	/// GameObject this Transform belongs to.
	pub owner: Option<FileId>,
	/// Child Transforms in `m_Children` order, duplicates preserved.
	pub children: Vec<FileId>,
}

/// Everything extracted from one scene document.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
	/// Script instance bindings (pass 1).
	pub bindings: ScriptBindings,
	/// Field-level references from bound instances (pass 2).
	pub references: Vec<FieldRef>,
	/// Transform links keyed by Transform file id.
	pub transforms: HashMap<FileId, TransformLink>,
	/// GameObject display names keyed by GameObject file id.
	pub names: HashMap<FileId, String>,
	/// Declared top-level Transform order from `SceneRoots`; empty when absent.
	pub roots: Vec<FileId>,
	/// Number of blocks in the document.
	pub block_count: usize,
}

impl EntityGraph {
	/// Parse scene text and build its entity graph.
	pub fn build(text: &str, fields: &FieldIndex) -> Self {
		let blocks: Vec<SceneBlock<'_>> = split_blocks(text).collect();
		Self::from_blocks(&blocks, fields)
	}

	/// Build an entity graph from already split blocks.
	pub fn from_blocks(blocks: &[SceneBlock<'_>], fields: &FieldIndex) -> Self {
		let bindings = bind_scripts(blocks);
		let references = collect_field_refs(blocks, &bindings, fields);
		let mut graph = Self {
			bindings,
			references,
			block_count: blocks.len(),
			..Self::default()
		};
		graph.scan_structure(blocks);

		debug!(
			blocks = graph.block_count,
			bindings = graph.bindings.len(),
			references = graph.references.len(),
			transforms = graph.transforms.len(),
			roots = graph.roots.len(),
			"entity graph built"
		);
		graph
	}

	/// GameObject owning a Transform.
	pub fn owner(&self, transform: FileId) -> Option<FileId> {
		self.transforms.get(&transform)?.owner
	}

	/// Ordered children of a Transform; empty when unknown.
	pub fn children(&self, transform: FileId) -> &[FileId] {
		self.transforms.get(&transform).map(|link| link.children.as_slice()).unwrap_or_default()
	}

	/// Display name of a GameObject.
	pub fn name(&self, object: FileId) -> Option<&str> {
		self.names.get(&object).map(String::as_str)
	}

	fn scan_structure(&mut self, blocks: &[SceneBlock<'_>]) {
		for block in blocks {
			match block.class {
				ClassId::GameObject => {
					if let Some(name) = block.body.iter().find_map(|line| field_value(line, NAME_FIELD)) {
						self.names.insert(block.file_id, name.trim().to_owned());
					}
				}
				ClassId::Transform => {
					let owner = block
						.body
						.iter()
						.find_map(|line| field_value(line, OWNER_FIELD))
						.and_then(find_file_id);
					let children = read_id_list(&block.body, CHILDREN_FIELD).unwrap_or_default();
					self.transforms.insert(block.file_id, TransformLink { owner, children });
				}
				ClassId::SceneRoots => {
					self.roots = read_id_list(&block.body, ROOTS_FIELD).unwrap_or_default();
				}
				_ => {}
			}
		}
	}
}

/// Pass 1: bind every MonoBehaviour block to the GUID in its first `m_Script` line.
///
/// A duplicated block id keeps the binding of the last block.
pub fn bind_scripts(blocks: &[SceneBlock<'_>]) -> ScriptBindings {
	let mut by_instance = HashMap::new();
	for block in blocks {
		if block.class != ClassId::MonoBehaviour {
			continue;
		}
		let guid = block
			.body
			.iter()
			.find_map(|line| field_value(line, SCRIPT_FIELD))
			.and_then(find_script_guid);
		if let Some(guid) = guid {
			by_instance.insert(block.file_id, guid);
		}
	}
	ScriptBindings { by_instance }
}

/// Pass 2: collect `field: {fileID: n}` pointers of bound instances.
///
/// Only field names present in the bound script's schema count; instances
/// without a binding or without a known schema are skipped entirely. One
/// pointer per line, the first.
pub fn collect_field_refs(blocks: &[SceneBlock<'_>], bindings: &ScriptBindings, fields: &FieldIndex) -> Vec<FieldRef> {
	let mut out = Vec::new();
	for block in blocks {
		if block.class != ClassId::MonoBehaviour {
			continue;
		}
		let Some(valid) = bindings.get(block.file_id).and_then(|guid| fields.fields(guid)) else {
			continue;
		};

		for line in &block.body {
			let Some((name, value)) = split_field(line) else {
				continue;
			};
			if !valid.contains(name) {
				trace!(instance = block.file_id, field = name, "field not in script schema");
				continue;
			}
			let Some(to) = find_file_id(value) else {
				continue;
			};
			out.push(FieldRef {
				from: block.file_id,
				to,
				field: name.into(),
			});
		}
	}
	out
}
