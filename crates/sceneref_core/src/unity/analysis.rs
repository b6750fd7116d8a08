use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::unity::{
	EntityGraph, FieldIndex, Result, SceneNode, SchemaOptions, ScriptRecord, UsageSet, build_hierarchy, extract_script_schema, read_text,
	relative_path, scan_project,
};

/// Options for a whole-project analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
	/// Serialized-field schema rules.
	pub schema: SchemaOptions,
	/// Process scripts and scenes on the rayon thread pool.
	pub parallel: bool,
}

impl Default for AnalyzeOptions {
	fn default() -> Self {
		Self {
			schema: SchemaOptions::default(),
			parallel: true,
		}
	}
}

/// Result of analyzing one scene document.
#[derive(Debug)]
pub struct SceneAnalysis {
	/// Full scene path.
	pub path: PathBuf,
	/// Scene path relative to the project root.
	pub relative_path: String,
	/// Reconstructed GameObject forest.
	pub hierarchy: Vec<SceneNode>,
	/// Scripts this scene proves used.
	pub usage: UsageSet,
	/// Number of blocks in the document.
	pub block_count: usize,
	/// Number of MonoBehaviour instances bound to a script.
	pub bound_instances: usize,
	/// Number of field references found.
	pub field_refs: usize,
}

impl SceneAnalysis {
	/// Analyze already read scene text.
	pub fn from_text(path: PathBuf, relative_path: String, text: &str, fields: &FieldIndex) -> Self {
		let graph = EntityGraph::build(text, fields);
		Self {
			path,
			relative_path,
			hierarchy: build_hierarchy(&graph),
			usage: UsageSet::from_graph(&graph),
			block_count: graph.block_count,
			bound_instances: graph.bindings.len(),
			field_refs: graph.references.len(),
		}
	}
}

/// Whole-project analysis result.
#[derive(Debug)]
pub struct ProjectAnalysis {
	/// Project root that was scanned.
	pub root: PathBuf,
	/// Every script with a GUID.
	pub scripts: Vec<ScriptRecord>,
	/// Serialized field names per script GUID.
	pub fields: FieldIndex,
	/// Union of all scenes' usage.
	pub used: UsageSet,
	/// Per-scene results in walk order.
	pub scenes: Vec<SceneAnalysis>,
}

impl ProjectAnalysis {
	/// Scripts never used by any scene, shallowest paths first, then by path.
	pub fn unused_scripts(&self) -> Vec<&ScriptRecord> {
		let mut out: Vec<&ScriptRecord> = self.scripts.iter().filter(|script| !self.used.contains(&script.guid)).collect();
		out.sort_by(|left, right| {
			left.depth()
				.cmp(&right.depth())
				.then_with(|| left.relative_path.cmp(&right.relative_path))
		});
		out
	}
}

/// Scan a project, extract script schemas, and analyze every scene.
pub fn analyze_project(root: &Path, options: &AnalyzeOptions) -> Result<ProjectAnalysis> {
	let files = scan_project(root)?;
	let fields = build_field_index(&files.scripts, options)?;

	let analyze = |path: &PathBuf| -> Result<SceneAnalysis> {
		let text = read_text(path)?;
		let scene = SceneAnalysis::from_text(path.clone(), relative_path(root, path), &text, &fields);
		debug!(
			scene = %scene.relative_path,
			blocks = scene.block_count,
			bound = scene.bound_instances,
			refs = scene.field_refs,
			"scene analyzed"
		);
		Ok(scene)
	};
	let scenes: Vec<SceneAnalysis> = if options.parallel {
		files.scenes.par_iter().map(analyze).collect::<Result<_>>()?
	} else {
		files.scenes.iter().map(analyze).collect::<Result<_>>()?
	};

	let mut used = UsageSet::default();
	for scene in &scenes {
		used.merge(scene.usage.clone());
	}

	info!(
		scripts = files.scripts.len(),
		schemas = fields.len(),
		scenes = scenes.len(),
		used = used.len(),
		"project analyzed"
	);
	Ok(ProjectAnalysis {
		root: root.to_path_buf(),
		scripts: files.scripts,
		fields,
		used,
		scenes,
	})
}

/// Read every script and collect its serialized-field schema.
pub fn build_field_index(scripts: &[ScriptRecord], options: &AnalyzeOptions) -> Result<FieldIndex> {
	let extract = |script: &ScriptRecord| -> Result<_> {
		let source = read_text(&script.path)?;
		let schema = extract_script_schema(&source, &options.schema);
		debug!(
			script = %script.relative_path,
			matched = schema.base_matched,
			fields = schema.fields.len(),
			"script schema extracted"
		);
		Ok((script.guid.clone(), schema))
	};
	let schemas: Vec<_> = if options.parallel {
		scripts.par_iter().map(extract).collect::<Result<_>>()?
	} else {
		scripts.iter().map(extract).collect::<Result<_>>()?
	};
	Ok(schemas.into_iter().collect())
}
