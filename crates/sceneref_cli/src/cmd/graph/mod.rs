use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use sceneref::unity::{
	AnalyzeOptions, ClassId, EntityGraph, FieldIndex, Guid, Result, SceneBlock, build_field_index, read_text, scan_project,
	split_blocks,
};
use tracing::debug;

use crate::cmd::util::{SchemaArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Scene document (`*.unity`).
	pub scene: PathBuf,
	/// Project root supplying script GUIDs and serialized fields.
	#[arg(long)]
	pub project: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub schema: SchemaArgs,
}

/// Print script bindings and serialized field references of one scene.
///
/// Without `--project` no field index exists, so only bindings are listed.
pub fn run(args: Args) -> Result<()> {
	let Args {
		scene,
		project,
		json,
		schema,
	} = args;

	let mut scripts: HashMap<Guid, String> = HashMap::new();
	let fields = match &project {
		Some(root) => {
			let files = scan_project(root)?;
			let options = AnalyzeOptions {
				schema: schema.to_options(),
				..AnalyzeOptions::default()
			};
			let index = build_field_index(&files.scripts, &options)?;
			scripts.extend(files.scripts.into_iter().map(|script| (script.guid, script.relative_path)));
			debug!(scripts = scripts.len(), schemas = index.len(), "field index loaded");
			index
		}
		None => FieldIndex::default(),
	};

	let text = read_text(&scene)?;
	let blocks: Vec<SceneBlock<'_>> = split_blocks(&text).collect();
	let mut classes: BTreeMap<String, usize> = BTreeMap::new();
	for block in &blocks {
		*classes.entry(class_label(block.class)).or_default() += 1;
	}
	let graph = EntityGraph::from_blocks(&blocks, &fields);

	let mut bindings: Vec<(i64, &Guid)> = graph.bindings.iter().collect();
	bindings.sort_by_key(|(instance, _)| *instance);
	let script_path = |guid: &Guid| scripts.get(guid).cloned();

	if json {
		let payload = GraphJson {
			scene: scene.display().to_string(),
			blocks: graph.block_count,
			classes,
			bindings: bindings
				.iter()
				.map(|(instance, guid)| BindingJson {
					instance: *instance,
					guid: guid.to_string(),
					script: script_path(*guid),
				})
				.collect(),
			references: graph
				.references
				.iter()
				.map(|reference| ReferenceJson {
					from: reference.from,
					field: reference.field.to_string(),
					to: reference.to,
					to_guid: graph.bindings.get(reference.to).map(Guid::to_string),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("scene: {}", scene.display());
	println!("blocks: {}", graph.block_count);
	for (class, count) in &classes {
		println!("  {class}: {count}");
	}
	println!("bindings: {}", bindings.len());
	println!("references: {}", graph.references.len());
	println!();
	println!("bindings:");
	println!("instance\tguid\tscript");
	for (instance, guid) in &bindings {
		println!("{}\t{}\t{}", instance, guid, script_path(*guid).unwrap_or_else(|| "-".to_owned()));
	}
	println!();
	println!("references:");
	println!("from\tfield\tto\tto_guid");
	for reference in &graph.references {
		let target = graph
			.bindings
			.get(reference.to)
			.map(Guid::to_string)
			.unwrap_or_else(|| "-".to_owned());
		println!("{}\t{}\t{}\t{}", reference.from, reference.field, reference.to, target);
	}

	Ok(())
}

fn class_label(class: ClassId) -> String {
	match class {
		ClassId::Other(raw) => format!("class_{raw}"),
		known => format!("{}({})", known.as_str(), known.raw()),
	}
}

#[derive(serde::Serialize)]
struct GraphJson {
	scene: String,
	blocks: usize,
	classes: BTreeMap<String, usize>,
	bindings: Vec<BindingJson>,
	references: Vec<ReferenceJson>,
}

#[derive(serde::Serialize)]
struct BindingJson {
	instance: i64,
	guid: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	script: Option<String>,
}

#[derive(serde::Serialize)]
struct ReferenceJson {
	from: i64,
	field: String,
	to: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	to_guid: Option<String>,
}

#[cfg(test)]
mod tests;
