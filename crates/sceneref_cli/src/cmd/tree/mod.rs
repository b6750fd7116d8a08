use std::io::{self, Write};
use std::path::PathBuf;

use sceneref::unity::{EntityGraph, FieldIndex, Result, SceneNode, UnityError, build_hierarchy, read_text, write_hierarchy_dump};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Scene document (`*.unity`).
	pub scene: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the reconstructed GameObject forest of one scene.
pub fn run(args: Args) -> Result<()> {
	let Args { scene, json } = args;

	let text = read_text(&scene)?;
	let graph = EntityGraph::build(&text, &FieldIndex::default());
	let forest = build_hierarchy(&graph);

	if json {
		let payload = TreeJson {
			scene: scene.display().to_string(),
			roots: forest.len(),
			nodes: forest
				.iter()
				.flat_map(SceneNode::pre_order)
				.map(|(node, depth)| NodeJson {
					name: node.name.clone(),
					file_id: node.object,
					depth,
					children: node.children.len(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	let stdout = io::stdout();
	let mut out = stdout.lock();
	write_hierarchy_dump(&mut out, &forest)
		.and_then(|()| out.flush())
		.map_err(|err| UnityError::io("<stdout>", err))
}

#[derive(serde::Serialize)]
struct TreeJson {
	scene: String,
	roots: usize,
	/// Pre-order, so nesting is recovered from `depth`.
	nodes: Vec<NodeJson>,
}

#[derive(serde::Serialize)]
struct NodeJson {
	name: String,
	file_id: i64,
	depth: usize,
	children: usize,
}
