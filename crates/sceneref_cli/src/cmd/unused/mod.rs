use std::path::PathBuf;

use sceneref::unity::{Result, analyze_project};

use crate::cmd::util::{SchemaArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Unity project root.
	pub project: PathBuf,
	#[arg(long)]
	pub sequential: bool,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub schema: SchemaArgs,
}

/// List scripts that no scene instantiates or references.
pub fn run(args: Args) -> Result<()> {
	let Args {
		project,
		sequential,
		json,
		schema,
	} = args;

	let analysis = analyze_project(&project, &schema.analyze_options(sequential))?;
	let unused = analysis.unused_scripts();

	if json {
		let payload = UnusedJson {
			project: project.display().to_string(),
			scripts: analysis.scripts.len(),
			scenes: analysis.scenes.len(),
			used: analysis.used.len(),
			used_guids: analysis.used.sorted().into_iter().map(ToString::to_string).collect(),
			unused: unused
				.iter()
				.map(|script| ScriptJson {
					path: script.relative_path.clone(),
					guid: script.guid.to_string(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("project: {}", project.display());
	println!("scripts: {}", analysis.scripts.len());
	println!("unused: {}", unused.len());
	println!();
	println!("path\tguid");
	for script in &unused {
		println!("{}\t{}", script.relative_path, script.guid);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct UnusedJson {
	project: String,
	scripts: usize,
	scenes: usize,
	used: usize,
	used_guids: Vec<String>,
	unused: Vec<ScriptJson>,
}

#[derive(serde::Serialize)]
struct ScriptJson {
	path: String,
	guid: String,
}
