use std::path::PathBuf;

use sceneref::unity::{Result, analyze_project, write_reports};

use crate::cmd::util::SchemaArgs;

#[derive(clap::Args)]
pub struct Args {
	/// Unity project root.
	pub project: PathBuf,
	/// Folder receiving `UnusedScripts.csv` and the `.dump` files.
	pub output: PathBuf,
	/// Process scripts and scenes on one thread.
	#[arg(long)]
	pub sequential: bool,
	#[command(flatten)]
	pub schema: SchemaArgs,
}

/// Analyze a project and write its reports.
pub fn run(args: Args) -> Result<()> {
	let Args {
		project,
		output,
		sequential,
		schema,
	} = args;

	let analysis = analyze_project(&project, &schema.analyze_options(sequential))?;
	let files = write_reports(&analysis, &output)?;
	let unused = analysis.unused_scripts().len();

	println!("project: {}", project.display());
	println!("scripts: {}", analysis.scripts.len());
	println!("scenes: {}", analysis.scenes.len());
	println!("used: {}", analysis.used.len());
	println!("unused: {unused}");
	println!("csv: {}", files.unused_csv.display());
	println!("dumps: {}", files.dumps.len());

	Ok(())
}
