use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::unity::{ProjectAnalysis, Result, SceneNode, ScriptRecord, UnityError};

/// File name of the unused-scripts report.
pub const UNUSED_CSV_NAME: &str = "UnusedScripts.csv";

/// Files written by [`write_reports`].
#[derive(Debug, Clone, Default)]
pub struct ReportFiles {
	/// Path of the unused-scripts CSV.
	pub unused_csv: PathBuf,
	/// Hierarchy dumps in scene order. Scenes sharing a file name share a path.
	pub dumps: Vec<PathBuf>,
}

/// Write the `Relative Path,GUID` table.
pub fn write_unused_csv<'a, W, I>(writer: &mut W, scripts: I) -> std::io::Result<()>
where
	W: Write,
	I: IntoIterator<Item = &'a ScriptRecord>,
{
	writeln!(writer, "Relative Path,GUID")?;
	for script in scripts {
		writeln!(writer, "{},{}", script.relative_path, script.guid)?;
	}
	Ok(())
}

/// Write a forest one node per line in pre-order, indented by `--` per level.
pub fn write_hierarchy_dump<W: Write>(writer: &mut W, forest: &[SceneNode]) -> std::io::Result<()> {
	let mut prefix = String::new();
	for (node, depth) in forest.iter().flat_map(SceneNode::pre_order) {
		let width = depth * 2;
		if prefix.len() > width {
			prefix.truncate(width);
		}
		while prefix.len() < width {
			prefix.push_str("--");
		}
		writeln!(writer, "{prefix}{}", node.name)?;
	}
	Ok(())
}

/// Dump file name for a scene: its file name with `.dump` appended.
pub fn dump_file_name(scene: &Path) -> String {
	let name = scene.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
	format!("{name}.dump")
}

/// Create `output` and write the CSV plus one dump per scene into it.
pub fn write_reports(analysis: &ProjectAnalysis, output: &Path) -> Result<ReportFiles> {
	fs::create_dir_all(output).map_err(|err| UnityError::io(output, err))?;

	let unused_csv = output.join(UNUSED_CSV_NAME);
	write_file(&unused_csv, |writer| write_unused_csv(writer, analysis.unused_scripts()))?;

	let mut dumps = Vec::with_capacity(analysis.scenes.len());
	for scene in &analysis.scenes {
		let path = output.join(dump_file_name(&scene.path));
		write_file(&path, |writer| write_hierarchy_dump(writer, &scene.hierarchy))?;
		dumps.push(path);
	}

	info!(output = %output.display(), dumps = dumps.len(), "reports written");
	Ok(ReportFiles { unused_csv, dumps })
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
	F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
	let file = File::create(path).map_err(|err| UnityError::io(path, err))?;
	let mut writer = BufWriter::new(file);
	body(&mut writer)
		.and_then(|()| writer.flush())
		.map_err(|err| UnityError::io(path, err))
}

#[cfg(test)]
mod tests;
