use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use sceneref_testkit::target_dir as workspace_target_dir;

static SCENEREF_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_sceneref(args: &[&str]) -> Output {
	Command::new(sceneref_bin()).args(args).output().expect("sceneref command executes")
}

pub(crate) fn run_sceneref_stdout(args: &[&str]) -> String {
	let output = run_sceneref(args);
	assert!(
		output.status.success(),
		"sceneref command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf8")
}

pub(crate) fn run_sceneref_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_sceneref_stdout(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

pub(crate) fn path_arg(path: &std::path::Path) -> String {
	path.to_string_lossy().into_owned()
}

fn sceneref_bin() -> &'static PathBuf {
	SCENEREF_BIN.get_or_init(resolve_sceneref_bin)
}

fn resolve_sceneref_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_sceneref") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "sceneref.exe" } else { "sceneref" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "sceneref"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build sceneref binary at {}", bin.display());

	bin
}
