use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use crate::unity::{Guid, SceneNode, ScriptRecord, dump_file_name, write_hierarchy_dump, write_unused_csv};

fn node(name: &str, object: i64, children: Vec<SceneNode>) -> SceneNode {
	SceneNode {
		name: name.to_owned(),
		object,
		children,
	}
}

fn record(path: &str, guid: &str) -> ScriptRecord {
	ScriptRecord {
		guid: Guid::new(guid),
		relative_path: path.to_owned(),
		path: PathBuf::from(path),
	}
}

#[test]
fn dump_indents_two_dashes_per_level() {
	let forest = vec![
		node("Player", 10, vec![node("Camera", 20, vec![node("Lens", 30, Vec::new())]), node("Body", 40, Vec::new())]),
		node("Light", 50, Vec::new()),
	];
	let mut out = Vec::new();
	write_hierarchy_dump(&mut out, &forest).expect("write dump");
	assert_eq!(String::from_utf8(out).expect("utf8"), "Player\n--Camera\n----Lens\n--Body\nLight\n");
}

#[test]
fn empty_forest_writes_empty_dump() {
	let mut out = Vec::new();
	write_hierarchy_dump(&mut out, &[]).expect("write dump");
	assert!(out.is_empty());
}

#[test]
fn csv_has_header_and_rows_in_given_order() {
	let scripts = [
		record("Assets/A.cs", "0123456789abcdef0123456789abcdef"),
		record("Assets/Sub/B.cs", "FEDCBA9876543210FEDCBA9876543210"),
	];
	let mut out = Vec::new();
	write_unused_csv(&mut out, &scripts).expect("write csv");
	assert_eq!(
		String::from_utf8(out).expect("utf8"),
		"Relative Path,GUID\nAssets/A.cs,0123456789abcdef0123456789abcdef\nAssets/Sub/B.cs,FEDCBA9876543210FEDCBA9876543210\n"
	);
}

#[test]
fn csv_with_no_scripts_is_header_only() {
	let mut out = Vec::new();
	write_unused_csv(&mut out, std::iter::empty::<&ScriptRecord>()).expect("write csv");
	assert_eq!(String::from_utf8(out).expect("utf8"), "Relative Path,GUID\n");
}

#[test]
fn dump_name_keeps_scene_extension() {
	assert_eq!(dump_file_name(Path::new("Assets/Scenes/Main.unity")), "Main.unity.dump");
	assert_eq!(dump_file_name(Path::new("Level 1.unity")), "Level 1.unity.dump");
}
