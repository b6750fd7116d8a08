use sceneref_testkit::{SceneText, TempProject, behaviour_source};

use crate::cmd::test_support::{path_arg, run_sceneref_json};

const SPAWNER: &str = "0123456789abcdef0123456789abcdef";
const ENEMY: &str = "fedcba9876543210fedcba9876543210";

fn setup() -> (TempProject, String) {
	let project = TempProject::new();
	project.script("Assets/Spawner.cs", &behaviour_source("Spawner", &[("prefab", "Enemy")]), SPAWNER);
	project.script("Assets/Enemy.cs", &behaviour_source("Enemy", &[]), ENEMY);
	let text = SceneText::new()
		.game_object(1, "Spawner")
		.transform(2, 1, &[])
		.behaviour(3, 1, SPAWNER, &[("prefab", 4), ("other", 4)])
		.behaviour(4, 1, ENEMY, &[])
		.roots(&[2])
		.build();
	let scene = path_arg(&project.scene("Assets/Main.unity", &text));
	(project, scene)
}

#[test]
fn graph_without_project_lists_bindings_only() {
	let (_project, scene) = setup();

	let json = run_sceneref_json(&["graph", &scene, "--json"]);

	assert_eq!(json["blocks"], 5);
	assert_eq!(json["classes"]["MonoBehaviour(114)"], 2);
	assert_eq!(json["classes"]["SceneRoots(1660057539)"], 1);
	let tallied: u64 = json["classes"]
		.as_object()
		.expect("classes should be object")
		.values()
		.filter_map(serde_json::Value::as_u64)
		.sum();
	assert_eq!(tallied, 5);
	let bindings = json["bindings"].as_array().expect("bindings should be array");
	assert_eq!(bindings.len(), 2);
	assert_eq!(bindings[0]["instance"], 3);
	assert_eq!(bindings[0]["guid"], SPAWNER);
	assert!(bindings[0].get("script").is_none());
	assert!(json["references"].as_array().is_some_and(|refs| refs.is_empty()));
}

#[test]
fn graph_with_project_resolves_field_references() {
	let (project, scene) = setup();
	let root = path_arg(project.root());

	let json = run_sceneref_json(&["graph", &scene, "--project", &root, "--json"]);

	assert_eq!(json["bindings"][1]["script"], "Assets/Enemy.cs");
	let refs = json["references"].as_array().expect("references should be array");
	assert_eq!(refs.len(), 1);
	assert_eq!(refs[0]["from"], 3);
	assert_eq!(refs[0]["field"], "prefab");
	assert_eq!(refs[0]["to"], 4);
	assert_eq!(refs[0]["to_guid"], ENEMY);
}
