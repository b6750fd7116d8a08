use pretty_assertions::assert_eq;

use super::{TypeKind, parse_declarations};

fn field_names(source: &str, type_name: &str) -> Vec<String> {
	let decls = parse_declarations(source);
	let ty = decls.types.iter().find(|item| item.name == type_name).expect("type declared");
	ty.fields.iter().flat_map(|field| field.names.clone()).collect()
}

#[test]
fn class_with_base_list_and_fields() {
	let source = r#"
using UnityEngine;
using System.Collections.Generic;

namespace Game.Player
{
    [RequireComponent(typeof(Rigidbody))]
    public class PlayerController : MonoBehaviour, IDamageable
    {
        public int a, b;
        [SerializeField] private float c = 1.5f;
        public static int d;
        private List<Dictionary<string, int>> lookup = new List<Dictionary<string, int>>(), other;
    }
}
"#;
	let decls = parse_declarations(source);
	assert_eq!(decls.types.len(), 1);

	let ty = &decls.types[0];
	assert_eq!(ty.name, "PlayerController");
	assert_eq!(ty.kind, TypeKind::Class);
	assert_eq!(ty.bases, vec!["MonoBehaviour".to_owned(), "IDamageable".to_owned()]);
	assert!(ty.extends("MonoBehaviour"));

	assert_eq!(ty.fields.len(), 4);
	assert_eq!(ty.fields[0].names, vec!["a".to_owned(), "b".to_owned()]);
	assert!(ty.fields[0].is_public());
	assert_eq!(ty.fields[1].attributes, vec!["SerializeField".to_owned()]);
	assert_eq!(ty.fields[1].type_name, "float");
	assert!(ty.fields[2].is_static());
	assert_eq!(ty.fields[3].type_name, "List<Dictionary<string, int>>");
	assert_eq!(ty.fields[3].names, vec!["lookup".to_owned(), "other".to_owned()]);
}

#[test]
fn methods_properties_and_events_are_not_fields() {
	let source = r#"
public class Spawner : MonoBehaviour
{
    public GameObject prefab;
    public int Count { get; private set; } = 3;
    public float Rate => 2f;
    public event System.Action Spawned;
    public Spawner() { count = 0; }
    void Update() { if (x < y) { Spawn<int>(); } }
    public T Find<T>(string name) where T : Component => default;
    public int this[int i] { get { return i; } }
    public static Spawner operator +(Spawner a, Spawner b) => a;
    ~Spawner() { }
    [SerializeField] private Transform target;
}
"#;
	assert_eq!(field_names(source, "Spawner"), vec!["prefab".to_owned(), "target".to_owned()]);
}

#[test]
fn nested_types_keep_their_own_fields() {
	let source = r#"
public class Outer : MonoBehaviour
{
    public int outerField;

    [System.Serializable]
    public struct Inner
    {
        public int innerField;
    }

    public enum Mode { A, B = 2 }

    public Inner inner;
}
"#;
	let decls = parse_declarations(source);
	let names: Vec<&str> = decls.types.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(names, vec!["Outer", "Inner"]);
	assert_eq!(decls.types[1].kind, TypeKind::Struct);
	assert_eq!(field_names(source, "Outer"), vec!["outerField".to_owned(), "inner".to_owned()]);
	assert_eq!(field_names(source, "Inner"), vec!["innerField".to_owned()]);
}

#[test]
fn qualified_and_generic_bases_are_rendered_as_written() {
	let source = r#"
namespace Demo;

public sealed class A : UnityEngine.MonoBehaviour { }
public class B<T> : Singleton<B<T>> where T : class { }
public record Point(int X, int Y) : Shape(X);
"#;
	let decls = parse_declarations(source);
	assert_eq!(decls.types[0].bases, vec!["UnityEngine.MonoBehaviour".to_owned()]);
	assert!(!decls.types[0].extends("MonoBehaviour"));
	assert_eq!(decls.types[1].bases, vec!["Singleton<B<T>>".to_owned()]);
	assert_eq!(decls.types[2].kind, TypeKind::Record);
	assert_eq!(decls.types[2].bases, vec!["Shape".to_owned()]);
}

#[test]
fn attribute_targets_and_qualified_attribute_names() {
	let source = r#"
class C : MonoBehaviour
{
    [field: SerializeField] public int Auto { get; set; }
    [UnityEngine.SerializeField, Range(0, 1)] float weight;
    [Header("Refs")]
    [SerializeFieldAttribute] protected Light lamp;
}
"#;
	let decls = parse_declarations(source);
	let fields = &decls.types[0].fields;
	assert_eq!(fields.len(), 2);
	assert_eq!(fields[0].attributes, vec!["UnityEngine.SerializeField".to_owned(), "Range".to_owned()]);
	assert!(fields[0].has_attribute("SerializeField"));
	assert_eq!(fields[1].attributes, vec!["Header".to_owned(), "SerializeFieldAttribute".to_owned()]);
	assert!(fields[1].has_attribute("SerializeField"));
}

#[test]
fn malformed_source_keeps_what_parsed_before_the_damage() {
	let source = r#"
public class Broken : MonoBehaviour
{
    public int kept;
    void Oops( {
"#;
	assert_eq!(field_names(source, "Broken"), vec!["kept".to_owned()]);
}

#[test]
fn stray_closing_braces_do_not_stop_parsing() {
	let source = "} } public class Late : MonoBehaviour { public int x; }";
	assert_eq!(field_names(source, "Late"), vec!["x".to_owned()]);
}

#[test]
fn initializers_with_braces_and_lambdas_are_skipped() {
	let source = r#"
class D : MonoBehaviour
{
    public int[] values = { 1, 2, 3 }, more;
    public System.Action onHit = () => { Debug.Log("}"); };
    public string label = x switch { 1 => "a", _ => "b" };
    public bool less = a < b, after;
}
"#;
	assert_eq!(
		field_names(source, "D"),
		vec![
			"values".to_owned(),
			"more".to_owned(),
			"onHit".to_owned(),
			"label".to_owned(),
			"less".to_owned(),
			"after".to_owned(),
		]
	);
}
