use std::collections::BTreeSet;

use crate::unity::{EntityGraph, FieldIndex, Guid, ScriptSchema, UsageSet};

const T1: &str = "11111111111111111111111111111111";
const T2: &str = "22222222222222222222222222222222";
const T3: &str = "33333333333333333333333333333333";

fn mono(id: i64, guid: &str, extra: &str) -> String {
	format!("--- !u!114 &{id}\nMonoBehaviour:\n  m_Script: {{fileID: 11500000, guid: {guid}, type: 3}}\n{extra}")
}

fn schema(fields: &[&str]) -> ScriptSchema {
	ScriptSchema {
		base_matched: true,
		fields: fields.iter().map(|item| (*item).to_owned()).collect::<BTreeSet<_>>(),
	}
}

#[test]
fn bound_instances_are_used_without_any_reference() {
	let text = mono(12, T1, "  unrelated: {fileID: 99}\n");
	let index: FieldIndex = std::iter::once((Guid::new(T1), schema(&["target"]))).collect();
	let usage = UsageSet::from_graph(&EntityGraph::build(&text, &index));

	assert_eq!(usage.len(), 1);
	assert!(usage.contains(&Guid::new(T1)));
}

#[test]
fn reference_to_bound_instance_marks_target_script() {
	let text = [mono(1, T1, "  target: {fileID: 2}\n  ghost: {fileID: 77}\n"), mono(2, T2, "")].concat();
	let index: FieldIndex = std::iter::once((Guid::new(T1), schema(&["target", "ghost"]))).collect();
	let graph = EntityGraph::build(&text, &index);
	assert_eq!(graph.references.len(), 2);

	let usage = UsageSet::from_graph(&graph);
	assert_eq!(usage.sorted(), vec![&Guid::new(T1), &Guid::new(T2)]);
}

#[test]
fn unknown_fields_never_add_usage() {
	let text = [mono(1, T1, "  stale: {fileID: 2}\n"), "--- !u!114 &2\nMonoBehaviour:\n  m_Enabled: 1\n".to_owned()].concat();
	let index: FieldIndex = std::iter::once((Guid::new(T1), schema(&["target"]))).collect();
	let graph = EntityGraph::build(&text, &index);

	assert!(graph.references.is_empty());
	assert_eq!(UsageSet::from_graph(&graph).sorted(), vec![&Guid::new(T1)]);
}

#[test]
fn merging_is_order_independent() {
	let first = UsageSet::from_graph(&EntityGraph::build(&mono(1, T1, ""), &FieldIndex::default()));
	let second = UsageSet::from_graph(&EntityGraph::build(&[mono(1, T2, ""), mono(2, T3, "")].concat(), &FieldIndex::default()));

	let mut left = first.clone();
	left.merge(second.clone());
	let mut right = second;
	right.merge(first.clone());
	right.merge(first);

	assert_eq!(left, right);
	assert_eq!(left.len(), 3);
}
