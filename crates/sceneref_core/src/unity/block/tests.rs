use crate::unity::{ClassId, parse_header, split_blocks};

const SCENE: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1 &10
GameObject:
  m_Name: Player
--- !u!4 &11
Transform:
  m_GameObject: {fileID: 10}
--- !u!114 &12 stripped
MonoBehaviour:
";

#[test]
fn splits_blocks_in_document_order() {
	let blocks: Vec<_> = split_blocks(SCENE).collect();
	assert_eq!(blocks.len(), 3);

	assert_eq!(blocks[0].class, ClassId::GameObject);
	assert_eq!(blocks[0].file_id, 10);
	assert_eq!(blocks[0].line, 3);
	assert_eq!(blocks[0].body, vec!["GameObject:", "  m_Name: Player"]);

	assert_eq!(blocks[1].class, ClassId::Transform);
	assert_eq!(blocks[1].body, vec!["Transform:", "  m_GameObject: {fileID: 10}"]);

	assert_eq!(blocks[2].class, ClassId::MonoBehaviour);
	assert_eq!(blocks[2].file_id, 12);
	assert_eq!(blocks[2].body, vec!["MonoBehaviour:"]);
}

#[test]
fn text_without_headers_yields_nothing() {
	assert_eq!(split_blocks("%YAML 1.1\nfoo: bar\n").count(), 0);
	assert_eq!(split_blocks("").count(), 0);
}

#[test]
fn splitting_is_restartable() {
	let first: Vec<_> = split_blocks(SCENE).map(|block| block.file_id).collect();
	let second: Vec<_> = split_blocks(SCENE).map(|block| block.file_id).collect();
	assert_eq!(first, vec![10, 11, 12]);
	assert_eq!(first, second);
}

#[test]
fn header_must_start_the_line() {
	let text = "--- !u!1 &1\n  --- !u!4 &2\nname: x\n";
	let blocks: Vec<_> = split_blocks(text).collect();
	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0].body, vec!["  --- !u!4 &2", "name: x"]);
}

#[test]
fn empty_block_has_empty_body() {
	let blocks: Vec<_> = split_blocks("--- !u!1 &1\n--- !u!1 &2\n").collect();
	assert_eq!(blocks.len(), 2);
	assert!(blocks[0].body.is_empty());
	assert!(blocks[1].body.is_empty());
}

#[test]
fn header_parsing_accepts_negative_ids_and_rejects_overflow() {
	assert_eq!(parse_header("--- !u!1660057539 &9223372036854775807"), Some((ClassId::SceneRoots, i64::MAX)));
	assert_eq!(parse_header("--- !u!4 &-42"), Some((ClassId::Transform, -42)));
	assert_eq!(parse_header("---!u!224&7"), Some((ClassId::Other(224), 7)));
	assert_eq!(parse_header("--- !u!1 &99999999999999999999"), None);
	assert_eq!(parse_header("--- !u!99999999999 &1"), None);
	assert_eq!(parse_header("--- !x!1 &1"), None);
}

#[test]
fn crlf_line_endings_are_stripped() {
	let blocks: Vec<_> = split_blocks("--- !u!1 &5\r\n  m_Name: A\r\n").collect();
	assert_eq!(blocks[0].body, vec!["  m_Name: A"]);
}
