use std::collections::HashSet;

use crate::unity::{EntityGraph, FileId};

/// One named GameObject in a reconstructed scene hierarchy.
///
/// Construction, traversal, and drop are all iterative, so arbitrarily deep
/// transform chains never exhaust the stack.
#[derive(Debug, PartialEq, Eq)]
pub struct SceneNode {
	/// GameObject display name.
	pub name: String,
	/// GameObject file id.
	pub object: FileId,
	/// Child nodes in `m_Children` order.
	pub children: Vec<SceneNode>,
}

impl SceneNode {
	/// Number of nodes in this subtree, including `self`.
	pub fn subtree_len(&self) -> usize {
		let mut count = 0;
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			count += 1;
			stack.extend(node.children.iter());
		}
		count
	}

	/// Iterate this subtree in pre-order with each node's depth below `self`.
	pub fn pre_order(&self) -> PreOrder<'_> {
		PreOrder { stack: vec![(self, 0)] }
	}
}

/// Pre-order iterator over a [`SceneNode`] subtree, yielding `(node, depth)`.
pub struct PreOrder<'a> {
	stack: Vec<(&'a SceneNode, usize)>,
}

impl<'a> Iterator for PreOrder<'a> {
	type Item = (&'a SceneNode, usize);

	fn next(&mut self) -> Option<Self::Item> {
		let (node, depth) = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
		Some((node, depth))
	}
}

impl Drop for SceneNode {
	fn drop(&mut self) {
		let mut pending = std::mem::take(&mut self.children);
		while let Some(mut node) = pending.pop() {
			pending.append(&mut node.children);
		}
	}
}

/// Rebuild the ordered GameObject forest of one scene.
///
/// Roots follow `SceneRoots` order; without it the forest is empty. A
/// GameObject is attached at most once (first attachment wins, in pre-order),
/// and Transforms with an unknown owner or an unnamed owner are skipped along
/// with their subtree.
pub fn build_hierarchy(graph: &EntityGraph) -> Vec<SceneNode> {
	let mut attached = HashSet::new();
	let mut forest = Vec::new();
	for root in &graph.roots {
		if let Some(node) = attach(graph, *root, &mut attached) {
			forest.push(node);
		}
	}
	forest
}

/// Node under construction and the next child slot of its Transform to try.
struct Frame {
	node: SceneNode,
	transform: FileId,
	next: usize,
}

fn attach(graph: &EntityGraph, root: FileId, attached: &mut HashSet<FileId>) -> Option<SceneNode> {
	let node = open(graph, root, attached)?;
	let mut stack = vec![Frame {
		node,
		transform: root,
		next: 0,
	}];

	loop {
		let frame = stack.last_mut()?;
		let child = graph.children(frame.transform).get(frame.next).copied();
		frame.next += 1;

		match child {
			Some(transform) => {
				if let Some(node) = open(graph, transform, attached) {
					stack.push(Frame { node, transform, next: 0 });
				}
			}
			None => {
				let done = stack.pop()?.node;
				match stack.last_mut() {
					Some(parent) => parent.node.children.push(done),
					None => return Some(done),
				}
			}
		}
	}
}

/// Start a node for `transform` if its owner is named and not yet attached.
fn open(graph: &EntityGraph, transform: FileId, attached: &mut HashSet<FileId>) -> Option<SceneNode> {
	let object = graph.owner(transform)?;
	let name = graph.name(object)?;
	if !attached.insert(object) {
		return None;
	}
	Some(SceneNode {
		name: name.to_owned(),
		object,
		children: Vec::new(),
	})
}
