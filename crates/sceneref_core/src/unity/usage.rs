use std::collections::HashSet;

use crate::unity::{EntityGraph, Guid};

/// Script GUIDs proven used by at least one scene.
///
/// Grows by set union only, so documents can be absorbed in any order and
/// per-document sets merged from parallel workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSet {
	used: HashSet<Guid>,
}

impl UsageSet {
	/// Usage contributed by a single scene.
	pub fn from_graph(graph: &EntityGraph) -> Self {
		let mut set = Self::default();
		set.absorb(graph);
		set
	}

	/// Add the usage evidence of one scene.
	///
	/// Every bound instance marks its script used. A field reference whose
	/// target is a bound instance marks the target's script used as well.
	pub fn absorb(&mut self, graph: &EntityGraph) {
		self.used.extend(graph.bindings.iter().map(|(_, guid)| guid.clone()));
		for reference in &graph.references {
			if let Some(guid) = graph.bindings.get(reference.to) {
				self.used.insert(guid.clone());
			}
		}
	}

	/// Union another set into this one.
	pub fn merge(&mut self, other: UsageSet) {
		self.used.extend(other.used);
	}

	/// Whether a script GUID is used.
	pub fn contains(&self, guid: &Guid) -> bool {
		self.used.contains(guid)
	}

	/// Number of used scripts.
	pub fn len(&self) -> usize {
		self.used.len()
	}

	/// Whether no script is used.
	pub fn is_empty(&self) -> bool {
		self.used.is_empty()
	}

	/// Used GUIDs in ascending order.
	pub fn sorted(&self) -> Vec<&Guid> {
		let mut out: Vec<&Guid> = self.used.iter().collect();
		out.sort();
		out
	}
}

#[cfg(test)]
mod tests;
