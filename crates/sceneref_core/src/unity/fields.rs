use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::unity::{FieldDecl, Guid, SourceDecls, TypeDecl, TypeKind, parse_declarations};

/// Names that decide which C# declarations count as serialized script fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
	/// Direct base type a class must list to be a script (`MonoBehaviour`).
	pub base_type: String,
	/// Attribute name fragment that makes a non-public field serialized (`SerializeField`).
	pub serialize_attribute: String,
}

impl Default for SchemaOptions {
	fn default() -> Self {
		Self {
			base_type: "MonoBehaviour".to_owned(),
			serialize_attribute: "SerializeField".to_owned(),
		}
	}
}

impl SchemaOptions {
	/// Whether a declaration is a class directly extending the base type.
	pub fn is_script(&self, ty: &TypeDecl) -> bool {
		ty.kind == TypeKind::Class && ty.extends(&self.base_type)
	}

	/// Whether a field of a script class is serialized.
	///
	/// A field qualifies when it is `public` or carries the serialize
	/// attribute, and is neither `static` nor `const`.
	pub fn is_serialized(&self, field: &FieldDecl) -> bool {
		(field.is_public() || field.has_attribute(&self.serialize_attribute)) && !field.is_static()
	}
}

/// Serialized-field schema of one script source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSchema {
	/// Whether any class in the file directly extends the configured base type.
	pub base_matched: bool,
	/// Names of fields eligible to hold serialized references.
	pub fields: BTreeSet<String>,
}

/// Extract the serialized-field schema from C# source text.
pub fn extract_script_schema(source: &str, options: &SchemaOptions) -> ScriptSchema {
	schema_from_decls(&parse_declarations(source), options)
}

/// Reduce parsed declarations to the serialized-field schema.
///
/// Only direct fields of classes whose direct base list names the base type
/// are considered.
pub fn schema_from_decls(decls: &SourceDecls, options: &SchemaOptions) -> ScriptSchema {
	let mut schema = ScriptSchema::default();
	for ty in &decls.types {
		if !options.is_script(ty) {
			continue;
		}
		schema.base_matched = true;

		for field in &ty.fields {
			if !options.is_serialized(field) {
				trace!(class = %ty.name, names = ?field.names, "field not serialized");
				continue;
			}
			schema.fields.extend(field.names.iter().cloned());
		}
	}
	schema
}

/// Serialized field names per script GUID.
///
/// Scripts without a matched class are absent, so their instances are never
/// scanned for field references.
#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
	by_guid: HashMap<Guid, BTreeSet<String>>,
}

impl FieldIndex {
	/// Record a script schema; unmatched schemas are dropped.
	pub fn insert(&mut self, guid: Guid, schema: ScriptSchema) {
		if !schema.base_matched {
			return;
		}
		self.by_guid.insert(guid, schema.fields);
	}

	/// Serialized field names for a script GUID.
	pub fn fields(&self, guid: &Guid) -> Option<&BTreeSet<String>> {
		self.by_guid.get(guid)
	}

	/// Number of scripts with a known schema.
	pub fn len(&self) -> usize {
		self.by_guid.len()
	}

	/// Whether no script schema is known.
	pub fn is_empty(&self) -> bool {
		self.by_guid.is_empty()
	}
}

impl FromIterator<(Guid, ScriptSchema)> for FieldIndex {
	fn from_iter<I: IntoIterator<Item = (Guid, ScriptSchema)>>(iter: I) -> Self {
		let mut index = Self::default();
		for (guid, schema) in iter {
			index.insert(guid, schema);
		}
		index
	}
}
