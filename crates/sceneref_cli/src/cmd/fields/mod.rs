use std::path::PathBuf;

use sceneref::unity::{Result, SchemaOptions, TypeDecl, parse_declarations, read_text, schema_from_decls};

use crate::cmd::util::{SchemaArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// C# source file.
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub schema: SchemaArgs,
}

/// Print parsed type declarations and which fields are serialized.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json, schema } = args;
	let options = schema.to_options();

	let source = read_text(&file)?;
	let decls = parse_declarations(&source);
	let summary = schema_from_decls(&decls, &options);

	let types: Vec<TypeJson> = decls
		.types
		.iter()
		.map(|ty| {
			let script = options.is_script(ty);
			TypeJson {
				name: ty.name.clone(),
				kind: ty.kind.as_str().to_owned(),
				bases: ty.bases.clone(),
				script,
				fields: field_rows(ty, script, &options),
			}
		})
		.collect();

	if json {
		let payload = FieldsJson {
			path: file.display().to_string(),
			base_matched: summary.base_matched,
			serialized: summary.fields.into_iter().collect(),
			types,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("base_matched: {}", summary.base_matched);
	println!("serialized: {}", summary.fields.len());
	for ty in &types {
		println!();
		let bases = if ty.bases.is_empty() { "-".to_owned() } else { ty.bases.join(", ") };
		println!("{} {} : {} (script={})", ty.kind, ty.name, bases, ty.script);
		for field in &ty.fields {
			let modifiers = if field.modifiers.is_empty() { "-".to_owned() } else { field.modifiers.join(" ") };
			println!("  {}\t{}\t{}\tserialized={}", field.name, field.type_name, modifiers, field.serialized);
		}
	}

	Ok(())
}

fn field_rows(ty: &TypeDecl, script: bool, options: &SchemaOptions) -> Vec<FieldJson> {
	ty.fields
		.iter()
		.flat_map(|field| {
			let serialized = script && options.is_serialized(field);
			field.names.iter().map(move |name| FieldJson {
				name: name.clone(),
				type_name: field.type_name.clone(),
				modifiers: field.modifiers.clone(),
				attributes: field.attributes.clone(),
				serialized,
			})
		})
		.collect()
}

#[derive(serde::Serialize)]
struct FieldsJson {
	path: String,
	base_matched: bool,
	serialized: Vec<String>,
	types: Vec<TypeJson>,
}

#[derive(serde::Serialize)]
struct TypeJson {
	name: String,
	kind: String,
	bases: Vec<String>,
	script: bool,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	#[serde(rename = "type")]
	type_name: String,
	modifiers: Vec<String>,
	attributes: Vec<String>,
	serialized: bool,
}
