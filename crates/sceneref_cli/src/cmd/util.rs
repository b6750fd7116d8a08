use sceneref::unity::{AnalyzeOptions, SchemaOptions};

/// Schema flags shared by commands that read scripts.
#[derive(clap::Args, Debug, Clone)]
pub struct SchemaArgs {
	/// Base class a script must directly extend.
	#[arg(long, default_value = "MonoBehaviour")]
	pub base_type: String,
	/// Attribute name that makes a non-public field serialized.
	#[arg(long, default_value = "SerializeField")]
	pub serialize_attribute: String,
}

impl SchemaArgs {
	/// Map flags onto library schema options.
	pub(crate) fn to_options(&self) -> SchemaOptions {
		SchemaOptions {
			base_type: self.base_type.clone(),
			serialize_attribute: self.serialize_attribute.clone(),
		}
	}

	/// Map flags onto library analysis options.
	pub(crate) fn analyze_options(&self, sequential: bool) -> AnalyzeOptions {
		AnalyzeOptions {
			schema: self.to_options(),
			parallel: !sequential,
		}
	}
}

/// Print a JSON payload on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}
