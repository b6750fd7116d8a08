mod analysis;
mod block;
mod decl;
mod error;
mod fields;
mod graph;
mod hierarchy;
mod ids;
mod lexer;
mod line;
mod meta;
mod project;
mod report;
mod usage;

/// Project analysis driver, options, and results.
pub use analysis::{AnalyzeOptions, ProjectAnalysis, SceneAnalysis, analyze_project, build_field_index};
/// Scene block container, iterator, and header parser.
pub use block::{BlockIter, SceneBlock, parse_header, split_blocks};
/// C# declaration model and parser.
pub use decl::{FieldDecl, SourceDecls, TypeDecl, TypeKind, parse_declarations};
/// Error and result aliases.
pub use error::{Result, UnityError};
/// Serialized-field schema extraction and per-script index.
pub use fields::{FieldIndex, SchemaOptions, ScriptSchema, extract_script_schema, schema_from_decls};
/// Entity graph types and two-pass builders.
pub use graph::{EntityGraph, FieldRef, ScriptBindings, TransformLink, bind_scripts, collect_field_refs};
/// Scene hierarchy reconstruction.
pub use hierarchy::{PreOrder, SceneNode, build_hierarchy};
/// Scene identifiers.
pub use ids::{ClassId, FileId, Guid};
/// `.meta` sidecar GUID reader.
pub use meta::read_meta_guid;
/// Project tree scanning and file helpers.
pub use project::{ProjectFiles, ScriptRecord, read_text, relative_path, scan_project};
/// Report writers.
pub use report::{ReportFiles, UNUSED_CSV_NAME, dump_file_name, write_hierarchy_dump, write_reports, write_unused_csv};
/// Script usage accumulator.
pub use usage::UsageSet;
