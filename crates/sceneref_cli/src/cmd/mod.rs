/// Full project analysis with report files.
pub mod analyze;
/// Script declaration and serialized-field inspection.
pub mod fields;
/// Scene entity graph inspection.
pub mod graph;
/// Scene hierarchy printing.
pub mod tree;
/// Unused script listing.
pub mod unused;
/// Shared command helpers.
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;
