//! Public library API for analyzing Unity projects: scene reference graphs,
//! GameObject hierarchies, and unused MonoBehaviour scripts.

/// Scene block parsing, C# declaration scanning, and cross-graph usage analysis.
pub mod unity;
