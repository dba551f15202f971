// Functional-pipeline showcase over a small travel catalog and a geographic hierarchy

pub mod catalog;
pub mod config;
pub mod consolidation;
pub mod model;
pub mod reports;
pub mod samples;
pub mod sequences;

// Re-export key types for convenience
pub use catalog::{export_xml, load_packages, load_states, CatalogError};
pub use config::{ConfigError, ShowcaseConfig};
pub use consolidation::{consolidate, group_by_identity, ConsolidationError, PackageGroup};
pub use model::{ChildPackage, City, IdentityKey, ModelError, Package, State};
pub use reports::{PopulationReport, ReportError};
