//! # Colocalization data model
//!
//! Parses flat, tab-delimited colocalization rows into validated, strongly-typed
//! records and describes how those records map onto relational table rows.
//!
//! - [models::Variant] and [models::Locus]: genomic identifiers parsed from
//!   `chromosome:position:ref:alt` and `chromosome:start-stop` text
//! - [models::CausalVariant]: one variant's statistics from two analyses,
//!   merged by [reconcile]
//! - [models::Colocalization]: the full record, built by
//!   [models::Colocalization::from_row]
//! - [schema]: column layouts and the entity to row mapping
//!
//! Everything here is a pure function of its input; there is no I/O.
//!
//! # Example
//!
//! ```
//! use coloc_core::{parse_variant, reconcile};
//!
//! let variant = parse_variant("chr9_96792507_T_<INS:ME:ALU>").unwrap();
//! assert_eq!(variant.to_string(), "9:96792507:T:<INS:ME:ALU>");
//!
//! let merged = reconcile("1_1_T_C,0.04,0.19", "1_1_T_C,0.02,0.12").unwrap();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].credible_set_count(), 2);
//! ```
pub mod errors;
pub mod json;
pub mod models;
pub mod schema;
pub mod utils;

// re-exports
pub use errors::{ColocError, Result};
pub use models::causal_variant::reconcile;
pub use models::locus::parse_locus;
pub use models::variant::parse_variant;
pub use models::{CausalVariant, Colocalization, Locus, Variant};
pub use schema::ToRow;
