pub mod causal_variant;
pub mod colocalization;
pub mod locus;
pub mod variant;

// re-export for cleaner imports
pub use self::causal_variant::{CausalVariant, CredibleSetStatistics, Membership};
pub use self::colocalization::Colocalization;
pub use self::locus::Locus;
pub use self::variant::Variant;
