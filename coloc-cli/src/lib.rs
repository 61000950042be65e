//! Command line front end for the colocalization data model.
//!
//! Reads tab-delimited colocalization tables (plain, gzipped, or stdin) and
//! either prints every row as JSON or describes the storage layout.
pub mod parse;
pub mod reader;
pub mod schema;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "coloc-cli";
    pub const BIN_NAME: &str = "coloc";
}
