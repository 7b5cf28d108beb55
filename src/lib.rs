//! communedb workspace root
//! ========================
//!
//! This crate exists to host the runnable demos under `demos/` against
//! the bundled sample extracts:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! cargo run --example comparing_cities
//! ```
//!
//! For the actual library, see the `communedb-core` member crate; for the
//! command line, see `communedb-cli`.

pub use communedb_core::*;
