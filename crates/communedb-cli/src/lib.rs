//! communedb-cli
//! =============
//!
//! Command-line interface for the `communedb-core` commune database.
//!
//! This crate primarily provides a binary (`communedb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! communedb-cli --help
//! communedb-cli stats
//! communedb-cli resolve orleans
//! communedb-cli compare Paris Lyon
//! ```
//!
//! For programmatic access to the loaders and the resolver, use the
//! [`communedb-core`] crate directly.
//!
//! [`communedb-core`]: https://docs.rs/communedb-core

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
