//! mmdbcsv - dump MaxMind GeoIP2/GeoLite2 databases to CSV.
//!
//! This crate reads an MMDB file and writes one CSV row per network
//! prefix, with a fixed column layout per database variant (City, Country,
//! ISP, Connection Type). Binary tree decoding is delegated to the
//! `maxminddb` crate; this crate drives its network iterator, skips the
//! aliased IPv6 ranges so each record prints once, and renders the rows.
//!
//! # Quick Start
//!
//! ```ignore
//! use mmdbcsv::{export_csv, open_database, resolve_schema, ExportOptions};
//! use std::path::Path;
//!
//! let path = Path::new("GeoLite2-Country.mmdb");
//! let reader = open_database(path)?;
//! let schema = resolve_schema(None, &reader.metadata.database_type, path)?;
//! let rows = export_csv(
//!     &reader,
//!     schema,
//!     ExportOptions::default(),
//!     std::io::stdout().lock(),
//! )?;
//! eprintln!("{} rows", rows);
//! ```
//!
//! # Schema resolution
//!
//! The schema is resolved from, in priority order: an explicit caller
//! choice, the `database_type` string embedded in the database metadata,
//! and the database file name. An unresolvable database is an error.

mod error;
mod network;

pub mod export;
pub mod record;
pub mod schema;
pub mod scrub;
pub mod source;

// Re-export core types
pub use error::{Error, Result};
pub use export::{export_csv, ExportOptions};
pub use schema::{resolve_schema, Schema};
pub use source::open_database;
