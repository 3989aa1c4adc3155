//! Schema variants and dispatch.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record;

/// Schema represents the column layout of a database variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    /// GeoIP2/GeoLite2 City databases
    City,
    /// GeoIP2/GeoLite2 Country databases
    Country,
    /// GeoIP2 Connection Type databases
    ConnectionType,
    /// GeoIP2 ISP databases
    Isp,
}

impl Schema {
    /// Parse a schema name from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "city" => Some(Schema::City),
            "country" => Some(Schema::Country),
            "connection-type" | "connectiontype" | "connections" => Some(Schema::ConnectionType),
            "isp" => Some(Schema::Isp),
            _ => None,
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::City => "city",
            Schema::Country => "country",
            Schema::ConnectionType => "connection-type",
            Schema::Isp => "isp",
        }
    }

    /// Detect the schema from the `database_type` string embedded in the
    /// MMDB metadata.
    pub fn from_database_type(database_type: &str) -> Option<Self> {
        match database_type {
            "GeoIP2-City" | "GeoLite2-City" => Some(Schema::City),
            "GeoIP2-Country" | "GeoLite2-Country" => Some(Schema::Country),
            "GeoIP2-Connection-Type" => Some(Schema::ConnectionType),
            "GeoIP2-ISP" => Some(Schema::Isp),
            _ => None,
        }
    }

    /// Detect the schema from the database file name. A trailing `.gz`
    /// extension is ignored.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let name = name.strip_suffix(".gz").unwrap_or(name);
        match name {
            "GeoIP2City.mmdb" | "GeoIP2-City.mmdb" | "GeoLite2-City.mmdb" => Some(Schema::City),
            "GeoIP2Country.mmdb" | "GeoIP2-Country.mmdb" | "GeoLite2-Country.mmdb" => {
                Some(Schema::Country)
            }
            "GeoIP2Connections.mmdb" | "GeoIP2-Connection-Type.mmdb" => Some(Schema::ConnectionType),
            "GeoIP2ISP.mmdb" | "GeoIP2-ISP.mmdb" => Some(Schema::Isp),
            _ => None,
        }
    }

    /// Get the CSV header row for this schema.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Schema::City => record::CITY_COLUMNS,
            Schema::Country => record::COUNTRY_COLUMNS,
            Schema::ConnectionType => record::CONNECTION_TYPE_COLUMNS,
            Schema::Isp => record::ISP_COLUMNS,
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the schema for a database: an explicit choice wins, then the
/// embedded metadata, then the file name.
///
/// An unresolvable database is an error rather than an empty export.
pub fn resolve_schema(
    explicit: Option<Schema>,
    database_type: &str,
    path: &Path,
) -> Result<Schema> {
    if let Some(schema) = explicit {
        return Ok(schema);
    }
    if let Some(schema) = Schema::from_database_type(database_type) {
        log::debug!("detected schema {} from database type {:?}", schema, database_type);
        return Ok(schema);
    }
    if let Some(schema) = Schema::from_path(path) {
        log::debug!("detected schema {} from file name {:?}", schema, path);
        return Ok(schema);
    }
    Err(Error::UnsupportedSchema(database_type.to_string()))
}
