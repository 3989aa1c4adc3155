//! Error types for mmdbcsv.

use thiserror::Error;

/// Error type for mmdbcsv operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database variant has no known CSV layout
    #[error("unsupported database schema: {0:?} (supported: city, country, connection-type, isp)")]
    UnsupportedSchema(String),

    /// Schema name given on the command line is not recognized
    #[error("unknown schema name: {0:?} (expected city, country, connection-type or isp)")]
    UnknownSchemaName(String),

    /// MMDB open or decode error
    #[error("MMDB error: {0}")]
    Mmdb(#[from] maxminddb::MaxMindDBError),

    /// Invalid CIDR
    #[error("invalid network: {0}")]
    Network(#[from] ipnetwork::IpNetworkError),

    /// CSV write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for mmdbcsv operations.
pub type Result<T> = std::result::Result<T, Error>;
