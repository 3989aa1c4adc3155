//! CSV export driver: one header row, one row per network.

use std::io::Write;

use maxminddb::Reader;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::network;
use crate::record::{CityRecord, ConnectionTypeRecord, CountryRecord, IspRecord};
use crate::schema::Schema;
use crate::scrub::scrub_field;

/// Output options for an export run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Strip quote characters and trim whitespace from every field.
    pub clean: bool,
}

/// Write the database contents as CSV to `out`.
///
/// Emits the schema's header row followed by one row per non-aliased
/// network, in traversal order, and flushes before returning. Any decode
/// or write error aborts the run; rows already flushed stay in the output.
///
/// Returns the number of data rows written.
pub fn export_csv<S, W>(
    reader: &Reader<S>,
    schema: Schema,
    options: ExportOptions,
    out: W,
) -> Result<u64>
where
    S: AsRef<[u8]>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(schema.header())?;

    let rows = match schema {
        Schema::City => write_rows(reader, &mut wtr, options, CityRecord::to_row)?,
        Schema::Country => write_rows(reader, &mut wtr, options, CountryRecord::to_row)?,
        Schema::ConnectionType => {
            write_rows(reader, &mut wtr, options, ConnectionTypeRecord::to_row)?
        }
        Schema::Isp => write_rows(reader, &mut wtr, options, IspRecord::to_row)?,
    };

    wtr.flush()?;
    log::info!("wrote {} {} rows", rows, schema);
    Ok(rows)
}

fn write_rows<T, S, W>(
    reader: &Reader<S>,
    wtr: &mut csv::Writer<W>,
    options: ExportOptions,
    to_row: fn(&T, String) -> Vec<String>,
) -> Result<u64>
where
    T: DeserializeOwned,
    S: AsRef<[u8]>,
    W: Write,
{
    let root = network::iteration_root(reader.metadata.ip_version)?;
    let mut rows = 0u64;
    for item in reader.within::<T>(root)? {
        let item = item?;
        if network::is_aliased(&item.ip_net) {
            continue;
        }
        let mut row = to_row(&item.info, network::format_network(&item.ip_net));
        if options.clean {
            for field in &mut row {
                *field = scrub_field(field);
            }
        }
        wtr.write_record(&row)?;
        rows += 1;
    }
    Ok(rows)
}
