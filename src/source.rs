//! Database opening, with transparent gzip support.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use maxminddb::Reader;

use crate::error::Result;

/// Open an MMDB database file.
///
/// A path ending in `.gz` is decompressed in memory before handing the
/// buffer to the reader; anything else is read directly from disk.
pub fn open_database(path: &Path) -> Result<Reader<Vec<u8>>> {
    if path.extension().map_or(false, |ext| ext == "gz") {
        let mut decoder = GzDecoder::new(File::open(path)?);
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf)?;
        log::debug!("decompressed {:?}: {} bytes", path, buf.len());
        Ok(Reader::from_source(buf)?)
    } else {
        Ok(Reader::open_readfile(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_open_database_missing_file() {
        let err = open_database(Path::new("/nonexistent/GeoLite2-Country.mmdb")).unwrap_err();
        assert!(matches!(err, Error::Mmdb(_)));
    }

    #[test]
    fn test_open_database_gz_decompresses() {
        // A valid gzip stream wrapping a non-database payload must get past
        // the decompression layer and fail in the MMDB reader.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-db.mmdb.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"this is not an mmdb file").unwrap();
        encoder.finish().unwrap();

        let err = open_database(&path).unwrap_err();
        assert!(matches!(err, Error::Mmdb(_)));
    }

    #[test]
    fn test_open_database_gz_invalid_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.mmdb.gz");
        std::fs::write(&path, b"definitely not gzip").unwrap();

        let err = open_database(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
