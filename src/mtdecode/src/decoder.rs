//! Owning decoder for a whole Mineral Tracker log

use std::fs;
use std::path::Path;

use crate::{header, Entry, Result, Scanner};

/// A validated Mineral Tracker log held in memory
///
/// The whole file is read up front; entries are independent values, so the
/// decoder can be dropped once scanning is done.
#[derive(Debug, Clone)]
pub struct Decoder {
    data: Vec<u8>,
}

impl Decoder {
    /// Validate the header and take ownership of the buffer
    pub fn new(data: Vec<u8>) -> Result<Self> {
        header::validate(&data)?;
        tracing::debug!("Header valid, {} bytes", data.len());
        Ok(Self { data })
    }

    /// Read and validate a log file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading {}", path.display());
        let data = fs::read(path)?;
        Self::new(data)
    }

    /// A fresh scanner positioned on the first entry
    pub fn entries(&self) -> Scanner<'_> {
        Scanner::new(&self.data)
    }

    /// Decode every entry in file order
    ///
    /// Stops at the first malformed entry; nothing decoded before it is
    /// returned.
    pub fn decode_all(&self) -> Result<Vec<Entry>> {
        self.entries().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::file_bytes;
    use crate::{Coordinate, Error, ENTRY_MARKER};

    #[test]
    fn test_decode_all() {
        let data = file_bytes(&[(5, 10, "Gold"), (6, 11, "Gold")]);
        let entries = Decoder::new(data).unwrap().decode_all().unwrap();

        assert_eq!(
            entries,
            vec![
                Entry {
                    name: "Gold".into(),
                    coords: Coordinate::new(5, 144, 10),
                    unknown: [0x00, 0x13],
                },
                Entry {
                    name: "Gold".into(),
                    coords: Coordinate::new(6, 144, 11),
                    unknown: [0x00, 0x13],
                },
            ]
        );
    }

    #[test]
    fn test_n_entries_then_end_of_stream() {
        let records: Vec<(i32, i32, String)> = (0..25)
            .map(|i| (i * 100, -i * 100, format!("Ore{}", i)))
            .collect();
        let borrowed: Vec<(i32, i32, &str)> =
            records.iter().map(|(x, z, n)| (*x, *z, n.as_str())).collect();

        let decoder = Decoder::new(file_bytes(&borrowed)).unwrap();
        let mut scanner = decoder.entries();
        for (x, z, name) in &records {
            let entry = scanner.scan_next().unwrap().unwrap();
            assert_eq!(&entry.name, name);
            assert_eq!(entry.coords, Coordinate::from_xz(*x, *z));
        }
        assert!(scanner.scan_next().unwrap().is_none());
    }

    #[test]
    fn test_rejects_bad_header() {
        let mut data = file_bytes(&[(5, 10, "Gold")]);
        data[1] = 0xff;
        let err = Decoder::new(data).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_rejects_short_file() {
        let err = Decoder::new(vec![0x00; 11]).unwrap_err();
        assert!(matches!(err, Error::FileTooShort { actual: 11, .. }));
    }

    #[test]
    fn test_header_only_file_fails_decode() {
        // First marker present but nothing after it
        let mut data = vec![0x00; 4];
        data.extend_from_slice(&ENTRY_MARKER);

        let decoder = Decoder::new(data).unwrap();
        let err = decoder.decode_all().unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_no_partial_results() {
        let mut data = file_bytes(&[(5, 10, "Gold"), (6, 11, "Iron")]);
        data.extend_from_slice(&ENTRY_MARKER);
        data.extend_from_slice(&[0x00, 0x01]);

        let decoder = Decoder::new(data).unwrap();
        assert!(decoder.decode_all().is_err());
    }

    #[test]
    fn test_entries_restarts() {
        let decoder = Decoder::new(file_bytes(&[(1, 2, "Coal")])).unwrap();
        assert_eq!(decoder.entries().count(), 1);
        assert_eq!(decoder.entries().count(), 1);
    }

    #[test]
    fn test_open_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("minerals.dat");
        fs::write(&path, file_bytes(&[(7, 8, "Emerald")])).unwrap();

        let decoder = Decoder::open(&path).unwrap();
        let entries = decoder.decode_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Emerald");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Decoder::open(temp_dir.path().join("missing.dat")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
