//! Decode pipeline: validate, scan, optionally filter
//!
//! Everything the run needs is passed in through [`Options`].

use std::path::Path;

use crate::{filter, Decoder, Entry, Result, DEFAULT_MIN_DISTANCE};

/// Pipeline settings
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Proximity filter threshold; `None` disables filtering
    pub min_distance: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_distance: Some(DEFAULT_MIN_DISTANCE),
        }
    }
}

impl Options {
    /// Options with the proximity filter turned off
    pub fn unfiltered() -> Self {
        Self { min_distance: None }
    }
}

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Entries that survived filtering, in file order
    pub entries: Vec<Entry>,
    /// Number of entries decoded before filtering
    pub decoded: usize,
}

impl Outcome {
    /// Entries dropped by the proximity filter
    pub fn discarded(&self) -> usize {
        self.decoded - self.entries.len()
    }
}

/// Decode an in-memory log and apply the configured filter
pub fn run(data: Vec<u8>, options: &Options) -> Result<Outcome> {
    let decoder = Decoder::new(data)?;
    finish(&decoder, options)
}

/// Read a log file and run the pipeline on it
pub fn run_file(path: impl AsRef<Path>, options: &Options) -> Result<Outcome> {
    let decoder = Decoder::open(path)?;
    finish(&decoder, options)
}

fn finish(decoder: &Decoder, options: &Options) -> Result<Outcome> {
    let entries = decoder.decode_all()?;
    let decoded = entries.len();

    let entries = match options.min_distance {
        Some(min_distance) => filter::filter_nearby(entries, min_distance),
        None => entries,
    };

    tracing::debug!("Decoded {} entries, {} after filtering", decoded, entries.len());
    Ok(Outcome { entries, decoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::file_bytes;
    use crate::Coordinate;

    fn sample() -> Vec<u8> {
        file_bytes(&[(5, 10, "Gold"), (6, 11, "Gold")])
    }

    #[test]
    fn test_default_filters() {
        let outcome = run(sample(), &Options::default()).unwrap();
        assert_eq!(outcome.decoded, 2);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.discarded(), 1);
        assert_eq!(outcome.entries[0].coords, Coordinate::new(5, 144, 10));
    }

    #[test]
    fn test_zero_threshold() {
        let options = Options {
            min_distance: Some(0.0),
        };
        assert_eq!(run(sample(), &options).unwrap().entries.len(), 2);
    }

    #[test]
    fn test_unfiltered() {
        let outcome = run(sample(), &Options::unfiltered()).unwrap();
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.discarded(), 0);
    }

    #[test]
    fn test_format_error_propagates() {
        let err = run(vec![0x01; 32], &Options::default()).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_run_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("log.dat");
        std::fs::write(&path, sample()).unwrap();

        let outcome = run_file(&path, &Options::unfiltered()).unwrap();
        assert_eq!(outcome.decoded, 2);
        assert_eq!(outcome.entries.len(), 2);
    }
}
