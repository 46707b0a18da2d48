//! File header validation
//!
//! The header is the 3-byte preamble followed, at offset 4, by the marker of
//! the first entry. Nothing else in the file is checked up front.

use crate::{Error, Result, ENTRY_MARKER, FIRST_MARKER_OFFSET, HEADER_SIZE, PREAMBLE};

/// Validate the preamble and the first entry marker
pub fn validate(data: &[u8]) -> Result<()> {
    if data.len() < HEADER_SIZE {
        return Err(Error::FileTooShort {
            needed: HEADER_SIZE,
            actual: data.len(),
        });
    }

    if data[..PREAMBLE.len()] != PREAMBLE {
        return Err(Error::InvalidPreamble(data[0], data[1], data[2]));
    }

    if data[FIRST_MARKER_OFFSET..HEADER_SIZE] != ENTRY_MARKER {
        return Err(Error::MissingEntryMarker);
    }

    Ok(())
}

/// Check if data looks like a Mineral Tracker log
pub fn is_mineral_log(data: &[u8]) -> bool {
    validate(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::file_bytes;

    #[test]
    fn test_validate_minimal_header() {
        let mut data = vec![0x00, 0x00, 0x00, 0xaa];
        data.extend_from_slice(&ENTRY_MARKER);
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        for len in 0..HEADER_SIZE {
            let data = vec![0u8; len];
            match validate(&data) {
                Err(Error::FileTooShort { needed, actual }) => {
                    assert_eq!(needed, HEADER_SIZE);
                    assert_eq!(actual, len);
                }
                other => panic!("expected FileTooShort, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_bad_preamble() {
        for i in 0..3 {
            let mut data = file_bytes(&[(5, 10, "Gold")]);
            data[i] = 0x01;
            assert!(matches!(validate(&data), Err(Error::InvalidPreamble(..))));
        }
    }

    #[test]
    fn test_validate_missing_marker() {
        let mut data = file_bytes(&[(5, 10, "Gold")]);
        data[7] = 0x02;
        assert!(matches!(validate(&data), Err(Error::MissingEntryMarker)));
    }

    #[test]
    fn test_validate_marker_at_wrong_offset() {
        // Marker shifted one byte to the right
        let mut data = vec![0x00, 0x00, 0x00, 0x00, 0x00];
        data.extend_from_slice(&ENTRY_MARKER);
        assert!(matches!(validate(&data), Err(Error::MissingEntryMarker)));
    }

    #[test]
    fn test_is_mineral_log() {
        assert!(is_mineral_log(&file_bytes(&[(1, 2, "Iron")])));
        assert!(!is_mineral_log(b"not a log at all"));
    }
}
