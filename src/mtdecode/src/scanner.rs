//! Marker-delimited entry scanning
//!
//! An entry runs from its marker up to, but not including, the next marker.
//! The last entry runs to the end of the buffer. Marker search uses memchr's
//! SIMD-accelerated `memmem` finder.

use std::iter::FusedIterator;

use memchr::memmem::Finder;

use crate::{Entry, Result, ENTRY_MARKER};

/// Sequential scanner over the entries of a buffer
///
/// The cursor holds the offset of the next entry's marker; `None` means no
/// marker is left and the stream has ended. Once `None`, it stays `None`.
/// A decode error also ends the stream.
pub struct Scanner<'a> {
    data: &'a [u8],
    cursor: Option<usize>,
    finder: Finder<'static>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first marker in `data`
    pub fn new(data: &'a [u8]) -> Self {
        let mut scanner = Self {
            data,
            cursor: None,
            finder: Finder::new(&ENTRY_MARKER),
        };
        scanner.advance_to(0);
        scanner
    }

    /// Offset of the next entry, or `None` at end of stream
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor to the first marker at or after `from`
    pub fn advance_to(&mut self, from: usize) {
        self.cursor = self.find_marker(from);
    }

    /// Decode the entry under the cursor
    ///
    /// Returns `Ok(None)` once the stream has ended. Both the boundary
    /// search and the cursor advance start one full marker past the current
    /// marker, so marker bytes overlapping the current one (e.g. X = 256)
    /// are never taken as the next entry.
    pub fn scan_next(&mut self) -> Result<Option<Entry>> {
        let Some(start) = self.cursor else {
            return Ok(None);
        };

        let resume = start + ENTRY_MARKER.len();
        let end = self.find_marker(resume).unwrap_or(self.data.len());

        match Entry::from_bytes(&self.data[start..end], start) {
            Ok(entry) => {
                tracing::debug!("Decoded entry at {:#x}..{:#x}: {}", start, end, entry);
                self.advance_to(resume);
                Ok(Some(entry))
            }
            Err(e) => {
                self.cursor = None;
                Err(e)
            }
        }
    }

    fn find_marker(&self, from: usize) -> Option<usize> {
        let haystack = self.data.get(from..)?;
        self.finder.find(haystack).map(|pos| from + pos)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_next().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}
