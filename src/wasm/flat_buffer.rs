//! Flat buffer protocol for handing page numbers to JS in one copy
//!
//! ```text
//! [0]     MAGIC (0x42505047 = "BPPG" for validation)
//! [1]     SCHEMA_VERSION (currently 1)
//! [2]     page_count
//! [3..]   one number per page, in page order; 0 = no printed number
//! ```

use crate::document::PageList;
use crate::numbering::page_numbers;

/// Magic number for format validation: "BPPG" (Brochure Page PaGing)
pub const MAGIC: u32 = 0x4250_5047;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 3;

/// Sentinel for pages without a printed number
pub const NO_NUMBER: u32 = 0;

/// Encoded page numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberBuffer {
    pub data: Vec<u32>,
}

impl NumberBuffer {
    /// Encode the numbers of every page in the list
    pub fn encode(pages: &PageList) -> Self {
        let numbers = page_numbers(pages);

        let mut data = Vec::with_capacity(HEADER_SIZE + numbers.len());
        data.push(MAGIC);
        data.push(SCHEMA_VERSION);
        data.push(numbers.len() as u32);
        data.extend(numbers.into_iter().map(|n| n.unwrap_or(NO_NUMBER)));

        Self { data }
    }

    /// Decode a buffer back into per-page numbers.
    ///
    /// Returns `None` on a bad header or truncated body.
    #[cfg(test)]
    pub fn decode(data: &[u32]) -> Option<Vec<Option<u32>>> {
        if data.len() < HEADER_SIZE || data[0] != MAGIC || data[1] != SCHEMA_VERSION {
            return None;
        }
        let count = data[2] as usize;
        let body = data.get(HEADER_SIZE..HEADER_SIZE + count)?;
        Some(
            body.iter()
                .map(|&n| if n == NO_NUMBER { None } else { Some(n) })
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;

    #[test]
    fn test_encode_layout() {
        let pages = PageList::from(vec![
            Page::new("c", "cover"),
            Page::new("t", "toc"),
            Page::new("d", "daily"),
        ]);
        let buffer = NumberBuffer::encode(&pages);
        assert_eq!(buffer.as_slice(), &[MAGIC, SCHEMA_VERSION, 3, 0, 1, 2]);
        assert_eq!(
            NumberBuffer::decode(buffer.as_slice()),
            Some(vec![None, Some(1), Some(2)])
        );
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(NumberBuffer::decode(&[]), None);
        assert_eq!(NumberBuffer::decode(&[0xDEAD, SCHEMA_VERSION, 0]), None);
        assert_eq!(NumberBuffer::decode(&[MAGIC, 99, 0]), None);
        // claims two pages, carries one
        assert_eq!(NumberBuffer::decode(&[MAGIC, SCHEMA_VERSION, 2, 1]), None);
    }
}
