use serde::Serialize;
use tracing::debug;

use super::search;
use crate::error::{Error, Result};

/// Offsets rewritten during one replace session, in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchList {
    offsets: Vec<usize>,
}

impl MatchList {
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.offsets.iter()
    }
}

/// Replace every occurrence of `pattern` in `buffer` with `replacement`.
///
/// Each hit is overwritten in place and scanning resumes right after the
/// written bytes, so replacements are never rescanned and never overlap.
/// The lengths are checked before the buffer is touched.
pub fn find_and_replace_all(
    buffer: &mut [u8],
    pattern: &[u8],
    replacement: &[u8],
) -> Result<MatchList> {
    if pattern.len() != replacement.len() {
        return Err(Error::LengthMismatch {
            pattern: pattern.len(),
            replacement: replacement.len(),
        });
    }
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }

    let mut matches = MatchList::default();
    let Some(limit) = buffer.len().checked_sub(pattern.len()) else {
        debug!("Buffer shorter than pattern, nothing to replace");
        return Ok(matches);
    };

    let mut cursor = 0;
    while cursor < limit {
        let offset = match search(buffer, pattern, cursor) {
            // Single-byte lookups restart from 0 and may land behind the cursor
            Some(offset) if offset >= cursor => offset,
            _ => break,
        };

        buffer[offset..offset + replacement.len()].copy_from_slice(replacement);
        debug!("Replaced {} bytes at 0x{:X}", replacement.len(), offset);

        matches.offsets.push(offset);
        cursor = offset + replacement.len();
    }

    Ok(matches)
}
