//! Exact byte-pattern search over a ROM buffer
//!
//! Multi-byte patterns are only tried at every fourth position counting from
//! the start offset. Pointers and tables in a cartridge image sit on 4-byte
//! boundaries, so anything placed off that grid is never reported.

mod pattern;
mod replace;

use tracing::trace;

pub use pattern::{format_pattern, parse_pattern};
pub use replace::{MatchList, find_and_replace_all};

/// Distance between two candidate positions of the strided scan
pub const SCAN_STRIDE: usize = 4;

/// Search `buffer` for `pattern`, returning the offset of the first hit.
///
/// A single-byte pattern is looked up across the whole buffer from offset 0
/// and `start` is ignored. Longer patterns are tried at `start`,
/// `start + 4`, `start + 8`, ... until the candidate reaches
/// `buffer.len() - pattern.len()` or the end of the buffer.
///
/// # Examples
///
/// ```
/// use rompatch_core::search;
///
/// let mut rom = vec![0u8; 16];
/// rom[8..12].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
///
/// assert_eq!(search(&rom, &[0xDE, 0xAD, 0xBE, 0xEF], 0), Some(8));
/// assert_eq!(search(&rom, &[0xDE, 0xAD, 0xBE, 0xEF], 12), None);
/// ```
pub fn search(buffer: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    match pattern {
        [] => None,
        [byte] => search_byte(buffer, *byte),
        _ => search_strided(buffer, pattern, start),
    }
}

/// First index in the whole buffer holding `value`
pub fn search_byte(buffer: &[u8], value: u8) -> Option<usize> {
    buffer.iter().position(|&b| b == value)
}

/// Strided scan for a pattern of two or more bytes.
///
/// The scan stops on a candidate equal to `buffer.len() - pattern.len()`
/// without examining it, so a pattern ending flush with the end of the
/// buffer is never reported.
pub fn search_strided(buffer: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    if pattern.len() < 2 {
        return None;
    }

    let end = buffer.len();
    let last = end.checked_sub(pattern.len());

    let mut pos = start;
    while pos < end && Some(pos) != last {
        if matches_at(buffer, pattern, pos) {
            trace!("Pattern matched at 0x{:X}", pos);
            return Some(pos);
        }
        pos += SCAN_STRIDE;
    }

    None
}

/// Compare `pattern` against the buffer at `pos`.
///
/// Windows running past the end of the buffer never match.
fn matches_at(buffer: &[u8], pattern: &[u8], pos: usize) -> bool {
    let Some(window) = buffer.get(pos..pos + pattern.len()) else {
        return false;
    };

    // Two-byte pre-check before the full comparison
    window[..2] == pattern[..2] && window == pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADBEEF: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

    fn rom_with(len: usize, at: usize, pattern: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; len];
        rom[at..at + pattern.len()].copy_from_slice(pattern);
        rom
    }

    #[test]
    fn test_search_aligned_match() {
        let rom = rom_with(16, 8, &DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, 0), Some(8));
    }

    #[test]
    fn test_search_finds_every_aligned_offset() {
        for at in (0..28).step_by(4) {
            let rom = rom_with(64, at, &DEADBEEF);
            assert_eq!(search(&rom, &DEADBEEF, 0), Some(at), "offset {}", at);
        }
    }

    #[test]
    fn test_search_misses_unaligned_offsets() {
        for at in [1, 2, 3, 5, 6, 7, 9, 13] {
            let rom = rom_with(64, at, &DEADBEEF);
            assert_eq!(search(&rom, &DEADBEEF, 0), None, "offset {}", at);
        }
    }

    #[test]
    fn test_search_alignment_is_relative_to_start() {
        let rom = rom_with(64, 13, &DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, 0), None);
        assert_eq!(search(&rom, &DEADBEEF, 1), Some(13));
        assert_eq!(search(&rom, &DEADBEEF, 5), Some(13));
    }

    #[test]
    fn test_search_skips_offsets_before_start() {
        let mut rom = rom_with(32, 4, &DEADBEEF);
        rom[16..20].copy_from_slice(&DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, 0), Some(4));
        assert_eq!(search(&rom, &DEADBEEF, 8), Some(16));
    }

    #[test]
    fn test_search_start_at_end_is_not_found() {
        let rom = rom_with(16, 8, &DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, rom.len()), None);
        assert_eq!(search(&rom, &DEADBEEF, rom.len() + 3), None);
    }

    #[test]
    fn test_search_buffer_shorter_than_pattern() {
        let rom = [0xDE, 0xAD, 0xBE];
        assert_eq!(search(&rom, &DEADBEEF, 0), None);
        assert_eq!(search(&[], &DEADBEEF, 0), None);
    }

    #[test]
    fn test_search_empty_pattern() {
        let rom = rom_with(16, 8, &DEADBEEF);
        assert_eq!(search(&rom, &[], 0), None);
    }

    #[test]
    fn test_search_never_examines_last_aligned_window() {
        // 16 - 4 = 12 is a stride position, so the scan stops before it
        let rom = rom_with(16, 12, &DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, 0), None);
    }

    #[test]
    fn test_search_window_past_end_is_no_match() {
        // 14 - 4 = 10 is off the stride, the window at 12 runs past the end
        let mut rom = vec![0u8; 14];
        rom[12] = 0xDE;
        rom[13] = 0xAD;
        assert_eq!(search(&rom, &DEADBEEF, 0), None);
        assert_eq!(search(&rom, &[0xDE, 0xAD], 0), None);
    }

    #[test]
    fn test_search_match_near_end_off_stride() {
        // 12 - 7 = 5 is off the stride, so the candidate at 4 is still examined
        let rom = rom_with(12, 4, &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(search(&rom, &[1, 2, 3, 4, 5, 6, 7], 0), Some(4));
    }

    #[test]
    fn test_search_prefix_match_only() {
        let rom = rom_with(16, 4, &[0xDE, 0xAD, 0x00, 0xEF]);
        assert_eq!(search(&rom, &DEADBEEF, 0), None);
    }

    #[test]
    fn test_search_returns_first_hit() {
        let mut rom = rom_with(32, 20, &DEADBEEF);
        rom[4..8].copy_from_slice(&DEADBEEF);
        assert_eq!(search(&rom, &DEADBEEF, 0), Some(4));
    }

    #[test]
    fn test_search_single_byte_ignores_start() {
        let mut rom = vec![0u8; 16];
        rom[3] = 0xFF;
        rom[10] = 0xFF;
        assert_eq!(search(&rom, &[0xFF], 0), Some(3));
        assert_eq!(search(&rom, &[0xFF], 8), Some(3));
        assert_eq!(search(&rom, &[0xFF], rom.len()), Some(3));
    }

    #[test]
    fn test_search_single_byte_unaligned_and_missing() {
        let mut rom = vec![0u8; 9];
        rom[7] = 0x42;
        assert_eq!(search(&rom, &[0x42], 0), Some(7));
        assert_eq!(search(&rom, &[0x43], 0), None);
        assert_eq!(search(&[], &[0x42], 0), None);
    }

    #[test]
    fn test_search_strided_rejects_short_patterns() {
        let rom = [0xFF; 8];
        assert_eq!(search_strided(&rom, &[0xFF], 0), None);
        assert_eq!(search_strided(&rom, &[], 0), None);
    }
}
