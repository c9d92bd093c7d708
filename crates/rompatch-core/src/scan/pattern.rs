use crate::error::{Error, Result};

/// Parse a hex byte pattern such as `"DE AD BE EF"` or `"DEADBEEF"`.
///
/// Wildcards are not accepted; every byte of a search pattern is exact.
pub fn parse_pattern(pattern: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in pattern.split_whitespace() {
        let token = token.trim_start_matches("0x").trim_start_matches("0X");
        if token.len() % 2 != 0 {
            return Err(Error::InvalidPattern(format!(
                "Odd number of hex digits in '{}'",
                token
            )));
        }

        for i in (0..token.len()).step_by(2) {
            let pair = token.get(i..i + 2).ok_or_else(|| {
                Error::InvalidPattern(format!("Invalid pattern token '{}'", token))
            })?;
            let value = u8::from_str_radix(pair, 16).map_err(|e| {
                Error::InvalidPattern(format!("Invalid pattern token '{}': {}", token, e))
            })?;
            bytes.push(value);
        }
    }

    if bytes.is_empty() {
        return Err(Error::InvalidPattern("Pattern is empty".to_string()));
    }

    Ok(bytes)
}

pub fn format_pattern(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
