//! Hexadecimal string decoding and encoding
//!
//! Input strings may carry an optional `0x` prefix; output is always
//! lowercase hex without a prefix.

use anyhow::{Result, bail};

/// Decode a hexadecimal string into bytes.
///
/// A leading literal `0x` is stripped before decoding. The remainder must
/// consist solely of hex digits and have even length; `""` and `"0x"` decode
/// to an empty byte vector.
pub fn decode_hex_string(data: &str) -> Result<Vec<u8>> {
    let hex = data.strip_prefix("0x").unwrap_or(data);

    // Validate before slicing so multi-byte characters cannot split a slice.
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("invalid hex character '{}' in input", bad);
    }
    if hex.len() % 2 != 0 {
        bail!("hex input has an odd number of digits ({})", hex.len());
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let byte = u8::from_str_radix(&hex[i..i + 2], 16)?;
        bytes.push(byte);
    }

    Ok(bytes)
}

/// Encode bytes as a lowercase hex string, no prefix.
pub fn encode_hex_string(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{:02x}", byte)).collect()
}
