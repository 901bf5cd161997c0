//! Output framing for compressed payloads
//!
//! The length-prefixed envelope places two 32-byte big-endian words ahead of
//! the payload: a fixed offset word (always 32) and the payload's byte
//! length. The bare format emits the payload unchanged.

/// Width of an envelope word in bytes.
pub const WORD_LEN: usize = 32;

/// The fixed offset word carried ahead of the length field.
pub const OFFSET_WORD: u64 = 32;

/// How the compressed payload is framed on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `be256(32)`, then `be256(payload length)`, then the payload.
    LengthPrefixed,
    /// The payload alone.
    Bare,
}

/// Encode a value as a 32-byte big-endian word.
pub fn be256(value: u64) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Frame a payload according to the chosen output format.
pub fn frame_payload(payload: &[u8], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Bare => payload.to_vec(),
        OutputFormat::LengthPrefixed => {
            let mut framed = Vec::with_capacity(2 * WORD_LEN + payload.len());
            framed.extend_from_slice(&be256(OFFSET_WORD));
            framed.extend_from_slice(&be256(payload.len() as u64));
            framed.extend_from_slice(payload);
            framed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_value(word: &[u8]) -> u64 {
        assert_eq!(word.len(), WORD_LEN);
        assert!(word[..WORD_LEN - 8].iter().all(|&b| b == 0));
        u64::from_be_bytes(word[WORD_LEN - 8..].try_into().unwrap())
    }

    #[test]
    fn test_be256_encodes_most_significant_byte_first() {
        let word = be256(32);
        assert_eq!(word[WORD_LEN - 1], 0x20);
        assert!(word[..WORD_LEN - 1].iter().all(|&b| b == 0));

        let word = be256(0x0102_0304);
        assert_eq!(&word[WORD_LEN - 4..], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_bare_format_passes_payload_through() {
        let payload = [0xcb, 0x48, 0xcd];
        assert_eq!(frame_payload(&payload, OutputFormat::Bare), payload);
    }

    #[test]
    fn test_length_prefixed_envelope_layout() {
        let payload = [0xaa, 0xbb, 0xcc];
        let framed = frame_payload(&payload, OutputFormat::LengthPrefixed);

        assert_eq!(framed.len(), 2 * WORD_LEN + payload.len());
        assert_eq!(word_value(&framed[..WORD_LEN]), OFFSET_WORD);
        assert_eq!(word_value(&framed[WORD_LEN..2 * WORD_LEN]), payload.len() as u64);
        assert_eq!(&framed[2 * WORD_LEN..], &payload);
    }

    #[test]
    fn test_length_prefixed_empty_payload() {
        let framed = frame_payload(&[], OutputFormat::LengthPrefixed);
        assert_eq!(framed.len(), 2 * WORD_LEN);
        assert_eq!(word_value(&framed[WORD_LEN..]), 0);
    }
}
