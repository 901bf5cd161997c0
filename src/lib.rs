//! # hexflate Library
//!
//! A small Rust library behind the `hexflate` CLI for turning hex-encoded
//! bytes into raw DEFLATE payloads. This library provides functionality for:
//!
//! - **Hex Decoding**: Parse hex strings with or without a `0x` prefix
//! - **Compression**: zlib-compress bytes at the default level
//! - **Framing Removal**: Strip the zlib header and Adler-32 checksum,
//!   leaving the raw DEFLATE body
//! - **Output Framing**: Emit the payload bare or behind a length-prefixed
//!   envelope of two 32-byte big-endian words
//!
//! ## Quick Start
//!
//! ```rust
//! use hexflate::OutputFormat;
//!
//! let line = hexflate::compress_hex("0x68656c6c6f", OutputFormat::Bare)
//!     .expect("valid hex input");
//! assert!(line.starts_with("0x"));
//! ```
//!
//! ## Modules
//!
//! - [`hex`]: hexadecimal decoding and encoding
//! - [`compression`]: zlib compression and framing removal
//! - [`envelope`]: output framing of the compressed payload

pub mod compression;
pub mod envelope;
pub mod hex;

pub use envelope::OutputFormat;

use anyhow::Result;

/// Run the whole pipeline: decode a hex string, compress it, strip the zlib
/// framing, frame the payload, and render the result as a `0x`-prefixed hex
/// line.
pub fn compress_hex(data: &str, format: OutputFormat) -> Result<String> {
    let input = hex::decode_hex_string(data)?;
    let payload = compression::compress_payload(&input)?;
    let framed = envelope::frame_payload(&payload, format);
    Ok(format!("0x{}", hex::encode_hex_string(&framed)))
}
