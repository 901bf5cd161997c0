//! zlib compression and framing removal
//!
//! The compressor always runs at the default level, producing a zlib-framed
//! stream (2-byte header, DEFLATE body, 4-byte Adler-32 trailer). The framing
//! is stripped off to leave the raw DEFLATE payload.

use anyhow::{Result, bail};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::Write;

/// Leading CMF/FLG bytes of a zlib stream.
const ZLIB_HEADER_LEN: usize = 2;
/// Trailing Adler-32 checksum of a zlib stream.
const ZLIB_TRAILER_LEN: usize = 4;

/// Compress bytes into a complete zlib stream at the default level.
pub fn compress_zlib(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Strip the 2-byte header and 4-byte checksum from a zlib stream,
/// leaving the raw DEFLATE body.
pub fn strip_zlib_framing(stream: &[u8]) -> Result<&[u8]> {
    if stream.len() < ZLIB_HEADER_LEN + ZLIB_TRAILER_LEN {
        bail!(
            "zlib stream too short ({} bytes) to carry header and checksum",
            stream.len()
        );
    }
    Ok(&stream[ZLIB_HEADER_LEN..stream.len() - ZLIB_TRAILER_LEN])
}

/// Compress bytes and return only the raw DEFLATE payload.
pub fn compress_payload(data: &[u8]) -> Result<Vec<u8>> {
    let stream = compress_zlib(data)?;
    Ok(strip_zlib_framing(&stream)?.to_vec())
}
