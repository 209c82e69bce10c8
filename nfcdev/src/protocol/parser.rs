// nfcdev/src/protocol/parser.rs
//! Bounds-checked readers shared by the payload decoders.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::Truncated {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    Ok(u16::from_le_bytes(array_at(data, idx)?))
}

/// Read a little-endian u32 at given index, with bounds checking.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    Ok(u32::from_le_bytes(array_at(data, idx)?))
}

/// Read a little-endian u64 at given index, with bounds checking.
pub fn le_u64_at(data: &[u8], idx: usize) -> Result<u64> {
    Ok(u64::from_le_bytes(array_at(data, idx)?))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy a fixed-size array out of `data` at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a length-prefixed field whose length byte sits at `len_idx` and
/// whose data starts at `data_idx`. A declared length that overruns the
/// buffer or exceeds `max` is a malformed payload, not a truncation.
pub fn declared_slice_at<'a>(
    data: &'a [u8],
    field: &str,
    len_idx: usize,
    data_idx: usize,
    max: usize,
) -> Result<&'a [u8]> {
    let len = byte_at(data, len_idx)? as usize;
    if len > max {
        return Err(Error::MalformedPayload(format!(
            "{field}_len {len} exceeds maximum {max}"
        )));
    }
    if data.len() < data_idx + len {
        return Err(Error::MalformedPayload(format!(
            "{field}_len {len} overruns buffer of {} bytes",
            data.len()
        )));
    }
    Ok(&data[data_idx..data_idx + len])
}
