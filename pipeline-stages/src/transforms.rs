//! The reserved transform set. Each is a pure function
//! `&[u8] -> Vec<u8>`: the interesting behavior lives in how the stage
//! hosting these interacts with the buffers, not in the transforms
//! themselves.

const PREFIX: &[u8] = b"PREFIX:";
const SUFFIX: &[u8] = b":SUFFIX";

/// Case-folds each ASCII letter to uppercase; other bytes unchanged.
pub fn upper(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_uppercase()
}

/// Case-folds each ASCII letter to lowercase; other bytes unchanged.
pub fn lower(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_lowercase()
}

/// Reverses the byte sequence.
pub fn reverse(bytes: &[u8]) -> Vec<u8> {
    let mut reversed = bytes.to_vec();
    reversed.reverse();
    reversed
}

/// Removes leading and trailing ASCII whitespace.
pub fn trim(bytes: &[u8]) -> Vec<u8> {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map(|i| i + 1)
        .unwrap_or(start);
    bytes[start..end].to_vec()
}

/// Prepends the literal `PREFIX:`.
pub fn prefix(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(PREFIX.len() + bytes.len());
    result.extend_from_slice(PREFIX);
    result.extend_from_slice(bytes);
    result
}

/// Appends the literal `:SUFFIX`.
pub fn suffix(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + SUFFIX.len());
    result.extend_from_slice(bytes);
    result.extend_from_slice(SUFFIX);
    result
}
