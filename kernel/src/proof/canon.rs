//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Reports are hashed and compared across processes, so every
//! report goes through [`canonical_json_bytes`]:
//!
//! 1. Object keys sorted lexicographically (byte order), at every depth.
//! 2. Compact form, no whitespace.
//! 3. Strings escaped by `serde_json`.
//! 4. Numbers must be integers. Floats are rejected: every quantity in a
//!    report is a count or a distance.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_canonical(&mut buf, value)?;
    Ok(buf)
}

fn write_canonical(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
        }
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_canonical(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &Value::String(key.clone()));
                buf.push(b':');
                write_canonical(buf, item)?;
            }
            buf.push(b'}');
        }
        scalar => write_scalar(buf, scalar),
    }
    Ok(())
}

/// Scalars (null, bool, integer, string) have a single compact encoding.
fn write_scalar(buf: &mut Vec<u8>, value: &Value) {
    // Writing into a Vec cannot fail, and scalars have no map keys to reject.
    if serde_json::to_writer(&mut *buf, value).is_err() {
        buf.extend_from_slice(b"null");
    }
}
