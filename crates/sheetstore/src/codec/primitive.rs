//! Scalar fields of the cell wire format.
//!
//! Every scalar is followed by a unit separator ([`US`]). Strings are raw
//! UTF-8 with no length prefix, so they must not contain [`US`] or [`RS`].
//! Integers are zig-zag encoded, then written as little-endian base-128
//! varints.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{StoreError, StoreResult};

/// Boolean true
pub const TRUE: u8 = 0x01;
/// Boolean false
pub const FALSE: u8 = 0x00;
/// Unit separator, ends every scalar field
pub const US: u8 = 0x1f;
/// Record separator, ends a record's flat field list
pub const RS: u8 = 0x1e;

/// Longest varint encoding of a 64-bit value
const MAX_VARINT_LEN: usize = 10;

// ============================================================================
// Separators
// ============================================================================

fn write_unit_separator(buf: &mut BytesMut) {
    buf.put_u8(US);
}

fn read_unit_separator(buf: &mut Bytes, field: &str) -> StoreResult<()> {
    if !buf.has_remaining() {
        return Err(StoreError::Malformed(format!(
            "unexpected end of data, expected unit separator after {field}"
        )));
    }
    match buf.get_u8() {
        US => Ok(()),
        other => Err(StoreError::Malformed(format!(
            "expected unit separator after {field}, found 0x{other:02x}"
        ))),
    }
}

/// Write the end-of-record marker.
pub fn write_end_of_record(buf: &mut BytesMut) {
    buf.put_u8(RS);
}

/// Read the end-of-record marker.
pub fn read_end_of_record(buf: &mut Bytes, record: &str) -> StoreResult<()> {
    if !buf.has_remaining() {
        return Err(StoreError::Malformed(format!(
            "unexpected end of data, expected end of {record} record"
        )));
    }
    match buf.get_u8() {
        RS => Ok(()),
        other => Err(StoreError::Malformed(format!(
            "expected end of {record} record, found 0x{other:02x}"
        ))),
    }
}

// ============================================================================
// Booleans
// ============================================================================

/// Write a boolean flag byte.
pub fn write_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(if value { TRUE } else { FALSE });
    write_unit_separator(buf);
}

/// Read a boolean. Any byte other than [`TRUE`] reads as false.
pub fn read_bool(buf: &mut Bytes, field: &str) -> StoreResult<bool> {
    if !buf.has_remaining() {
        return Err(StoreError::Malformed(format!(
            "unexpected end of data reading {field}"
        )));
    }
    let b = buf.get_u8();
    read_unit_separator(buf, field)?;
    Ok(b == TRUE)
}

// ============================================================================
// Strings
// ============================================================================

/// Write a string followed by a unit separator.
pub fn write_string(buf: &mut BytesMut, s: &str) {
    buf.put_slice(s.as_bytes());
    write_unit_separator(buf);
}

/// Read bytes up to the next unit separator as a UTF-8 string.
pub fn read_string(buf: &mut Bytes, field: &str) -> StoreResult<String> {
    let Some(len) = buf.iter().position(|&b| b == US) else {
        return Err(StoreError::Malformed(format!(
            "unexpected end of data reading {field}"
        )));
    };
    let bytes = buf.split_to(len);
    buf.advance(1);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| StoreError::Malformed(format!("invalid UTF-8 in {field}: {e}")))
}

/// Write an optional string.
///
/// The flag written first records *absence*, and the closing separator is
/// written whether or not a string follows. An absent value is therefore
/// `01 1F 1F` and a present one is `00 1F <bytes> 1F`. Stored records rely
/// on this layout; do not collapse the separators.
pub fn write_string_opt(buf: &mut BytesMut, value: Option<&str>) {
    write_bool(buf, value.is_none());
    if let Some(s) = value {
        buf.put_slice(s.as_bytes());
    }
    write_unit_separator(buf);
}

/// Read an optional string written by [`write_string_opt`].
pub fn read_string_opt(buf: &mut Bytes, field: &str) -> StoreResult<Option<String>> {
    let is_absent = read_bool(buf, field)?;
    if is_absent {
        read_unit_separator(buf, field)?;
        return Ok(None);
    }
    read_string(buf, field).map(Some)
}

// ============================================================================
// Integers
// ============================================================================

/// Write a signed integer as a zig-zag varint.
pub fn write_int(buf: &mut BytesMut, value: i64) {
    let mut ux = ((value << 1) ^ (value >> 63)) as u64;
    while ux >= 0x80 {
        buf.put_u8((ux as u8) | 0x80);
        ux >>= 7;
    }
    buf.put_u8(ux as u8);
    write_unit_separator(buf);
}

/// Read a zig-zag varint integer.
pub fn read_int(buf: &mut Bytes, field: &str) -> StoreResult<i64> {
    let mut ux: u64 = 0;
    let mut shift = 0;
    for i in 0..MAX_VARINT_LEN {
        if !buf.has_remaining() {
            return Err(StoreError::Malformed(format!(
                "unexpected end of data reading {field}"
            )));
        }
        let byte = buf.get_u8();
        if byte < 0x80 {
            if i == MAX_VARINT_LEN - 1 && byte > 1 {
                break;
            }
            ux |= (byte as u64) << shift;
            read_unit_separator(buf, field)?;
            let value = (ux >> 1) as i64;
            return Ok(if ux & 1 != 0 { !value } else { value });
        }
        ux |= ((byte & 0x7f) as u64) << shift;
        shift += 7;
    }
    Err(StoreError::Malformed(format!("varint overflow reading {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of(write: impl FnOnce(&mut BytesMut)) -> Bytes {
        let mut buf = BytesMut::new();
        write(&mut buf);
        buf.freeze()
    }

    #[test]
    fn test_bool_layout() {
        assert_eq!(bytes_of(|b| write_bool(b, true)).as_ref(), &[0x01, 0x1f]);
        assert_eq!(bytes_of(|b| write_bool(b, false)).as_ref(), &[0x00, 0x1f]);
    }

    #[test]
    fn test_bool_other_byte_is_false() {
        let mut bytes = Bytes::from_static(&[0x02, 0x1f]);
        assert!(!read_bool(&mut bytes, "flag").unwrap());
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_bool_missing_separator() {
        let mut bytes = Bytes::from_static(&[0x01, 0x1e]);
        let err = read_bool(&mut bytes, "flag").unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)), "{err}");
    }

    #[test]
    fn test_string_roundtrip() {
        let mut bytes = bytes_of(|b| write_string(b, "hello world"));
        assert_eq!(bytes.as_ref(), b"hello world\x1f");
        assert_eq!(read_string(&mut bytes, "s").unwrap(), "hello world");
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_string_unicode_and_empty() {
        let mut bytes = bytes_of(|b| {
            write_string(b, "");
            write_string(b, "Gr\u{fc}\u{df}e \u{1F600}");
        });
        assert_eq!(read_string(&mut bytes, "a").unwrap(), "");
        assert_eq!(read_string(&mut bytes, "b").unwrap(), "Gr\u{fc}\u{df}e \u{1F600}");
    }

    #[test]
    fn test_string_unterminated() {
        let mut bytes = Bytes::from_static(b"abc");
        assert!(matches!(
            read_string(&mut bytes, "s"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut bytes = Bytes::from_static(&[0xff, 0xfe, 0x1f]);
        assert!(matches!(
            read_string(&mut bytes, "s"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_string_opt_absent_layout() {
        let mut bytes = bytes_of(|b| write_string_opt(b, None));
        assert_eq!(bytes.as_ref(), &[0x01, 0x1f, 0x1f]);
        assert_eq!(read_string_opt(&mut bytes, "s").unwrap(), None);
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_string_opt_present_layout() {
        let mut bytes = bytes_of(|b| write_string_opt(b, Some("hi")));
        assert_eq!(bytes.as_ref(), &[0x00, 0x1f, b'h', b'i', 0x1f]);
        assert_eq!(read_string_opt(&mut bytes, "s").unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_string_opt_empty_is_not_absent() {
        let mut bytes = bytes_of(|b| write_string_opt(b, Some("")));
        assert_eq!(bytes.as_ref(), &[0x00, 0x1f, 0x1f]);
        assert_eq!(read_string_opt(&mut bytes, "s").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_int_layout() {
        assert_eq!(bytes_of(|b| write_int(b, 0)).as_ref(), &[0x00, 0x1f]);
        assert_eq!(bytes_of(|b| write_int(b, -1)).as_ref(), &[0x01, 0x1f]);
        assert_eq!(bytes_of(|b| write_int(b, 1)).as_ref(), &[0x02, 0x1f]);
        assert_eq!(bytes_of(|b| write_int(b, 49)).as_ref(), &[0x62, 0x1f]);
        assert_eq!(bytes_of(|b| write_int(b, 64)).as_ref(), &[0x80, 0x01, 0x1f]);
        assert_eq!(bytes_of(|b| write_int(b, -65)).as_ref(), &[0x81, 0x01, 0x1f]);
    }

    #[test]
    fn test_int_extremes() {
        for value in [i64::MIN, i64::MIN + 1, -300, 300, i64::MAX] {
            let mut bytes = bytes_of(|b| write_int(b, value));
            assert!(bytes.len() <= MAX_VARINT_LEN + 1);
            assert_eq!(read_int(&mut bytes, "n").unwrap(), value);
            assert!(bytes.is_empty());
        }
    }

    #[test]
    fn test_int_overflow() {
        let mut bytes = Bytes::from_static(&[0xff; 11]);
        assert!(matches!(
            read_int(&mut bytes, "n"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_int_truncated() {
        let mut bytes = Bytes::from_static(&[0x80, 0x80]);
        assert!(matches!(
            read_int(&mut bytes, "n"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_end_of_record() {
        let mut bytes = bytes_of(write_end_of_record);
        assert_eq!(bytes.as_ref(), &[0x1e]);
        read_end_of_record(&mut bytes, "cell").unwrap();

        let mut wrong = Bytes::from_static(&[0x1f]);
        assert!(read_end_of_record(&mut wrong, "cell").is_err());
        let mut empty = Bytes::new();
        assert!(read_end_of_record(&mut empty, "cell").is_err());
    }
}
