//! Defines [`WKBError`], representing all errors returned by this crate.

use std::borrow::Cow;

use num_enum::TryFromPrimitiveError;
use thiserror::Error;

use crate::common::WKBType;

/// Enum with all errors in this crate.
///
/// Decoding only ever fails in one of two ways: the bytes are not a complete encoding
/// ([`WKBError::InvalidStorage`]), or they are complete but describe something this crate
/// does not read ([`WKBError::UnsupportedValue`]).
#[derive(Error, Debug)]
pub enum WKBError {
    /// The input is not a byte sequence, or is shorter than a declared length.
    #[error("Invalid storage type or size: {0}")]
    InvalidStorage(Cow<'static, str>),

    /// An unknown byte order marker or geometry type code, or a geometry type that differs
    /// from the one requested.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(Cow<'static, str>),
}

impl WKBError {
    /// Returns `true` if this error was raised for truncated or non-binary input.
    pub fn is_invalid_storage(&self) -> bool {
        matches!(self, WKBError::InvalidStorage(_))
    }

    /// Returns `true` if this error was raised for a well-formed but unsupported value.
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, WKBError::UnsupportedValue(_))
    }
}

/// Short reads surface from [byteorder] as `UnexpectedEof`.
impl From<std::io::Error> for WKBError {
    fn from(value: std::io::Error) -> Self {
        WKBError::InvalidStorage(value.to_string().into())
    }
}

impl From<TryFromPrimitiveError<WKBType>> for WKBError {
    fn from(value: TryFromPrimitiveError<WKBType>) -> Self {
        WKBError::UnsupportedValue(format!("geometry type code {}", value.number).into())
    }
}

/// Crate-specific result type.
pub type WKBResult<T> = std::result::Result<T, WKBError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let storage = WKBError::InvalidStorage("need 4 bytes, 2 remaining".into());
        assert_eq!(
            storage.to_string(),
            "Invalid storage type or size: need 4 bytes, 2 remaining"
        );
        assert!(storage.is_invalid_storage());
        assert!(!storage.is_unsupported_value());

        let unsupported = WKBError::UnsupportedValue("byte order marker 2".into());
        assert_eq!(
            unsupported.to_string(),
            "Unsupported value: byte order marker 2"
        );
        assert!(unsupported.is_unsupported_value());
    }

    #[test]
    fn io_error_is_invalid_storage() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        assert!(WKBError::from(io_err).is_invalid_storage());
    }

    #[test]
    fn bad_type_code_is_unsupported() {
        let err: WKBError = WKBType::try_from(9u32).unwrap_err().into();
        assert!(err.is_unsupported_value());
        assert!(err.to_string().contains('9'));
    }
}
