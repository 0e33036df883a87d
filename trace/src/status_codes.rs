use std::convert::TryFrom;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// CanonicalCode is implemented by every code set a Status can carry.
///
/// The set is owned by the tracing API and grows over its releases, so code
/// in this crate only names the three members every version is guaranteed to
/// have. Everything else is discovered at runtime through `iter()`.
pub trait CanonicalCode:
    IntoEnumIterator + Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// The default status, used before an outcome is known.
    const UNSET: Self;
    /// The operation has been validated to have completed successfully.
    const OK: Self;
    /// The operation contains an error.
    const ERROR: Self;
}

/// Status codes for use with Span.SetStatus. The numeric values match the
/// ones used on the wire by OTLP.
#[non_exhaustive]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, EnumIter)]
pub enum StatusCanonicalCode {
    Unset = 0,
    Ok = 1,
    Error = 2,
}

impl CanonicalCode for StatusCanonicalCode {
    const UNSET: Self = StatusCanonicalCode::Unset;
    const OK: Self = StatusCanonicalCode::Ok;
    const ERROR: Self = StatusCanonicalCode::Error;
}

impl Default for StatusCanonicalCode {
    fn default() -> StatusCanonicalCode {
        StatusCanonicalCode::Unset
    }
}

impl StatusCanonicalCode {
    /// as_str returns the upper-case name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCanonicalCode::Unset => "UNSET",
            StatusCanonicalCode::Ok => "OK",
            StatusCanonicalCode::Error => "ERROR",
        }
    }
}

impl fmt::Display for StatusCanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// StatusCodeError is returned when a code can't be decoded.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum StatusCodeError {
    #[error("unknown status code value: {0}")]
    UnknownValue(i32),

    #[error("unknown status code name: {0:?}")]
    UnknownName(String),
}

impl From<StatusCanonicalCode> for i32 {
    fn from(code: StatusCanonicalCode) -> i32 {
        code as i32
    }
}

impl TryFrom<i32> for StatusCanonicalCode {
    type Error = StatusCodeError;

    // `Self::Error` would name the enum variant.
    fn try_from(value: i32) -> Result<Self, StatusCodeError> {
        StatusCanonicalCode::iter()
            .find(|code| i32::from(*code) == value)
            .ok_or(StatusCodeError::UnknownValue(value))
    }
}

impl FromStr for StatusCanonicalCode {
    type Err = StatusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCanonicalCode::iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StatusCodeError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        assert_eq!(StatusCanonicalCode::default(), StatusCanonicalCode::UNSET);
    }

    #[test]
    fn wire_values() {
        assert_eq!(i32::from(StatusCanonicalCode::Unset), 0);
        assert_eq!(i32::from(StatusCanonicalCode::Ok), 1);
        assert_eq!(i32::from(StatusCanonicalCode::Error), 2);

        for code in StatusCanonicalCode::iter() {
            assert_eq!(StatusCanonicalCode::try_from(i32::from(code)), Ok(code));
        }
    }

    #[test]
    fn unknown_wire_value() {
        assert_eq!(
            StatusCanonicalCode::try_from(3),
            Err(StatusCodeError::UnknownValue(3))
        );
        assert_eq!(
            StatusCanonicalCode::try_from(-1),
            Err(StatusCodeError::UnknownValue(-1))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("OK".parse::<StatusCanonicalCode>(), Ok(StatusCanonicalCode::Ok));
        assert_eq!("error".parse::<StatusCanonicalCode>(), Ok(StatusCanonicalCode::Error));
        assert_eq!("Unset".parse::<StatusCanonicalCode>(), Ok(StatusCanonicalCode::Unset));
        assert_eq!(
            "CANCELLED".parse::<StatusCanonicalCode>(),
            Err(StatusCodeError::UnknownName("CANCELLED".to_string()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            StatusCodeError::UnknownValue(7).to_string(),
            "unknown status code value: 7"
        );
        assert_eq!(
            StatusCodeError::UnknownName("nope".to_string()).to_string(),
            "unknown status code name: \"nope\""
        );
    }

    #[test]
    fn display_uses_upper_case_name() {
        assert_eq!(format!("{}", StatusCanonicalCode::Error), "ERROR");
    }
}
