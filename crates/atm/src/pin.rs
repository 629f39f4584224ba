//! Pin - format-validated ATM PIN
//!
//! A PIN is exactly five ASCII decimal digits. The invariant is enforced
//! at the type level: a `Pin` can only be obtained through [`Pin::parse`].
//!
//! Format validation says nothing about whether the PIN is *correct* for
//! an account; credential checks live with the bank, not the ATM.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a valid PIN
pub const PIN_LEN: usize = 5;

/// Errors from PIN format validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinFormatError {
    #[error("PIN must be exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("PIN contains non-digit character {found:?} at position {index}")]
    NonDigit { index: usize, found: char },

    #[error("PIN is missing")]
    Missing,
}

/// A format-validated ATM PIN.
///
/// # Invariant
/// Always exactly [`PIN_LEN`] decimal digits, enforced by the constructor.
///
/// `Debug` and `Display` are masked so a PIN never ends up in logs.
///
/// # Example
/// ```
/// use minibank_atm::Pin;
///
/// let pin = Pin::parse("12345").unwrap();
/// assert_eq!(pin.digits(), &[1, 2, 3, 4, 5]);
///
/// assert!(Pin::parse("1234").is_err());
/// assert!(Pin::parse("1234a").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin([u8; PIN_LEN]);

impl Pin {
    /// Validate an entered PIN.
    ///
    /// Ok iff the input is exactly [`PIN_LEN`] characters, each an ASCII
    /// decimal digit. Length is counted in characters, not bytes.
    pub fn parse(input: &str) -> Result<Self, PinFormatError> {
        let mut digits = [0u8; PIN_LEN];
        let mut len = 0usize;
        for (index, ch) in input.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(PinFormatError::NonDigit { index, found: ch });
            }
            if index < PIN_LEN {
                digits[index] = ch as u8 - b'0';
            }
            len += 1;
        }
        if len != PIN_LEN {
            return Err(PinFormatError::WrongLength {
                expected: PIN_LEN,
                actual: len,
            });
        }
        Ok(Self(digits))
    }

    /// Validate a PIN that may not have been entered at all.
    ///
    /// An absent PIN fails with [`PinFormatError::Missing`].
    pub fn parse_opt(input: Option<&str>) -> Result<Self, PinFormatError> {
        input.ok_or(PinFormatError::Missing).and_then(Self::parse)
    }

    /// The validated digits, most significant first
    pub fn digits(&self) -> &[u8; PIN_LEN] {
        &self.0
    }
}

impl FromStr for Pin {
    type Err = PinFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin(*****)")
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..PIN_LEN {
            write!(f, "*")?;
        }
        Ok(())
    }
}
