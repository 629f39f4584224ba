//! Minibank ATM - customer input validation
//!
//! This crate contains the validation run at the ATM before a request
//! reaches the bank:
//! - [`Pin`]: format-validated PIN (exactly five decimal digits)
//! - [`WithdrawalRequest`]: cash amount validated against bounds and
//!   the note denomination

pub mod cash;
pub mod pin;

pub use cash::{
    is_valid_withdrawal, CashError, WithdrawalRequest, DISPENSE_UNIT, MAX_WITHDRAWAL,
    MIN_WITHDRAWAL,
};
pub use pin::{Pin, PinFormatError, PIN_LEN};
