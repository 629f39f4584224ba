//! Cash withdrawal amount validation
//!
//! The ATM dispenses 20-unit notes, so a withdrawal must be a multiple of
//! 20 inside the inclusive range [20, 1000].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest amount the ATM will dispense
pub const MIN_WITHDRAWAL: i64 = 20;

/// Largest amount the ATM will dispense in a single withdrawal
pub const MAX_WITHDRAWAL: i64 = 1000;

/// Note denomination - valid amounts are multiples of this
pub const DISPENSE_UNIT: i64 = 20;

/// Errors from cash amount validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CashError {
    #[error("Invalid withdrawal amount: {0} (must be a multiple of {DISPENSE_UNIT} in [{MIN_WITHDRAWAL}, {MAX_WITHDRAWAL}])")]
    InvalidAmount(i64),
}

/// Check whether an amount can be withdrawn at the ATM.
///
/// True iff the amount is a multiple of [`DISPENSE_UNIT`] within
/// [`MIN_WITHDRAWAL`]..=[`MAX_WITHDRAWAL`]. Zero and negative amounts are
/// invalid. Total over every `i64`.
pub fn is_valid_withdrawal(amount: i64) -> bool {
    (MIN_WITHDRAWAL..=MAX_WITHDRAWAL).contains(&amount) && amount % DISPENSE_UNIT == 0
}

/// A withdrawal amount that passed validation.
///
/// # Invariant
/// The inner amount satisfies [`is_valid_withdrawal`]; enforced by the
/// constructor so downstream code never re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct WithdrawalRequest(i64);

impl WithdrawalRequest {
    /// Create a validated withdrawal request.
    pub fn new(amount: i64) -> Result<Self, CashError> {
        if is_valid_withdrawal(amount) {
            Ok(Self(amount))
        } else {
            Err(CashError::InvalidAmount(amount))
        }
    }

    /// The validated amount
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// How many notes the ATM dispenses for this request
    #[inline]
    pub const fn note_count(&self) -> i64 {
        self.0 / DISPENSE_UNIT
    }
}

impl TryFrom<i64> for WithdrawalRequest {
    type Error = CashError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<WithdrawalRequest> for i64 {
    fn from(request: WithdrawalRequest) -> Self {
        request.0
    }
}

impl fmt::Display for WithdrawalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
