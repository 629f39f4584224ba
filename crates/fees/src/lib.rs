//! Minibank Fees - tiered fee and interest calculation
//!
//! Withdrawal, deposit, and transfer pricing as explicit decision tables.
//! The published table, in rates over the transaction amount:
//!
//! | Operation  | Customer | Key                          | Rate            |
//! |------------|----------|------------------------------|-----------------|
//! | Withdrawal | Student  | weekday / weekend            | 0 / 0.1%        |
//! | Withdrawal | Regular  | balance <1000 / ..=5000 / >  | 0.3% / 0.1% / 0 |
//! | Deposit    | either   | quadrant on (amount, balance)| see schedule    |
//! | Transfer   | either   | amount band x balance table  | see schedule    |
//!
//! ## Key components
//!
//! - [`schedule::FeeSchedule`] - configurable decision tables (defaults are
//!   the published table, any section can be overridden from JSON)
//! - [`calculator::FeesCalculator`] - pure, total lookups over a schedule
//!
//! Deposits of non-positive amount, or into a non-positive balance, earn
//! exactly zero interest; interest is never negative.

pub mod calculator;
pub mod error;
pub mod schedule;

pub use calculator::{is_weekend, FeesCalculator};
pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{
    CustomerProfile, DepositRules, FeeSchedule, TransferBand, TransferRules, WithdrawalRules,
};
