//! Fee and interest calculator
//!
//! Thin, pure lookups over a [`FeeSchedule`]. Every method is total: any
//! `Decimal` input yields a value, and results are deterministic given
//! the inputs. Within a fixed tier the fee scales linearly with amount.

use chrono::Weekday;
use rust_decimal::Decimal;
use tracing::debug;

use crate::schedule::{CustomerProfile, FeeSchedule};

/// Saturday and Sunday count as weekend for withdrawal fees
pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Calculator over a fee schedule.
///
/// Holds no state beyond the schedule; cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct FeesCalculator {
    schedule: FeeSchedule,
}

impl FeesCalculator {
    /// Create a calculator over a (validated) schedule
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule in force
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee for withdrawing `amount` against `balance` on `day`.
    ///
    /// Students withdraw free on weekdays and pay the weekend rate on
    /// Saturday/Sunday, regardless of balance. Everyone else pays by
    /// balance tier and the day is ignored.
    pub fn withdrawal_fee(
        &self,
        amount: Decimal,
        balance: Decimal,
        profile: CustomerProfile,
        day: Weekday,
    ) -> Decimal {
        let rules = &self.schedule.withdrawal;
        let rate = if profile.is_student() {
            if is_weekend(day) {
                rules.student_weekend_rate
            } else {
                rules.student_weekday_rate
            }
        } else {
            rules.balance_rate(balance)
        };
        debug!(%amount, %balance, ?profile, ?day, %rate, "withdrawal fee rate selected");
        amount * rate
    }

    /// Interest earned on a deposit.
    ///
    /// Non-positive amounts or balances earn exactly zero; interest is
    /// never negative. Otherwise the profile's quadrant table applies.
    pub fn deposit_interest(
        &self,
        amount: Decimal,
        balance: Decimal,
        profile: CustomerProfile,
    ) -> Decimal {
        if amount <= Decimal::ZERO || balance <= Decimal::ZERO {
            debug!(%amount, %balance, ?profile, "non-positive deposit input, zero interest");
            return Decimal::ZERO;
        }
        let rules = match profile {
            CustomerProfile::Student => &self.schedule.student_deposit,
            CustomerProfile::Regular => &self.schedule.regular_deposit,
        };
        let rate = rules.rate(amount, balance);
        debug!(%amount, %balance, ?profile, %rate, "deposit interest rate selected");
        amount * rate
    }

    /// Fee for transferring `amount` between two accounts.
    ///
    /// Band by (profile, amount), then the band's truth table over
    /// (source balance, destination balance).
    pub fn transfer_fee(
        &self,
        amount: Decimal,
        source_balance: Decimal,
        dest_balance: Decimal,
        profile: CustomerProfile,
    ) -> Decimal {
        let band = self.schedule.transfer.band(profile, amount);
        let rate = band.rate(source_balance, dest_balance);
        debug!(%amount, %source_balance, %dest_balance, ?profile, %rate, "transfer fee rate selected");
        amount * rate
    }
}
