//! Fee schedule - explicit decision tables with configurable rates
//!
//! Every rate and threshold is data, configurable via file, not hardcoded.
//! This allows tuning without recompilation, and keeps each tier boundary
//! in exactly one place so the intended table and the implemented table
//! cannot drift apart.
//!
//! Rates are fractions of the transaction amount: `0.003` means 0.3%.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ScheduleError, ScheduleResult};

/// Customer profile the tier tables are keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerProfile {
    Student,
    Regular,
}

impl CustomerProfile {
    pub fn is_student(&self) -> bool {
        matches!(self, CustomerProfile::Student)
    }
}

/// Withdrawal fee rules.
///
/// Students are keyed on the day of the week; everyone else on balance:
/// strictly below `low_balance_below` pays `low_balance_rate`, up to and
/// including `mid_balance_up_to` pays `mid_balance_rate`, above that pays
/// `high_balance_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRules {
    #[serde(default = "rate_zero")]
    pub student_weekday_rate: Decimal,
    #[serde(default = "default_student_weekend_rate")]
    pub student_weekend_rate: Decimal,
    #[serde(default = "default_low_balance_below")]
    pub low_balance_below: Decimal,
    #[serde(default = "default_low_balance_rate")]
    pub low_balance_rate: Decimal,
    #[serde(default = "default_mid_balance_up_to")]
    pub mid_balance_up_to: Decimal,
    #[serde(default = "default_mid_balance_rate")]
    pub mid_balance_rate: Decimal,
    #[serde(default = "rate_zero")]
    pub high_balance_rate: Decimal,
}

impl WithdrawalRules {
    /// Balance tier lookup for non-student withdrawals.
    ///
    /// The lower boundary is exclusive (`balance < low_balance_below`),
    /// the upper one inclusive (`balance <= mid_balance_up_to`), so a tie
    /// at either boundary lands in the cheaper tier.
    pub fn balance_rate(&self, balance: Decimal) -> Decimal {
        if balance < self.low_balance_below {
            self.low_balance_rate
        } else if balance <= self.mid_balance_up_to {
            self.mid_balance_rate
        } else {
            self.high_balance_rate
        }
    }
}

impl Default for WithdrawalRules {
    fn default() -> Self {
        Self {
            student_weekday_rate: rate_zero(),
            student_weekend_rate: default_student_weekend_rate(),
            low_balance_below: default_low_balance_below(),
            low_balance_rate: default_low_balance_rate(),
            mid_balance_up_to: default_mid_balance_up_to(),
            mid_balance_rate: default_mid_balance_rate(),
            high_balance_rate: rate_zero(),
        }
    }
}

/// Deposit interest quadrant table for one customer profile.
///
/// Keyed on `(amount > amount_pivot, balance > row threshold)`; each
/// amount row carries its own balance threshold and two rates. Strict
/// comparisons throughout, so the boundary value falls in the `below`
/// cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRules {
    /// Amounts strictly above this use the `high_amount_*` row
    pub amount_pivot: Decimal,
    pub high_amount_balance_over: Decimal,
    pub high_amount_above_rate: Decimal,
    pub high_amount_below_rate: Decimal,
    pub low_amount_balance_over: Decimal,
    pub low_amount_above_rate: Decimal,
    pub low_amount_below_rate: Decimal,
}

impl DepositRules {
    /// Quadrant lookup. Assumes amount and balance are positive; the
    /// calculator short-circuits non-positive inputs to zero before the
    /// table is consulted.
    pub fn rate(&self, amount: Decimal, balance: Decimal) -> Decimal {
        if amount > self.amount_pivot {
            if balance > self.high_amount_balance_over {
                self.high_amount_above_rate
            } else {
                self.high_amount_below_rate
            }
        } else if balance > self.low_amount_balance_over {
            self.low_amount_above_rate
        } else {
            self.low_amount_below_rate
        }
    }
}

/// Transfer fee truth table for one (profile, amount band) pair.
///
/// Rates are keyed on `(source_balance < source_below, dest_balance <
/// dest_below)` in truth-table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferBand {
    pub source_below: Decimal,
    pub dest_below: Decimal,
    /// (true, true): both balances below their thresholds
    pub both_below_rate: Decimal,
    /// (true, false): only the source balance below
    pub source_below_rate: Decimal,
    /// (false, true): only the destination balance below
    pub dest_below_rate: Decimal,
    /// (false, false): neither below
    pub neither_below_rate: Decimal,
}

impl TransferBand {
    pub fn rate(&self, source_balance: Decimal, dest_balance: Decimal) -> Decimal {
        match (
            source_balance < self.source_below,
            dest_balance < self.dest_below,
        ) {
            (true, true) => self.both_below_rate,
            (true, false) => self.source_below_rate,
            (false, true) => self.dest_below_rate,
            (false, false) => self.neither_below_rate,
        }
    }
}

/// Transfer fee rules: two amount bands per customer profile.
///
/// Amounts strictly below the pivot use the `small` band, everything else
/// the `large` band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRules {
    pub student_amount_pivot: Decimal,
    pub student_small: TransferBand,
    pub student_large: TransferBand,
    pub regular_amount_pivot: Decimal,
    pub regular_small: TransferBand,
    pub regular_large: TransferBand,
}

impl TransferRules {
    /// Pick the truth table for a transfer
    pub fn band(&self, profile: CustomerProfile, amount: Decimal) -> &TransferBand {
        match profile {
            CustomerProfile::Student => {
                if amount < self.student_amount_pivot {
                    &self.student_small
                } else {
                    &self.student_large
                }
            }
            CustomerProfile::Regular => {
                if amount < self.regular_amount_pivot {
                    &self.regular_small
                } else {
                    &self.regular_large
                }
            }
        }
    }
}

/// The full fee schedule.
///
/// `Default` is the authoritative published table; a JSON file may
/// override any section and omit the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    #[serde(default)]
    pub withdrawal: WithdrawalRules,
    #[serde(default = "default_student_deposit")]
    pub student_deposit: DepositRules,
    #[serde(default = "default_regular_deposit")]
    pub regular_deposit: DepositRules,
    #[serde(default = "default_transfer")]
    pub transfer: TransferRules,
}

impl FeeSchedule {
    /// Load a schedule from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> ScheduleResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let schedule: Self = serde_json::from_str(&raw)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check schedule consistency: no negative rates, ordered withdrawal
    /// tier bounds.
    pub fn validate(&self) -> ScheduleResult<()> {
        for (name, rate) in self.rates() {
            if rate < Decimal::ZERO {
                return Err(ScheduleError::Invalid(format!(
                    "rate {name} is negative: {rate}"
                )));
            }
        }
        if self.withdrawal.low_balance_below > self.withdrawal.mid_balance_up_to {
            return Err(ScheduleError::Invalid(format!(
                "withdrawal tier bounds out of order: {} > {}",
                self.withdrawal.low_balance_below, self.withdrawal.mid_balance_up_to
            )));
        }
        Ok(())
    }

    fn rates(&self) -> Vec<(String, Decimal)> {
        let w = &self.withdrawal;
        let mut rates = vec![
            ("withdrawal.student_weekday_rate".into(), w.student_weekday_rate),
            ("withdrawal.student_weekend_rate".into(), w.student_weekend_rate),
            ("withdrawal.low_balance_rate".into(), w.low_balance_rate),
            ("withdrawal.mid_balance_rate".into(), w.mid_balance_rate),
            ("withdrawal.high_balance_rate".into(), w.high_balance_rate),
        ];
        for (prefix, d) in [
            ("student_deposit", &self.student_deposit),
            ("regular_deposit", &self.regular_deposit),
        ] {
            rates.push((format!("{prefix}.high_amount_above_rate"), d.high_amount_above_rate));
            rates.push((format!("{prefix}.high_amount_below_rate"), d.high_amount_below_rate));
            rates.push((format!("{prefix}.low_amount_above_rate"), d.low_amount_above_rate));
            rates.push((format!("{prefix}.low_amount_below_rate"), d.low_amount_below_rate));
        }
        for (prefix, band) in [
            ("transfer.student_small", &self.transfer.student_small),
            ("transfer.student_large", &self.transfer.student_large),
            ("transfer.regular_small", &self.transfer.regular_small),
            ("transfer.regular_large", &self.transfer.regular_large),
        ] {
            rates.push((format!("{prefix}.both_below_rate"), band.both_below_rate));
            rates.push((format!("{prefix}.source_below_rate"), band.source_below_rate));
            rates.push((format!("{prefix}.dest_below_rate"), band.dest_below_rate));
            rates.push((format!("{prefix}.neither_below_rate"), band.neither_below_rate));
        }
        rates
    }
}

// === Default table ===
//
// Rate constants are written as Decimal::new(mantissa, scale):
// Decimal::new(3, 3) == 0.003 == 0.3%.

fn rate_zero() -> Decimal {
    Decimal::ZERO
}

fn default_student_weekend_rate() -> Decimal {
    Decimal::new(1, 3) // 0.1%
}

fn default_low_balance_below() -> Decimal {
    Decimal::new(1_000, 0)
}

fn default_low_balance_rate() -> Decimal {
    Decimal::new(3, 3) // 0.3%
}

fn default_mid_balance_up_to() -> Decimal {
    Decimal::new(5_000, 0)
}

fn default_mid_balance_rate() -> Decimal {
    Decimal::new(1, 3) // 0.1%
}

fn default_student_deposit() -> DepositRules {
    DepositRules {
        amount_pivot: Decimal::new(50, 0),
        high_amount_balance_over: Decimal::new(500, 0),
        high_amount_above_rate: Decimal::new(5, 3),  // 0.5%
        high_amount_below_rate: Decimal::new(25, 4), // 0.25%
        low_amount_balance_over: Decimal::new(5_000, 0),
        low_amount_above_rate: Decimal::new(5, 3), // 0.5%
        low_amount_below_rate: Decimal::ZERO,
    }
}

fn default_regular_deposit() -> DepositRules {
    DepositRules {
        amount_pivot: Decimal::new(250, 0),
        high_amount_balance_over: Decimal::new(2_500, 0),
        high_amount_above_rate: Decimal::new(8, 3), // 0.8%
        high_amount_below_rate: Decimal::new(4, 3), // 0.4%
        low_amount_balance_over: Decimal::new(10_000, 0),
        low_amount_above_rate: Decimal::ZERO,
        low_amount_below_rate: Decimal::new(1, 3), // 0.1%
    }
}

fn default_transfer() -> TransferRules {
    TransferRules {
        student_amount_pivot: Decimal::new(200, 0),
        student_small: TransferBand {
            source_below: Decimal::new(2_000, 0),
            dest_below: Decimal::new(1_000, 0),
            both_below_rate: Decimal::new(1, 3),      // 0.1%
            source_below_rate: Decimal::new(5, 4),    // 0.05%
            dest_below_rate: Decimal::new(5, 4),      // 0.05%
            neither_below_rate: Decimal::new(25, 5),  // 0.025%
        },
        student_large: TransferBand {
            source_below: Decimal::new(2_000, 0),
            dest_below: Decimal::new(1_000, 0),
            both_below_rate: Decimal::new(5, 4),      // 0.05%
            source_below_rate: Decimal::new(25, 5),   // 0.025%
            dest_below_rate: Decimal::new(25, 4),     // 0.25%
            neither_below_rate: Decimal::new(125, 5), // 0.125%
        },
        regular_amount_pivot: Decimal::new(100, 0),
        regular_small: TransferBand {
            source_below: Decimal::new(4_000, 0),
            dest_below: Decimal::new(2_000, 0),
            both_below_rate: Decimal::new(2, 3),    // 0.2%
            source_below_rate: Decimal::new(1, 3),  // 0.1%
            dest_below_rate: Decimal::new(1, 2),    // 1%
            neither_below_rate: Decimal::new(5, 3), // 0.5%
        },
        regular_large: TransferBand {
            source_below: Decimal::new(2_000, 0),
            dest_below: Decimal::new(1_000, 0),
            both_below_rate: Decimal::new(2, 3),     // 0.2%
            source_below_rate: Decimal::new(1, 3),   // 0.1%
            dest_below_rate: Decimal::new(5, 3),     // 0.5%
            neither_below_rate: Decimal::new(25, 4), // 0.25%
        },
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            withdrawal: WithdrawalRules::default(),
            student_deposit: default_student_deposit(),
            regular_deposit: default_regular_deposit(),
            transfer: default_transfer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(FeeSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_withdrawal_tier_boundaries() {
        let rules = WithdrawalRules::default();
        assert_eq!(rules.balance_rate(dec!(999.99)), dec!(0.003));
        assert_eq!(rules.balance_rate(dec!(1000)), dec!(0.001));
        assert_eq!(rules.balance_rate(dec!(5000)), dec!(0.001));
        assert_eq!(rules.balance_rate(dec!(5000.01)), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_boundary_falls_in_below_cell() {
        let rules = default_student_deposit();
        // amount exactly at the pivot uses the low-amount row
        assert_eq!(rules.rate(dec!(50), dec!(5000)), Decimal::ZERO);
        // balance exactly at the threshold uses the below rate
        assert_eq!(rules.rate(dec!(51), dec!(500)), dec!(0.0025));
    }

    #[test]
    fn test_transfer_band_selection() {
        let rules = default_transfer();
        let small = rules.band(CustomerProfile::Student, dec!(199));
        let large = rules.band(CustomerProfile::Student, dec!(200));
        assert_eq!(small.both_below_rate, dec!(0.001));
        assert_eq!(large.both_below_rate, dec!(0.0005));

        let regular_small = rules.band(CustomerProfile::Regular, dec!(99));
        assert_eq!(regular_small.source_below, dec!(4000));
        let regular_large = rules.band(CustomerProfile::Regular, dec!(100));
        assert_eq!(regular_large.source_below, dec!(2000));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut schedule = FeeSchedule::default();
        schedule.withdrawal.low_balance_rate = dec!(-0.003);
        let err = schedule.validate().unwrap_err();
        assert!(matches!(err, ScheduleError::Invalid(_)));
        assert!(err.to_string().contains("withdrawal.low_balance_rate"));
    }

    #[test]
    fn test_validate_rejects_unordered_tiers() {
        let mut schedule = FeeSchedule::default();
        schedule.withdrawal.low_balance_below = dec!(6000);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::Invalid(_))
        ));
    }

    #[test]
    fn test_empty_json_yields_default_table() {
        let schedule: FeeSchedule = serde_json::from_str("{}").unwrap();
        assert_eq!(schedule, FeeSchedule::default());
    }

    #[test]
    fn test_serde_roundtrip() {
        let schedule = FeeSchedule::default();
        let json = serde_json::to_string(&schedule).unwrap();
        let parsed: FeeSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, parsed);
    }
}
