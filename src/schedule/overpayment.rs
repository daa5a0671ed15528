use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::types::{OneOffOverpayment, RecurringOverpayment, ScheduleWarning};

/// everything extra due in a single month, with the two input kinds
/// tracked as independent flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtraPayment {
    pub amount: Money,
    pub one_off: bool,
    pub recurring: bool,
}

/// validated month -> extra payment mapping built from one-off entries
/// and recurring month ranges
#[derive(Debug, Clone, Default)]
pub struct OverpaymentSchedule {
    months: BTreeMap<u32, ExtraPayment>,
    recurring: Vec<RecurringOverpayment>,
}

impl OverpaymentSchedule {
    /// empty schedule, no overpayments at all
    pub fn none() -> Self {
        Self::default()
    }

    /// validate and expand both input lists into one mapping
    ///
    /// Recurring ranges are sorted by start month and rejected as a
    /// whole if any two overlap; both offending ranges are surfaced in
    /// the error. A one-off and a recurring contribution landing on
    /// the same month sum additively, with each kind still flagged
    /// separately.
    pub fn build(
        one_offs: &[OneOffOverpayment],
        recurring: &[RecurringOverpayment],
    ) -> Result<Self> {
        for one_off in one_offs {
            if one_off.month == 0 {
                return Err(ScheduleError::InvalidOverpaymentMonth {
                    month: one_off.month,
                });
            }
            if one_off.amount <= Money::ZERO {
                return Err(ScheduleError::InvalidOverpaymentAmount {
                    amount: one_off.amount,
                });
            }
        }

        for range in recurring {
            if range.start_month == 0 || range.start_month > range.end_month {
                return Err(ScheduleError::InvalidOverpaymentRange {
                    start: range.start_month,
                    end: range.end_month,
                });
            }
            if range.amount <= Money::ZERO {
                return Err(ScheduleError::InvalidOverpaymentAmount {
                    amount: range.amount,
                });
            }
        }

        let mut sorted = recurring.to_vec();
        sorted.sort_by_key(|range| range.start_month);

        for pair in sorted.windows(2) {
            if pair[1].start_month <= pair[0].end_month {
                return Err(ScheduleError::OverlappingRanges {
                    first: pair[0].clone(),
                    second: pair[1].clone(),
                });
            }
        }

        let mut months: BTreeMap<u32, ExtraPayment> = BTreeMap::new();

        for range in &sorted {
            for month in range.months() {
                let entry = months.entry(month).or_default();
                entry.amount += range.amount;
                entry.recurring = true;
            }
        }

        for one_off in one_offs {
            let entry = months.entry(one_off.month).or_default();
            entry.amount += one_off.amount;
            entry.one_off = true;
        }

        Ok(Self {
            months,
            recurring: sorted,
        })
    }

    /// extra payment due in a given month, if any
    pub fn get(&self, month: u32) -> Option<&ExtraPayment> {
        self.months.get(&month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// recurring ranges whose amount falls below the scheduled payment
    ///
    /// Non-fatal: the supplied amounts are used exactly as stated, the
    /// caller just gets told.
    pub fn underfunded_overrides(&self, scheduled_payment: Money) -> Vec<ScheduleWarning> {
        self.recurring
            .iter()
            .filter(|range| range.amount < scheduled_payment)
            .map(|range| ScheduleWarning::UnderfundedOverride {
                range: range.clone(),
                scheduled_payment,
            })
            .collect()
    }
}
