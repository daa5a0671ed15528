use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// display-only currency label; never enters the arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Gbp,
    Eur,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// fixed-rate loan terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub currency: Currency,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate: Rate, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// nominal number of monthly installments
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }

    /// reject terms before any computation
    pub fn validate(&self) -> Result<()> {
        if self.principal <= Money::ZERO {
            return Err(ScheduleError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(ScheduleError::InvalidInterestRate {
                rate: self.annual_rate,
            });
        }
        if self.term_years == 0 {
            return Err(ScheduleError::InvalidTerm {
                years: self.term_years,
            });
        }
        Ok(())
    }
}

/// a single extra payment applied in one specific month (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneOffOverpayment {
    pub month: u32,
    pub amount: Money,
}

impl OneOffOverpayment {
    pub fn new(month: u32, amount: Money) -> Self {
        Self { month, amount }
    }
}

/// an elevated payment amount applied across a contiguous month range
/// (both ends inclusive, 1-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringOverpayment {
    pub start_month: u32,
    pub end_month: u32,
    pub amount: Money,
}

impl RecurringOverpayment {
    pub fn new(start_month: u32, end_month: u32, amount: Money) -> Self {
        Self {
            start_month,
            end_month,
            amount,
        }
    }

    /// covered months, both ends inclusive
    pub fn months(&self) -> RangeInclusive<u32> {
        self.start_month..=self.end_month
    }
}

impl fmt::Display for RecurringOverpayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "months {}-{} at {}",
            self.start_month, self.end_month, self.amount
        )
    }
}

/// reduction in schedule length won through overpayments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSavings {
    pub months: u32,
}

impl TermSavings {
    pub fn whole_years(&self) -> u32 {
        self.months / 12
    }

    pub fn remainder_months(&self) -> u32 {
        self.months % 12
    }
}

impl fmt::Display for TermSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years {} months",
            self.whole_years(),
            self.remainder_months()
        )
    }
}

/// non-fatal conditions surfaced alongside a computed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleWarning {
    /// a recurring override amount is below the scheduled payment; the
    /// supplied amount is used as stated, never silently raised
    UnderfundedOverride {
        range: RecurringOverpayment,
        scheduled_payment: Money,
    },
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleWarning::UnderfundedOverride {
                range,
                scheduled_payment,
            } => write!(
                f,
                "recurring overpayment {} is below the scheduled payment {}",
                range, scheduled_payment
            ),
        }
    }
}
