use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::RecurringOverpayment;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {years} years")]
    InvalidTerm {
        years: u32,
    },

    #[error("invalid overpayment amount: {amount}")]
    InvalidOverpaymentAmount {
        amount: Money,
    },

    #[error("invalid overpayment month: {month} (months are 1-based)")]
    InvalidOverpaymentMonth {
        month: u32,
    },

    #[error("invalid overpayment range: start month {start} after end month {end}")]
    InvalidOverpaymentRange {
        start: u32,
        end: u32,
    },

    #[error("overlapping recurring overpayments: {first} and {second}")]
    OverlappingRanges {
        first: RecurringOverpayment,
        second: RecurringOverpayment,
    },

    #[error("export failed: {message}")]
    ExportFailed {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
