pub mod decimal;
pub mod errors;
pub mod export;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use export::{write_csv, write_json};
pub use schedule::{
    scheduled_payment, ExtraPayment, InstallmentRecord, MortgageSchedule, OverpaymentSchedule,
};
pub use types::{
    Currency, LoanTerms, OneOffOverpayment, RecurringOverpayment, ScheduleWarning, TermSavings,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
