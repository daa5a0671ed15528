pub mod amortization;
pub mod overpayment;
pub mod payment;

pub use amortization::{InstallmentRecord, MortgageSchedule};
pub use overpayment::{ExtraPayment, OverpaymentSchedule};
pub use payment::scheduled_payment;
