use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::Result;
use crate::schedule::overpayment::OverpaymentSchedule;
use crate::schedule::payment::scheduled_payment;
use crate::types::{LoanTerms, ScheduleWarning, TermSavings};

/// one monthly installment in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRecord {
    pub installment: u32,
    pub payment_date: DateTime<Utc>,
    pub beginning_balance: Money,
    pub scheduled_payment: Money,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub cumulative_paid: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
    pub ending_balance: Money,
    pub one_off_applied: bool,
    pub recurring_applied: bool,
}

/// finished amortization ledger with summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSchedule {
    pub schedule_id: Uuid,
    pub terms: LoanTerms,
    pub scheduled_payment: Money,
    pub start_date: DateTime<Utc>,
    pub installments: Vec<InstallmentRecord>,
    pub installments_used: u32,
    pub total_paid: Money,
    pub total_interest: Money,
    pub term_savings: Option<TermSavings>,
    pub warnings: Vec<ScheduleWarning>,
}

impl MortgageSchedule {
    /// run the amortization loop and collect the ledger
    ///
    /// The remaining balance is carried in full decimal precision
    /// across the loop; every stored monetary value is rounded to 2
    /// places at the point of storage. An installment that can clear
    /// the whole balance pays exactly the balance plus that period's
    /// interest and terminates the schedule early.
    pub fn generate(
        terms: LoanTerms,
        overpayments: &OverpaymentSchedule,
        start_date: DateTime<Utc>,
    ) -> Result<Self> {
        let base = scheduled_payment(&terms)?;
        let warnings = overpayments.underfunded_overrides(base);

        let term_months = terms.term_months();
        let monthly_rate = terms.annual_rate.monthly().as_decimal();

        let mut remaining = terms.principal.as_decimal();
        let mut cumulative_paid = Decimal::ZERO;
        let mut cumulative_interest = Decimal::ZERO;
        let mut cumulative_principal = Decimal::ZERO;

        let mut installments = Vec::new();

        for number in 1..=term_months {
            let extra = overpayments.get(number);
            let extra_amount = extra.map(|e| e.amount).unwrap_or(Money::ZERO);

            let mut actual = (base + extra_amount).as_decimal();
            let interest = remaining * monthly_rate;

            // the final scheduled installment also settles whatever
            // rounding drift is left on the balance
            let terminal = remaining <= actual || number == term_months;
            if terminal {
                actual = remaining + interest;
            }

            let principal_portion = actual - interest;

            cumulative_paid += actual;
            cumulative_interest += interest;
            cumulative_principal += principal_portion;

            let beginning = remaining;
            remaining -= principal_portion;

            // stored principal is the difference of the two rounded
            // figures so the row identity holds exactly at 2 places
            let stored_payment = Money::from_decimal(actual);
            let stored_interest = Money::from_decimal(interest);

            installments.push(InstallmentRecord {
                installment: number,
                payment_date: add_months(start_date, number),
                beginning_balance: Money::from_decimal(beginning),
                scheduled_payment: base,
                payment_amount: stored_payment,
                interest_portion: stored_interest,
                principal_portion: stored_payment - stored_interest,
                cumulative_paid: Money::from_decimal(cumulative_paid),
                cumulative_interest: Money::from_decimal(cumulative_interest),
                cumulative_principal: Money::from_decimal(cumulative_principal),
                ending_balance: Money::from_decimal(remaining),
                one_off_applied: extra.map(|e| e.one_off).unwrap_or(false),
                recurring_applied: extra.map(|e| e.recurring).unwrap_or(false),
            });

            if terminal {
                break;
            }
        }

        let installments_used = installments.len() as u32;
        let term_savings = if overpayments.is_empty() {
            None
        } else {
            Some(TermSavings {
                months: term_months - installments_used,
            })
        };

        Ok(Self {
            schedule_id: Uuid::new_v4(),
            terms,
            scheduled_payment: base,
            start_date,
            installments,
            installments_used,
            total_paid: Money::from_decimal(cumulative_paid),
            total_interest: Money::from_decimal(cumulative_interest),
            term_savings,
            warnings,
        })
    }

    /// get record for a specific installment number
    pub fn installment(&self, number: u32) -> Option<&InstallmentRecord> {
        self.installments.get((number - 1) as usize)
    }

    /// remaining balance after a given installment
    pub fn balance_after(&self, number: u32) -> Money {
        self.installment(number)
            .map(|record| record.ending_balance)
            .unwrap_or(self.terms.principal)
    }

    /// total repaid per unit of principal borrowed
    pub fn repaid_per_unit_borrowed(&self) -> Money {
        Money::from_decimal(self.total_paid.as_decimal() / self.terms.principal.as_decimal())
    }
}

/// add months to date
fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let mut result = date;
    for _ in 0..months {
        let days_in_month = days_in_month(result.year(), result.month());
        result = result + Duration::days(days_in_month as i64);
    }
    result
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::types::{OneOffOverpayment, RecurringOverpayment};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn standard_terms() -> LoanTerms {
        LoanTerms::new(
            Money::from_major(250_000),
            Rate::from_user_input(dec!(3.4)),
            30,
        )
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn baseline() -> MortgageSchedule {
        MortgageSchedule::generate(standard_terms(), &OverpaymentSchedule::none(), start())
            .unwrap()
    }

    #[test]
    fn test_baseline_schedule_shape() {
        let schedule = baseline();

        assert_eq!(schedule.installments_used, 360);
        assert_eq!(schedule.installments.len(), 360);
        assert_eq!(schedule.scheduled_payment, Money::from_decimal(dec!(1108.70)));
        assert_eq!(schedule.term_savings, None);
        assert!(schedule.warnings.is_empty());

        let first = &schedule.installments[0];
        assert_eq!(first.installment, 1);
        assert_eq!(first.beginning_balance, Money::from_major(250_000));
        assert!(first.interest_portion > Money::ZERO);
        assert!(first.principal_portion > Money::ZERO);

        let last = schedule.installments.last().unwrap();
        assert_eq!(last.ending_balance, Money::ZERO);
        assert_eq!(last.cumulative_principal, Money::from_major(250_000));
    }

    #[test]
    fn test_baseline_totals() {
        let schedule = baseline();

        // paid splits into interest and principal with nothing left over
        assert_eq!(
            schedule.total_paid,
            schedule.total_interest + Money::from_major(250_000)
        );

        // against the naive payment * months figure, off only by the
        // rounding drift folded into the last installment
        let naive = Money::from_decimal(dec!(1108.70) * dec!(360)) - Money::from_major(250_000);
        let drift = (schedule.total_interest - naive).abs();
        assert!(drift < Money::from_major(4), "drift was {}", drift);
    }

    #[test]
    fn test_every_row_splits_exactly() {
        let overpayments = OverpaymentSchedule::build(
            &[OneOffOverpayment::new(12, Money::from_major(20_000))],
            &[RecurringOverpayment::new(24, 120, Money::from_major(100))],
        )
        .unwrap();
        let schedule =
            MortgageSchedule::generate(standard_terms(), &overpayments, start()).unwrap();

        for record in &schedule.installments {
            assert_eq!(
                record.interest_portion + record.principal_portion,
                record.payment_amount,
                "row {} does not split",
                record.installment
            );
        }
    }

    #[test]
    fn test_balance_never_increases() {
        let schedule = baseline();
        for pair in schedule.installments.windows(2) {
            assert!(pair[1].ending_balance <= pair[0].ending_balance);
            assert_eq!(pair[1].beginning_balance, pair[0].ending_balance);
        }
    }

    #[test]
    fn test_one_off_overpayment_shortens_schedule() {
        let overpayments = OverpaymentSchedule::build(
            &[OneOffOverpayment::new(12, Money::from_major(20_000))],
            &[],
        )
        .unwrap();
        let schedule =
            MortgageSchedule::generate(standard_terms(), &overpayments, start()).unwrap();
        let base = baseline();

        assert_eq!(schedule.installments_used, 315);
        assert!(schedule.installments_used < base.installments_used);
        assert!(schedule.total_interest < base.total_interest);
        assert_eq!(schedule.term_savings, Some(TermSavings { months: 45 }));

        let boosted = schedule.installment(12).unwrap();
        assert!(boosted.one_off_applied);
        assert!(!boosted.recurring_applied);
        assert_eq!(
            boosted.payment_amount,
            Money::from_decimal(dec!(21108.70))
        );

        let terminal = schedule.installments.last().unwrap();
        assert_eq!(terminal.ending_balance, Money::ZERO);
    }

    #[test]
    fn test_recurring_overpayment_shortens_schedule() {
        let overpayments = OverpaymentSchedule::build(
            &[],
            &[RecurringOverpayment::new(1, 360, Money::from_major(100))],
        )
        .unwrap();
        let schedule =
            MortgageSchedule::generate(standard_terms(), &overpayments, start()).unwrap();
        let base = baseline();

        assert_eq!(schedule.installments_used, 312);
        assert!(schedule.total_interest < base.total_interest);

        let record = schedule.installment(100).unwrap();
        assert!(record.recurring_applied);
        assert!(!record.one_off_applied);
    }

    #[test]
    fn test_overpayment_flags_stay_independent() {
        let overpayments = OverpaymentSchedule::build(
            &[OneOffOverpayment::new(6, Money::from_major(1_000))],
            &[RecurringOverpayment::new(4, 8, Money::from_major(50))],
        )
        .unwrap();
        let schedule =
            MortgageSchedule::generate(standard_terms(), &overpayments, start()).unwrap();

        let both = schedule.installment(6).unwrap();
        assert!(both.one_off_applied && both.recurring_applied);

        let recurring_only = schedule.installment(5).unwrap();
        assert!(!recurring_only.one_off_applied && recurring_only.recurring_applied);

        let neither = schedule.installment(9).unwrap();
        assert!(!neither.one_off_applied && !neither.recurring_applied);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let terms = LoanTerms::new(Money::from_major(12_000), Rate::ZERO, 1);
        let schedule =
            MortgageSchedule::generate(terms, &OverpaymentSchedule::none(), start()).unwrap();

        assert_eq!(schedule.installments_used, 12);
        assert_eq!(schedule.total_interest, Money::ZERO);
        assert_eq!(schedule.total_paid, Money::from_major(12_000));
        for record in &schedule.installments {
            assert_eq!(record.payment_amount, Money::from_major(1000));
            assert_eq!(record.interest_portion, Money::ZERO);
        }
        assert_eq!(
            schedule.installments.last().unwrap().ending_balance,
            Money::ZERO
        );
    }

    #[test]
    fn test_overpayment_bigger_than_balance_clamps_to_payoff() {
        let terms = LoanTerms::new(Money::from_major(10_000), Rate::from_percentage(5), 10);
        let overpayments = OverpaymentSchedule::build(
            &[OneOffOverpayment::new(2, Money::from_major(50_000))],
            &[],
        )
        .unwrap();
        let schedule = MortgageSchedule::generate(terms, &overpayments, start()).unwrap();

        assert_eq!(schedule.installments_used, 2);
        let terminal = schedule.installments.last().unwrap();
        assert_eq!(terminal.ending_balance, Money::ZERO);
        // pays the balance plus the period's interest, never more
        assert!(terminal.payment_amount < Money::from_major(10_100));
    }

    #[test]
    fn test_underfunded_override_warning_rides_along() {
        let overpayments = OverpaymentSchedule::build(
            &[],
            &[RecurringOverpayment::new(1, 12, Money::from_major(100))],
        )
        .unwrap();
        let schedule =
            MortgageSchedule::generate(standard_terms(), &overpayments, start()).unwrap();

        assert_eq!(schedule.warnings.len(), 1);
        // the stated amount is still used, not raised
        assert_eq!(
            schedule.installment(1).unwrap().payment_amount,
            Money::from_decimal(dec!(1208.70))
        );
    }

    #[test]
    fn test_payment_dates_walk_forward_monthly() {
        let schedule = baseline();
        let first = schedule.installment(1).unwrap();
        assert_eq!(
            first.payment_date,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
        );
        let thirteenth = schedule.installment(13).unwrap();
        assert_eq!(
            thirteenth.payment_date,
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_accessors() {
        let schedule = baseline();
        assert_eq!(schedule.balance_after(360), Money::ZERO);
        assert!(schedule.balance_after(1) < Money::from_major(250_000));
        assert_eq!(schedule.installment(361), None);
        assert_eq!(
            schedule.repaid_per_unit_borrowed(),
            Money::from_decimal(dec!(1.60))
        );
    }
}
