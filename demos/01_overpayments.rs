/// overpayments - one-off lump sums and recurring monthly extras
use chrono::{TimeZone, Utc};
use mortgage_schedule_rs::{
    LoanTerms, Money, MortgageSchedule, OneOffOverpayment, OverpaymentSchedule, Rate,
    RecurringOverpayment,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== overpayment comparison ===\n");

    let terms = LoanTerms::new(
        Money::from_major(250_000),
        Rate::from_user_input(dec!(3.4)),
        30,
    );
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    // baseline: no overpayments
    let baseline = MortgageSchedule::generate(terms, &OverpaymentSchedule::none(), start)?;
    println!("baseline: {} instalments, total interest £{}",
        baseline.installments_used,
        baseline.total_interest.grouped()
    );

    // a £20,000 lump sum after the first year, plus £100 extra per
    // month through years 2-10
    let overpayments = OverpaymentSchedule::build(
        &[OneOffOverpayment::new(12, Money::from_major(20_000))],
        &[RecurringOverpayment::new(13, 120, Money::from_major(100))],
    )?;
    let boosted = MortgageSchedule::generate(terms, &overpayments, start)?;

    println!(
        "boosted:  {} instalments, total interest £{}",
        boosted.installments_used,
        boosted.total_interest.grouped()
    );
    println!(
        "interest saved: £{}",
        (baseline.total_interest - boosted.total_interest).grouped()
    );
    if let Some(savings) = boosted.term_savings {
        println!("mortgage-free {} early", savings);
    }
    for warning in &boosted.warnings {
        println!("warning: {}", warning);
    }

    // the ledger keeps the two overpayment kinds flagged separately
    let month_12 = boosted.installment(12).unwrap();
    println!(
        "\nmonth 12: paid £{} (one-off applied: {}, recurring applied: {})",
        month_12.payment_amount.grouped(),
        month_12.one_off_applied,
        month_12.recurring_applied
    );
    let month_13 = boosted.installment(13).unwrap();
    println!(
        "month 13: paid £{} (one-off applied: {}, recurring applied: {})",
        month_13.payment_amount.grouped(),
        month_13.one_off_applied,
        month_13.recurring_applied
    );

    Ok(())
}
