/// quick start - minimal example to get started
use chrono::{TimeZone, Utc};
use mortgage_schedule_rs::{LoanTerms, Money, MortgageSchedule, OverpaymentSchedule, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a £250,000 mortgage at 3.4% over 30 years
    let terms = LoanTerms::new(
        Money::from_major(250_000),
        Rate::from_user_input(dec!(3.4)),
        30,
    );

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let schedule = MortgageSchedule::generate(terms, &OverpaymentSchedule::none(), start)?;

    let currency = terms.currency;
    println!(
        "Borrowed {}{} at {} over {} years ({} instalments)",
        currency,
        terms.principal.grouped(),
        terms.annual_rate,
        terms.term_years,
        terms.term_months()
    );
    println!(
        "Monthly payments set to {}{}",
        currency,
        schedule.scheduled_payment.grouped()
    );
    println!("Total payments {}{}", currency, schedule.total_paid.grouped());
    println!(
        "Total interest {}{}",
        currency,
        schedule.total_interest.grouped()
    );
    println!(
        "For each {}1 borrowed you will pay back {}{}",
        currency,
        currency,
        schedule.repaid_per_unit_borrowed()
    );

    Ok(())
}
