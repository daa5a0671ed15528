/// export - csv worksheet and json views of a finished schedule
use chrono::{TimeZone, Utc};
use mortgage_schedule_rs::{
    write_csv, write_json, LoanTerms, Money, MortgageSchedule, OneOffOverpayment,
    OverpaymentSchedule, Rate,
};
use rust_decimal_macros::dec;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = LoanTerms::new(
        Money::from_major(250_000),
        Rate::from_user_input(dec!(3.4)),
        30,
    );
    let overpayments = OverpaymentSchedule::build(
        &[OneOffOverpayment::new(12, Money::from_major(20_000))],
        &[],
    )?;
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let schedule = MortgageSchedule::generate(terms, &overpayments, start)?;

    let csv_file = File::create("My_Mortgage_Analysis.csv")?;
    write_csv(&schedule, csv_file)?;
    println!(
        "wrote My_Mortgage_Analysis.csv ({} rows)",
        schedule.installments.len()
    );

    let json_file = File::create("My_Mortgage_Analysis.json")?;
    write_json(&schedule, json_file)?;
    println!("wrote My_Mortgage_Analysis.json");

    // the same csv can also target any writer, e.g. a buffer
    let mut preview = Vec::new();
    write_csv(&schedule, &mut preview)?;
    let text = String::from_utf8(preview)?;
    println!("\nfirst rows:");
    for line in text.lines().take(4) {
        println!("{}", line);
    }

    Ok(())
}
