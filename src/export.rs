/// export support for finished schedules
use std::io;

use crate::errors::{Result, ScheduleError};
use crate::schedule::MortgageSchedule;

/// column headers for the worksheet view, money columns carrying
/// thousands-grouped cells
const HEADERS: [&str; 12] = [
    "Instalment",
    "Date",
    "Principal to date",
    "Payment",
    "Paid to date",
    "Interest charged",
    "Interest charged to date",
    "Principal repaid",
    "Principal repaid to date",
    "Remaining principal",
    "One-off overpayment",
    "Recurring overpayment",
];

/// write the schedule as a single csv worksheet, one row per
/// installment, 1-indexed by installment number
pub fn write_csv<W: io::Write>(schedule: &MortgageSchedule, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(HEADERS).map_err(csv_failed)?;

    for record in &schedule.installments {
        out.write_record([
            record.installment.to_string(),
            record.payment_date.format("%Y-%m-%d").to_string(),
            record.beginning_balance.grouped(),
            record.payment_amount.grouped(),
            record.cumulative_paid.grouped(),
            record.interest_portion.grouped(),
            record.cumulative_interest.grouped(),
            record.principal_portion.grouped(),
            record.cumulative_principal.grouped(),
            record.ending_balance.grouped(),
            flag(record.one_off_applied),
            flag(record.recurring_applied),
        ])
        .map_err(csv_failed)?;
    }

    out.flush().map_err(|e| ScheduleError::ExportFailed {
        message: e.to_string(),
    })?;
    Ok(())
}

/// write the schedule as pretty-printed json
pub fn write_json<W: io::Write>(schedule: &MortgageSchedule, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, schedule).map_err(|e| ScheduleError::ExportFailed {
        message: e.to_string(),
    })
}

fn flag(applied: bool) -> String {
    if applied { "yes" } else { "no" }.to_string()
}

fn csv_failed(e: csv::Error) -> ScheduleError {
    ScheduleError::ExportFailed {
        message: e.to_string(),
    }
}
