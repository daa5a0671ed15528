use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::LoanTerms;

/// scheduled monthly payment for fixed-rate terms
///
/// Standard annuity formula with monthly rate `r` and `n` total
/// installments:
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)`
///
/// Computed in full decimal precision and rounded half-even to 2
/// places at the boundary. A zero rate degenerates the formula, so
/// that case is `P / n` directly.
pub fn scheduled_payment(terms: &LoanTerms) -> Result<Money> {
    terms.validate()?;

    let months = terms.term_months();
    let monthly_rate = terms.annual_rate.monthly().as_decimal();

    if monthly_rate.is_zero() {
        return Ok(terms.principal / Decimal::from(months));
    }

    // (1 + r)^n by iterated multiplication
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..months {
        compound *= base;
    }

    let numerator = terms.principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}
