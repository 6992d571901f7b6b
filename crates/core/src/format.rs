//! Display formatting for amounts, dates and percentages.
//!
//! Amounts are rounded to two places with banker's rounding before display.
//! Rupee amounts use Indian digit grouping (`1,50,000.00`); other currencies
//! group by thousands.

use std::cmp::Reverse;

use chrono::NaiveDate;
use ledgerdesk_shared::types::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder shown for an absent value.
pub const MISSING: &str = "-";

/// Formats an amount with its currency symbol.
#[must_use]
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let grouped = match currency {
        Currency::Inr => group_indian(whole),
        _ => group_thousands(whole),
    };
    format!("{sign}{}{grouped}.{cents}", currency.symbol())
}

/// Formats a date as `14 Oct 2026`, or [`MISSING`].
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), |d| d.format("%d %b %Y").to_string())
}

/// Formats a percentage without trailing zeros, e.g. `60%`.
#[must_use]
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", percent.normalize())
}

/// Whole-number percentage shares of `parts`, adjusted to sum to exactly 100.
///
/// Each share is floored, then the points left over go to the parts with the
/// largest remainders (earlier parts win ties). Returns `None` when the
/// parts do not sum to a positive total.
#[must_use]
pub fn percent_shares(parts: &[Decimal]) -> Option<Vec<Decimal>> {
    let total = parts
        .iter()
        .try_fold(Decimal::ZERO, |acc, part| acc.checked_add(*part))?;
    if total <= Decimal::ZERO {
        return None;
    }

    let exact: Vec<Decimal> = parts
        .iter()
        .map(|part| {
            part.checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.checked_div(total))
                .or_else(|| {
                    part.checked_div(total)
                        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                })
        })
        .collect::<Option<_>>()?;
    let mut shares: Vec<Decimal> = exact.iter().map(|e| e.floor()).collect();

    let assigned: Decimal = shares.iter().copied().sum();
    let mut leftover = Decimal::ONE_HUNDRED - assigned;
    let mut by_remainder: Vec<usize> = (0..parts.len()).collect();
    by_remainder.sort_by_key(|&i| Reverse(exact[i] - shares[i]));
    for index in by_remainder {
        if leftover <= Decimal::ZERO {
            break;
        }
        shares[index] += Decimal::ONE;
        leftover -= Decimal::ONE;
    }
    Some(shares)
}

/// Formats an optional day count, e.g. `22.5 days`.
#[must_use]
pub fn format_days(days: Option<Decimal>) -> String {
    days.map_or_else(|| MISSING.to_string(), |d| format!("{} days", d.normalize()))
}

/// `1234567` -> `12,34,567`
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }
    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut out = group_from_right(head, 2);
    out.push(',');
    out.push_str(tail);
    out
}

/// `1234567` -> `1,234,567`
fn group_thousands(whole: &str) -> String {
    group_from_right(whole, 3)
}

fn group_from_right(digits: &str, size: usize) -> String {
    let lead = digits.len() % size;
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + size - lead) % size == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
