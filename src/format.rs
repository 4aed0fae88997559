//! # Display Formatting
//!
//! Locale-pure helpers that turn dates and amounts into display strings.
//! Output depends only on the arguments (no system locale, timezone, or
//! clock is consulted), so rendering the same invoice twice is bit-identical.

use chrono::{Datelike, NaiveDate};

use crate::invoice::Language;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a calendar date in the long form of the language.
///
/// English uses month-day-year ("January 5, 2024"), Spanish day-month-year
/// ("5 de enero de 2024").
pub fn format_date(date: NaiveDate, language: Language) -> String {
    let month_idx = date.month0() as usize;
    match language {
        Language::En => format!("{} {}, {}", MONTHS_EN[month_idx], date.day(), date.year()),
        Language::Es => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_ES[month_idx],
            date.year()
        ),
    }
}

/// Format a money amount the way the document pipeline displays it: two
/// fixed decimals, no symbol, no thousands separators.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format a plain number the way it appears on the document: integral values
/// print without a decimal point (quantities like `2`, tax rates like `10`).
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Format a money amount with grouping and a currency symbol: US-dollar
/// style for English, euro style for Spanish.
///
/// The document pipeline intentionally does not use this; invoices carry
/// bare two-decimal amounts via [`format_amount`]. It exists for callers
/// building summaries or emails around the pipeline.
pub fn format_currency(amount: f64, language: Language) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let (group_sep, decimal_sep) = match language {
        Language::En => (',', '.'),
        Language::Es => ('.', ','),
    };

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match language {
        Language::En => format!("{}${}{}{:02}", sign, grouped, decimal_sep, fraction),
        Language::Es => format!("{}{}{}{:02} €", sign, grouped, decimal_sep, fraction),
    }
}
