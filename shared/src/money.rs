//! Display formatting for monetary amounts.
//!
//! Amounts are assumed to already be in the selected currency; no conversion
//! happens here. Every known currency renders with exactly two fraction
//! digits and the grouping rules of its display locale. Unknown codes fall
//! back to a bare two-decimal number.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Currency;

/// Format `amount` for display in the currency identified by `currency_code`.
///
/// Known currencies are prefixed with `"<symbol> "` unless the symbol is
/// empty (KWD). Unknown codes return the plain number with no symbol and no
/// grouping.
pub fn format(amount: Decimal, currency_code: &str) -> String {
    let Some(currency) = Currency::from_code(currency_code) else {
        return plain(amount);
    };

    let grouped = localized(amount, currency.locale());
    let symbol = currency.symbol();
    if symbol.is_empty() {
        grouped
    } else {
        format!("{symbol} {grouped}")
    }
}

fn plain(amount: Decimal) -> String {
    format!("{:.2}", rounded(amount))
}

fn rounded(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// Grouping style per display locale. The Indian system groups the last three
// digits, then pairs (12,34,567.00); everything else here uses three-digit
// groups with the locale's separators.
fn localized(amount: Decimal, locale: &str) -> String {
    let (group_sep, decimal_sep, indian) = match locale {
        "de-DE" => ('.', ',', false),
        "en-IN" => (',', '.', true),
        _ => (',', '.', false),
    };

    let fixed = format!("{:.2}", rounded(amount));
    let (raw_int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match raw_int.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw_int),
    };

    let grouped = if indian {
        group_indian(digits, group_sep)
    } else {
        group_thousands(digits, group_sep)
    };

    format!("{sign}{grouped}{decimal_sep}{frac}")
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

fn group_indian(digits: &str, sep: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    let head_chars: Vec<char> = head.chars().collect();
    for (i, c) in head_chars.iter().enumerate() {
        if i > 0 && (head_chars.len() - i) % 2 == 0 {
            out.push(sep);
        }
        out.push(*c);
    }
    out.push(sep);
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn usd_prefixes_dollar_symbol() {
        assert_eq!(format(dec("125.50"), "USD"), "$ 125.50");
        assert_eq!(format(dec("1234567.891"), "USD"), "$ 1,234,567.89");
    }

    #[test]
    fn kwd_never_carries_a_symbol() {
        let out = format(dec("930.5"), "KWD");
        assert_eq!(out, "930.50");
        assert!(!out.contains('$'));
        assert!(!out.chars().any(|c| !c.is_ascii_digit() && c != ',' && c != '.'));
    }

    #[test]
    fn german_locale_swaps_separators() {
        assert_eq!(format(dec("1234.50"), "EUR"), "€ 1.234,50");
        assert_eq!(format(dec("0.5"), "EUR"), "€ 0,50");
    }

    #[test]
    fn indian_grouping_pairs_after_last_three() {
        assert_eq!(format(dec("1234567.80"), "INR"), "₹ 12,34,567.80");
        assert_eq!(format(dec("123456"), "INR"), "₹ 1,23,456.00");
        assert_eq!(format(dec("999"), "INR"), "₹ 999.00");
    }

    #[test]
    fn yen_and_pound_use_western_grouping() {
        assert_eq!(format(dec("98765"), "JPY"), "¥ 98,765.00");
        assert_eq!(format(dec("42"), "GBP"), "£ 42.00");
    }

    #[test]
    fn unknown_code_is_plain_two_decimals() {
        assert_eq!(format(dec("1234.5"), "AUD"), "1234.50");
        assert_eq!(format(dec("7"), ""), "7.00");
    }

    #[test]
    fn always_exactly_two_fraction_digits() {
        assert_eq!(format(dec("10"), "USD"), "$ 10.00");
        assert_eq!(format(dec("10.005"), "USD"), "$ 10.01");
        assert_eq!(format(dec("10.004"), "USD"), "$ 10.00");
    }

    #[test]
    fn negative_amounts_keep_sign_before_groups() {
        assert_eq!(format(dec("-1234.50"), "USD"), "$ -1,234.50");
    }
}
