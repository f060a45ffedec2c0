//! Due-date derivation from payment terms.

use chrono::{Days, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Number of days encoded in a `"Net <N>"` term string. Missing or
/// unparseable day counts collapse to zero rather than erroring.
pub fn term_days(term: &str) -> u64 {
    let rest = term.replace("Net", "");
    rest.trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Due date as ISO `YYYY-MM-DD`: invoice date plus the term's calendar days.
/// Returns an empty string when either input is absent or the date does not
/// parse; callers treat an empty due date as "submission blocked".
pub fn due_date(invoice_date: &str, term: &str) -> String {
    if invoice_date.is_empty() || term.is_empty() {
        return String::new();
    }
    let Ok(date) = NaiveDate::parse_from_str(invoice_date, ISO_DATE) else {
        return String::new();
    };
    date.checked_add_days(Days::new(term_days(term)))
        .map(|due| due.format(ISO_DATE).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_45_from_january_first() {
        assert_eq!(due_date("2024-01-01", "Net 45"), "2024-02-15");
    }

    #[test]
    fn net_30_and_net_90() {
        assert_eq!(due_date("2024-01-15", "Net 30"), "2024-02-14");
        assert_eq!(due_date("2024-01-01", "Net 90"), "2024-03-31");
    }

    #[test]
    fn unparseable_term_counts_as_zero_days() {
        assert_eq!(due_date("2024-06-10", "Due on receipt"), "2024-06-10");
        assert_eq!(term_days("Net"), 0);
        assert_eq!(term_days("Net x"), 0);
        assert_eq!(term_days("Net 45"), 45);
    }

    #[test]
    fn absent_inputs_yield_no_due_date() {
        assert_eq!(due_date("", "Net 30"), "");
        assert_eq!(due_date("2024-01-01", ""), "");
        assert_eq!(due_date("not-a-date", "Net 30"), "");
    }

    #[test]
    fn crosses_leap_day() {
        assert_eq!(due_date("2024-01-31", "Net 30"), "2024-03-01");
    }
}
