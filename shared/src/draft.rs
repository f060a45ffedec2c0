//! Invoice draft validation and payload assembly.
//!
//! Validation is a single pure function producing one optional message per
//! field plus the aggregate banner message, re-run synchronously on every
//! submit attempt. Nothing here talks to the network.

use crate::{Client, Invoice, LineItem, issuer};

pub const MSG_INVOICE_DATE: &str = "Invoice Date is required.";
pub const MSG_DUE_DATE: &str = "Due Date is required.";
pub const MSG_COMPANY_NAME: &str = "Company name is required.";
pub const MSG_TERM: &str = "Terms are required.";
pub const MSG_STATUS: &str = "Status is required.";
pub const MSG_CURRENCY: &str = "Currency is required.";
pub const MSG_THANKS_NOTE: &str = "Thanks note is required.";
pub const MSG_COMPANY_ADDRESS: &str = "Company address is required.";
pub const MSG_ITEMS: &str = "Add at least one item.";

pub const MSG_AGGREGATE_CREATE: &str =
    "Please fill in all required fields, add at least one item, and select a valid company with an address.";
pub const MSG_AGGREGATE_EDIT: &str =
    "Please fill in all required fields and add at least one item.";

pub const DEFAULT_THANKS_NOTE: &str = "Thank you for your business!";

/// Form state of an invoice draft, all fields as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    pub invoice_date: String,
    pub due_date: String,
    pub company_name: String,
    pub term: String,
    pub status: String,
    pub currency: String,
    pub thanks_note: String,
}

/// One optional error per draft field. Empty bag means the draft validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub invoice_date: Option<&'static str>,
    pub due_date: Option<&'static str>,
    pub company_name: Option<&'static str>,
    pub term: Option<&'static str>,
    pub status: Option<&'static str>,
    pub currency: Option<&'static str>,
    pub thanks_note: Option<&'static str>,
    pub company_address: Option<&'static str>,
    pub items: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        *self == DraftErrors::default()
    }
}

/// Validate a draft before submission.
///
/// `company_address` is the address of the selected bill-to company in the
/// create flow (required non-blank there); pass `None` in the edit flow,
/// where the stored invoice already carries an address to fall back on.
pub fn validate(
    form: &DraftForm,
    company_address: Option<&str>,
    item_count: usize,
) -> Result<(), DraftErrors> {
    let errors = DraftErrors {
        invoice_date: form.invoice_date.is_empty().then_some(MSG_INVOICE_DATE),
        due_date: form.due_date.is_empty().then_some(MSG_DUE_DATE),
        company_name: form.company_name.is_empty().then_some(MSG_COMPANY_NAME),
        term: form.term.is_empty().then_some(MSG_TERM),
        status: form.status.is_empty().then_some(MSG_STATUS),
        currency: form.currency.is_empty().then_some(MSG_CURRENCY),
        thanks_note: form.thanks_note.trim().is_empty().then_some(MSG_THANKS_NOTE),
        company_address: company_address
            .is_some_and(|addr| addr.trim().is_empty())
            .then_some(MSG_COMPANY_ADDRESS),
        items: (item_count == 0).then_some(MSG_ITEMS),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Assemble the invoice document for submission. The bill-to company is
/// copied by value here; later edits to the client record do not touch
/// invoices already raised against it.
pub fn build_invoice(form: &DraftForm, bill_to: &Client, items: Vec<LineItem>) -> Invoice {
    let thanks = form.thanks_note.trim();
    Invoice {
        id: String::new(),
        invoice_no: String::new(),
        invoice_date: form.invoice_date.clone(),
        invoice_terms: form.term.clone(),
        due_date: form.due_date.clone(),
        invoice_company_name: bill_to.company_name.clone(),
        invoice_company_address: bill_to.company_address.clone(),
        invoice_country: bill_to.company_country.clone(),
        invoice_pin_code: bill_to.company_pin_code.clone(),
        invoice_email: bill_to.company_email.clone(),
        invoice_mobile_no: bill_to.company_mobile_no.clone(),
        invoice_consultant_name: bill_to.contact_name.clone(),
        invoice_currency: form.currency.clone(),
        invoice_status: form.status.clone(),
        company_name: issuer::NAME.to_string(),
        company_address: issuer::ADDRESS.to_string(),
        company_mobile_no: issuer::MOBILE.to_string(),
        company_email: issuer::EMAIL.to_string(),
        thanks_note: if thanks.is_empty() {
            DEFAULT_THANKS_NOTE.to_string()
        } else {
            thanks.to_string()
        },
        items,
        is_delete: None,
        total_amount: None,
        paid_amount: None,
        pending_amount: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DraftForm {
        DraftForm {
            invoice_date: "2024-01-01".to_string(),
            due_date: "2024-02-15".to_string(),
            company_name: "Acme Corp".to_string(),
            term: "Net 45".to_string(),
            status: "New".to_string(),
            currency: "USD".to_string(),
            thanks_note: "Thank you for your business!".to_string(),
        }
    }

    fn acme() -> Client {
        Client {
            id: "c1".to_string(),
            company_name: "Acme Corp".to_string(),
            contact_name: "J. Smith".to_string(),
            company_address: "1 Acme Way".to_string(),
            company_country: "USA".to_string(),
            company_pin_code: "10001".to_string(),
            company_email: "billing@acme.test".to_string(),
            company_mobile_no: "+1 555 0100".to_string(),
            logo_url: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&filled_form(), Some("1 Acme Way"), 2).is_ok());
    }

    #[test]
    fn empty_items_always_rejected() {
        let errors = validate(&filled_form(), Some("1 Acme Way"), 0).unwrap_err();
        assert_eq!(errors.items, Some(MSG_ITEMS));
        // Every other field was valid; only the item list blocks submission.
        assert_eq!(errors.invoice_date, None);
        assert_eq!(errors.company_name, None);
    }

    #[test]
    fn each_missing_field_reports_its_own_message() {
        let form = DraftForm::default();
        let errors = validate(&form, Some(""), 0).unwrap_err();
        assert_eq!(errors.invoice_date, Some(MSG_INVOICE_DATE));
        assert_eq!(errors.due_date, Some(MSG_DUE_DATE));
        assert_eq!(errors.company_name, Some(MSG_COMPANY_NAME));
        assert_eq!(errors.term, Some(MSG_TERM));
        assert_eq!(errors.status, Some(MSG_STATUS));
        assert_eq!(errors.currency, Some(MSG_CURRENCY));
        assert_eq!(errors.thanks_note, Some(MSG_THANKS_NOTE));
        assert_eq!(errors.company_address, Some(MSG_COMPANY_ADDRESS));
        assert_eq!(errors.items, Some(MSG_ITEMS));
    }

    #[test]
    fn whitespace_thanks_note_is_missing() {
        let mut form = filled_form();
        form.thanks_note = "   ".to_string();
        let errors = validate(&form, Some("1 Acme Way"), 1).unwrap_err();
        assert_eq!(errors.thanks_note, Some(MSG_THANKS_NOTE));
    }

    #[test]
    fn edit_flow_skips_the_address_check() {
        assert!(validate(&filled_form(), None, 1).is_ok());
    }

    #[test]
    fn build_copies_bill_to_by_value() {
        let form = filled_form();
        let mut client = acme();
        let invoice = build_invoice(&form, &client, Vec::new());

        client.company_address = "moved away".to_string();
        assert_eq!(invoice.invoice_company_address, "1 Acme Way");
        assert_eq!(invoice.invoice_consultant_name, "J. Smith");
        assert_eq!(invoice.company_name, issuer::NAME);
        assert_eq!(invoice.invoice_status, "New");
    }

    #[test]
    fn blank_thanks_note_falls_back_to_default() {
        let mut form = filled_form();
        form.thanks_note = "  ".to_string();
        let invoice = build_invoice(&form, &acme(), Vec::new());
        assert_eq!(invoice.thanks_note, DEFAULT_THANKS_NOTE);
    }
}
