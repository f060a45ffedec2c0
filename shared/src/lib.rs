use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod draft;
pub mod ledger;
pub mod money;
pub mod terms;

/// Issuing company details, printed on every invoice and receipt.
pub mod issuer {
    pub const NAME: &str = "Meridian Advisory Pvt Ltd";
    pub const ADDRESS: &str = "184 Harbor Road, Nungambakkam";
    pub const CITY: &str = "Chennai, Tamil Nadu 600034, India";
    pub const MOBILE: &str = "+91 44 2834 1000";
    pub const EMAIL: &str = "accounts@meridianadvisory.in";
    pub const WEBSITE: &str = "www.meridianadvisory.in";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub company_address: String,
    pub company_country: String,
    pub company_pin_code: String,
    pub company_email: String,
    pub company_mobile_no: String,
    #[serde(default)]
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
}

/// One billable row on an invoice. Ids are client-generated (max + 1) while
/// the enclosing draft is being composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: i64,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub qty: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Invoice document as it crosses the wire. The amount fields are not part of
/// the stored document; they are filled in from the per-invoice summary fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub invoice_no: String,
    pub invoice_date: String,
    #[serde(default)]
    pub invoice_terms: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub invoice_company_name: String,
    #[serde(default)]
    pub invoice_company_address: String,
    #[serde(default)]
    pub invoice_country: String,
    #[serde(default)]
    pub invoice_pin_code: String,
    #[serde(default)]
    pub invoice_email: String,
    #[serde(default)]
    pub invoice_mobile_no: String,
    #[serde(default)]
    pub invoice_consultant_name: String,
    #[serde(default)]
    pub invoice_currency: String,
    #[serde(default)]
    pub invoice_status: String,
    pub company_name: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub company_mobile_no: String,
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub thanks_note: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    // Soft-delete marker; the backend stores "1" for deleted rows.
    #[serde(rename = "is_delete", default, skip_serializing_if = "Option::is_none")]
    pub is_delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_amount: Option<Decimal>,
}

impl Invoice {
    pub fn is_deleted(&self) -> bool {
        self.is_delete.as_deref() == Some("1")
    }

    /// An invoice may only be edited or deleted while money is still owed on
    /// it and its workflow status has not been closed out.
    pub fn is_editable(&self) -> bool {
        self.pending_amount.map_or(false, |p| p > Decimal::ZERO)
            && self.invoice_status != InvoiceStatus::Completed.as_str()
    }
}

/// Derived amounts for one invoice (`/api/invoices/:id/with-amounts`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountSummary {
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub paid_amount: Decimal,
    #[serde(default)]
    pub pending_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub invoice_no: String,
    pub payment_amount: Option<Decimal>,
    pub payment_date: String,
    pub payment_method: String,
    pub reference_no: String,
}

/// Term master record. Lives only in browser storage; never sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    pub id: i64,
    pub term: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Net30,
    Net45,
    Net90,
}

impl Term {
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Net30 => "Net 30",
            Term::Net45 => "Net 45",
            Term::Net90 => "Net 90",
        }
    }

    pub fn all() -> [Term; 3] {
        [Term::Net30, Term::Net45, Term::Net90]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    New,
    Completed,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::New => "New",
            InvoiceStatus::Completed => "Completed",
        }
    }

    pub fn all() -> [InvoiceStatus; 2] {
        [InvoiceStatus::New, InvoiceStatus::Completed]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Kwd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Kwd => "KWD",
        }
    }

    // KWD carries no symbol by table definition; amounts render bare.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
            Currency::Kwd => "",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "Pound",
            Currency::Inr => "Rupees",
            Currency::Jpy => "Yen",
            Currency::Kwd => "Dinar",
        }
    }

    pub fn locale(&self) -> &'static str {
        match self {
            Currency::Usd => "en-US",
            Currency::Eur => "de-DE",
            Currency::Gbp => "en-GB",
            Currency::Inr => "en-IN",
            Currency::Jpy => "ja-JP",
            Currency::Kwd => "ar-KW",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::all().into_iter().find(|c| c.code() == code)
    }

    pub fn all() -> [Currency; 6] {
        [
            Currency::Usd,
            Currency::Eur,
            Currency::Gbp,
            Currency::Inr,
            Currency::Jpy,
            Currency::Kwd,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Cash => "CASH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::CreditCard,
            PaymentMethod::BankTransfer,
            PaymentMethod::Cash,
        ]
    }
}

/// Whether an invoice is paid off, derived purely from the pending amount.
/// Independent of the invoice's own workflow status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    NotCompleted,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::NotCompleted => "Not Completed",
        }
    }
}

pub fn payment_status(pending_amount: Option<Decimal>) -> PaymentStatus {
    match pending_amount {
        Some(pending) if pending <= Decimal::ZERO => PaymentStatus::Completed,
        _ => PaymentStatus::NotCompleted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn sample_invoice() -> Invoice {
        Invoice {
            id: String::new(),
            invoice_no: "INV-001".to_string(),
            invoice_date: "2024-01-01".to_string(),
            invoice_terms: "Net 30".to_string(),
            due_date: "2024-01-31".to_string(),
            invoice_company_name: "Acme Corp".to_string(),
            invoice_company_address: "1 Acme Way".to_string(),
            invoice_country: "USA".to_string(),
            invoice_pin_code: "10001".to_string(),
            invoice_email: "billing@acme.test".to_string(),
            invoice_mobile_no: "+1 555 0100".to_string(),
            invoice_consultant_name: "J. Smith".to_string(),
            invoice_currency: "USD".to_string(),
            invoice_status: "New".to_string(),
            company_name: issuer::NAME.to_string(),
            company_address: issuer::ADDRESS.to_string(),
            company_mobile_no: issuer::MOBILE.to_string(),
            company_email: issuer::EMAIL.to_string(),
            thanks_note: "Thank you for your business!".to_string(),
            items: Vec::new(),
            is_delete: None,
            total_amount: None,
            paid_amount: None,
            pending_amount: None,
        }
    }

    #[test]
    fn payment_status_completed_iff_nothing_pending() {
        assert_eq!(payment_status(Some(dec("0"))), PaymentStatus::Completed);
        assert_eq!(payment_status(Some(dec("-10.00"))), PaymentStatus::Completed);
        assert_eq!(payment_status(Some(dec("0.01"))), PaymentStatus::NotCompleted);
        assert_eq!(payment_status(None), PaymentStatus::NotCompleted);
    }

    #[test]
    fn payment_status_ignores_workflow_status() {
        let mut invoice = sample_invoice();
        invoice.invoice_status = "Completed".to_string();
        invoice.pending_amount = Some(dec("50"));
        assert_eq!(
            payment_status(invoice.pending_amount),
            PaymentStatus::NotCompleted
        );
    }

    #[test]
    fn soft_deleted_invoices_are_flagged_not_removed() {
        let mut invoice = sample_invoice();
        assert!(!invoice.is_deleted());
        invoice.is_delete = Some("1".to_string());
        assert!(invoice.is_deleted());
    }

    #[test]
    fn editable_only_while_pending_and_not_completed() {
        let mut invoice = sample_invoice();
        invoice.pending_amount = Some(dec("100"));
        assert!(invoice.is_editable());

        invoice.pending_amount = Some(dec("0"));
        assert!(!invoice.is_editable());

        invoice.pending_amount = Some(dec("100"));
        invoice.invoice_status = "Completed".to_string();
        assert!(!invoice.is_editable());
    }

    #[test]
    fn invoice_serializes_camel_case_and_skips_unset_fields() {
        let invoice = sample_invoice();
        let json = serde_json::to_value(&invoice).unwrap();
        assert!(json.get("invoiceNo").is_some());
        assert!(json.get("invoiceDate").is_some());
        assert!(json.get("thanksNote").is_some());
        // Unset id and amounts must not leak into create payloads.
        assert!(json.get("id").is_none());
        assert!(json.get("pendingAmount").is_none());
    }

    #[test]
    fn invoice_deserializes_sparse_listing_rows() {
        let row: Invoice = serde_json::from_str(
            r#"{
                "id": "662a",
                "invoiceNo": "INV-042",
                "invoiceDate": "2024-03-01",
                "companyName": "Meridian Advisory Pvt Ltd",
                "is_delete": "1"
            }"#,
        )
        .unwrap();
        assert_eq!(row.invoice_no, "INV-042");
        assert!(row.is_deleted());
        assert!(row.items.is_empty());
        assert_eq!(row.pending_amount, None);
    }
}
