// Browser-storage repositories.
//
// All page-local persisted state goes through these types: the term master
// data (which never leaves the browser) and the document bridges that carry
// an invoice or payment from a table into its printable view. Call sites
// never touch storage keys directly, so the backing store can be swapped
// without touching them.

use gloo_storage::{LocalStorage, Storage};
use remit_shared::{Invoice, Payment, TermRecord};
use serde::{Serialize, de::DeserializeOwned};

const TERMS_KEY: &str = "remit_terms";
const PRINT_INVOICE_KEY: &str = "remit_print_invoice";
const RECEIPT_PAYMENT_KEY: &str = "remit_receipt_payment";

/// Minimal key/value store seam over the browser's persistent storage.
pub trait KeyValueStore {
    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
    fn write<T: Serialize>(&self, key: &str, value: &T);
    fn remove(&self, key: &str);
}

/// `LocalStorage`-backed store used everywhere outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        LocalStorage::get(key).ok()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        let _ = LocalStorage::set(key, value);
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

// ============================================
// TERM MASTER REPOSITORY
// ============================================

/// CRUD over the term master records. Client-local only; these are never
/// sent to the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermStore<S = BrowserStore> {
    store: S,
}

impl TermStore<BrowserStore> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: KeyValueStore> TermStore<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<TermRecord> {
        self.store.read(TERMS_KEY).unwrap_or_default()
    }

    pub fn get(&self, id: i64) -> Option<TermRecord> {
        self.list().into_iter().find(|t| t.id == id)
    }

    pub fn add(&self, term: &str, description: &str) -> TermRecord {
        let mut terms = self.list();
        let id = terms.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let record = TermRecord {
            id,
            term: term.to_string(),
            description: description.to_string(),
        };
        terms.push(record.clone());
        self.store.write(TERMS_KEY, &terms);
        record
    }

    pub fn update(&self, id: i64, term: &str, description: &str) -> bool {
        let mut terms = self.list();
        let Some(existing) = terms.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        existing.term = term.to_string();
        existing.description = description.to_string();
        self.store.write(TERMS_KEY, &terms);
        true
    }

    pub fn delete(&self, id: i64) {
        let terms: Vec<TermRecord> = self.list().into_iter().filter(|t| t.id != id).collect();
        self.store.write(TERMS_KEY, &terms);
    }
}

// ============================================
// DOCUMENT BRIDGE
// ============================================

/// Carries one document from a listing into its printable view. The stashed
/// copy survives a reload of the print page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBridge<S = BrowserStore> {
    store: S,
}

impl DocumentBridge<BrowserStore> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: KeyValueStore> DocumentBridge<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn stash_invoice(&self, invoice: &Invoice) {
        self.store.write(PRINT_INVOICE_KEY, invoice);
    }

    pub fn load_invoice(&self) -> Option<Invoice> {
        self.store.read(PRINT_INVOICE_KEY)
    }

    pub fn stash_payment(&self, payment: &Payment) {
        self.store.write(RECEIPT_PAYMENT_KEY, payment);
    }

    pub fn load_payment(&self) -> Option<Payment> {
        self.store.read(RECEIPT_PAYMENT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for the browser store.
    #[derive(Default)]
    struct MemoryStore {
        data: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
            self.data
                .borrow()
                .get(key)
                .and_then(|raw| serde_json::from_str(raw).ok())
        }

        fn write<T: Serialize>(&self, key: &str, value: &T) {
            let raw = serde_json::to_string(value).unwrap();
            self.data.borrow_mut().insert(key.to_string(), raw);
        }

        fn remove(&self, key: &str) {
            self.data.borrow_mut().remove(key);
        }
    }

    #[test]
    fn term_ids_are_max_plus_one() {
        let store = TermStore::with_store(MemoryStore::default());
        let a = store.add("Net 30", "Standard");
        let b = store.add("Net 45", "Extended");
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        store.delete(a.id);
        let c = store.add("Net 90", "Quarterly");
        assert_eq!(c.id, 3);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn term_update_rewrites_in_place() {
        let store = TermStore::with_store(MemoryStore::default());
        let record = store.add("Net 30", "Standard");
        assert!(store.update(record.id, "Net 30", "Default for new clients"));
        assert_eq!(
            store.get(record.id).unwrap().description,
            "Default for new clients"
        );
        assert!(!store.update(999, "Net 30", ""));
    }

    #[test]
    fn bridge_round_trips_a_payment() {
        let bridge = DocumentBridge::with_store(MemoryStore::default());
        assert!(bridge.load_payment().is_none());

        let payment = Payment {
            id: "p1".to_string(),
            invoice_no: "INV-007".to_string(),
            payment_amount: Some(rust_decimal::Decimal::new(12550, 2)),
            payment_date: "2024-03-01".to_string(),
            payment_method: "BANK_TRANSFER".to_string(),
            reference_no: "TXN-81".to_string(),
        };
        bridge.stash_payment(&payment);
        assert_eq!(bridge.load_payment(), Some(payment));
    }
}
