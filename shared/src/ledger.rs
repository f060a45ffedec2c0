//! In-memory ledger of invoice line items.
//!
//! Quantity and rate arrive as free-text input; anything that does not parse
//! as a positive quantity or a non-negative rate is rejected with a
//! field-level message instead of being coerced.

use rust_decimal::Decimal;

use crate::LineItem;

pub const MSG_ITEM_NAME: &str = "Item name is required.";
pub const MSG_QTY: &str = "Valid quantity is required.";
pub const MSG_RATE: &str = "Valid rate is required.";
pub const MSG_NO_ROW: &str = "No item at the selected row.";

/// Field-level validation errors for one line-item entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemErrors {
    pub item_name: Option<&'static str>,
    pub qty: Option<&'static str>,
    pub rate: Option<&'static str>,
}

impl ItemErrors {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.qty.is_none() && self.rate.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemLedger {
    items: Vec<LineItem>,
}

impl ItemLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items loaded from an existing invoice (edit flow).
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Validate and append a new item; amount is qty x rate.
    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        qty_text: &str,
        rate_text: &str,
    ) -> Result<&LineItem, ItemErrors> {
        let (name, qty, rate) = parse_entry(name, qty_text, rate_text)?;
        let item = LineItem {
            id: self.next_id(),
            item_name: name,
            description: optional(description),
            qty,
            rate,
            amount: qty * rate,
        };
        self.items.push(item);
        Ok(self.items.last().expect("just pushed"))
    }

    /// Replace the item at `index`, preserving its id and recomputing amount.
    pub fn update(
        &mut self,
        index: usize,
        name: &str,
        description: &str,
        qty_text: &str,
        rate_text: &str,
    ) -> Result<&LineItem, ItemErrors> {
        let (name, qty, rate) = parse_entry(name, qty_text, rate_text)?;
        let id = match self.items.get(index) {
            Some(existing) => existing.id,
            None => {
                return Err(ItemErrors {
                    item_name: Some(MSG_NO_ROW),
                    ..ItemErrors::default()
                });
            }
        };
        self.items[index] = LineItem {
            id,
            item_name: name,
            description: optional(description),
            qty,
            rate,
            amount: qty * rate,
        };
        Ok(&self.items[index])
    }

    /// Remove the item at `index`. Callers gate this behind a confirm step;
    /// once called there is no undo.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Sum of all item amounts.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    fn next_id(&self) -> i64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}

fn parse_entry(
    name: &str,
    qty_text: &str,
    rate_text: &str,
) -> Result<(String, Decimal, Decimal), ItemErrors> {
    let name = name.trim();
    let qty = parse_decimal(qty_text).filter(|q| *q > Decimal::ZERO);
    let rate = parse_decimal(rate_text).filter(|r| *r >= Decimal::ZERO);

    let errors = ItemErrors {
        item_name: (name.is_empty()).then_some(MSG_ITEM_NAME),
        qty: qty.is_none().then_some(MSG_QTY),
        rate: rate.is_none().then_some(MSG_RATE),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok((name.to_string(), qty.unwrap(), rate.unwrap()))
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str_exact(trimmed).ok()
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn amount_is_qty_times_rate() {
        let mut ledger = ItemLedger::new();
        let item = ledger.add("Consulting", "", "3", "120.50").unwrap();
        assert_eq!(item.amount, dec("361.50"));
    }

    #[test]
    fn total_tracks_adds_updates_and_removes() {
        let mut ledger = ItemLedger::new();
        ledger.add("Design", "", "2", "50.00").unwrap();
        ledger.add("Review", "", "1", "25.50").unwrap();
        assert_eq!(ledger.total(), dec("125.50"));

        ledger.update(0, "Design", "", "4", "50.00").unwrap();
        assert_eq!(ledger.total(), dec("225.50"));

        ledger.remove(1);
        assert_eq!(ledger.total(), dec("200.00"));

        ledger.remove(0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Decimal::ZERO);
    }

    #[test]
    fn blank_name_is_rejected_field_level() {
        let mut ledger = ItemLedger::new();
        let errors = ledger.add("   ", "", "1", "10").unwrap_err();
        assert_eq!(errors.item_name, Some(MSG_ITEM_NAME));
        assert_eq!(errors.qty, None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_negative_or_garbage_qty_is_rejected() {
        let mut ledger = ItemLedger::new();
        for qty in ["0", "-2", "abc", ""] {
            let errors = ledger.add("Thing", "", qty, "10").unwrap_err();
            assert_eq!(errors.qty, Some(MSG_QTY), "qty input {qty:?}");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn rate_zero_is_allowed_negative_is_not() {
        let mut ledger = ItemLedger::new();
        assert!(ledger.add("Gratis", "", "1", "0").is_ok());
        let errors = ledger.add("Bad", "", "1", "-5").unwrap_err();
        assert_eq!(errors.rate, Some(MSG_RATE));
    }

    #[test]
    fn ids_are_monotonic_max_plus_one() {
        let mut ledger = ItemLedger::new();
        ledger.add("A", "", "1", "1").unwrap();
        ledger.add("B", "", "1", "1").unwrap();
        assert_eq!(ledger.items()[0].id, 1);
        assert_eq!(ledger.items()[1].id, 2);

        // Removing the first item must not recycle its id for the next add.
        ledger.remove(0);
        ledger.add("C", "", "1", "1").unwrap();
        assert_eq!(ledger.items()[1].id, 3);
    }

    #[test]
    fn update_preserves_id_and_recomputes_amount() {
        let mut ledger = ItemLedger::new();
        ledger.add("A", "first pass", "2", "10").unwrap();
        let before = ledger.items()[0].id;

        let updated = ledger.update(0, "A", "", "5", "9.90").unwrap();
        assert_eq!(updated.id, before);
        assert_eq!(updated.amount, dec("49.50"));
        assert_eq!(updated.description, None);
    }

    #[test]
    fn update_out_of_range_reports_no_row() {
        let mut ledger = ItemLedger::new();
        let errors = ledger.update(3, "A", "", "1", "1").unwrap_err();
        assert_eq!(errors.item_name, Some(MSG_NO_ROW));
    }

    #[test]
    fn description_is_trimmed_to_option() {
        let mut ledger = ItemLedger::new();
        let item = ledger.add("A", "  design work  ", "1", "1").unwrap();
        assert_eq!(item.description.as_deref(), Some("design work"));
    }
}
