//! Catalog
//!
//! The meals currently on screen for the chosen area, together with the
//! customer's raw quantity inputs. Quantities are keyed by meal id so a
//! reloaded catalog starts from a clean slate and edits never bleed across
//! rows.

use std::collections::HashMap;

use crate::model::{CatalogEntry, OrderItem};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    quantities: HashMap<String, String>,
}

impl Catalog {
    /// Swaps in a freshly fetched catalog, dropping all quantity inputs.
    pub fn replace(&mut self, entries: Vec<CatalogEntry>) {
        self.quantities.clear();
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw quantity text for a meal, as last typed; "0" if untouched.
    pub fn quantity_raw(&self, meal_id: &str) -> &str {
        self.quantities.get(meal_id).map_or("0", String::as_str)
    }

    pub fn set_quantity(&mut self, meal_id: &str, raw: String) {
        self.quantities.insert(meal_id.to_string(), raw);
    }

    /// Line items for an order: every catalog entry whose quantity parses to
    /// a positive integer, in catalog order. Unparseable or out-of-range
    /// input counts as zero.
    pub fn line_items(&self) -> Vec<OrderItem> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let quantity = parse_quantity(self.quantity_raw(&entry.meal_id));
                if quantity == 0 {
                    return None;
                }
                Some(OrderItem {
                    meal_id: entry.meal_id.clone(),
                    name: entry.dish_name.clone(),
                    price: entry.price,
                    prep_time_minutes: entry.prep_time_minutes,
                    quantity,
                })
            })
            .collect()
    }
}

fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> CatalogEntry {
        CatalogEntry {
            meal_id: "m1".to_string(),
            restaurant_name: "Corner Deli".to_string(),
            dish_name: "Soup".to_string(),
            description: "Tomato, basil".to_string(),
            prep_time_minutes: 10,
            price: 5.0,
        }
    }

    fn salad() -> CatalogEntry {
        CatalogEntry {
            meal_id: "m2".to_string(),
            restaurant_name: "Corner Deli".to_string(),
            dish_name: "Salad".to_string(),
            description: "Greens".to_string(),
            prep_time_minutes: 5,
            price: 4.5,
        }
    }

    #[test]
    fn test_replace_keeps_entry_order() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![salad(), soup()]);

        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.meal_id.as_str()).collect();
        assert_eq!(ids, ["m2", "m1"]);
    }

    #[test]
    fn test_replace_resets_quantities() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);
        catalog.set_quantity("m1", "3".to_string());

        catalog.replace(vec![soup()]);
        assert_eq!(catalog.quantity_raw("m1"), "0");
        assert!(catalog.line_items().is_empty());
    }

    #[test]
    fn test_quantity_defaults_to_zero_text() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);
        assert_eq!(catalog.quantity_raw("m1"), "0");
    }

    #[test]
    fn test_line_items_carry_meal_fields() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);
        catalog.set_quantity("m1", "2".to_string());

        assert_eq!(
            catalog.line_items(),
            vec![OrderItem {
                meal_id: "m1".to_string(),
                name: "Soup".to_string(),
                price: 5.0,
                prep_time_minutes: 10,
                quantity: 2,
            }]
        );
    }

    #[test]
    fn test_line_items_follow_catalog_order() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![salad(), soup()]);
        catalog.set_quantity("m1", "1".to_string());
        catalog.set_quantity("m2", "4".to_string());

        let ids: Vec<String> = catalog.line_items().into_iter().map(|i| i.meal_id).collect();
        assert_eq!(ids, ["m2", "m1"]);
    }

    #[test]
    fn test_line_items_skip_zero_and_junk_quantities() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup(), salad()]);
        catalog.set_quantity("m1", "0".to_string());
        catalog.set_quantity("m2", "abc".to_string());
        assert!(catalog.line_items().is_empty());

        catalog.set_quantity("m1", "-1".to_string());
        catalog.set_quantity("m2", "".to_string());
        assert!(catalog.line_items().is_empty());
    }

    #[test]
    fn test_line_items_skip_quantities_past_u32_range() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);

        // 2^32 + 1 must not wrap into a tiny order
        catalog.set_quantity("m1", "4294967297".to_string());
        assert!(catalog.line_items().is_empty());
    }

    #[test]
    fn test_line_items_ignore_quantities_for_absent_meals() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);
        catalog.set_quantity("ghost", "5".to_string());

        assert!(catalog.line_items().is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut catalog = Catalog::default();
        catalog.replace(vec![soup()]);
        catalog.set_quantity("m1", "2".to_string());

        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.line_items().is_empty());
        assert_eq!(catalog.quantity_raw("m1"), "0");
    }

    #[test]
    fn test_parse_quantity_variants() {
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity(" 2 "), 2);
        assert_eq!(parse_quantity("2.5"), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("4294967297"), 0);
    }
}
