//! Frontend Models
//!
//! Data structures matching `menu.json` entries.

use serde::{Deserialize, Serialize};

use crate::config::CURRENCY;

/// One dish from the menu file. Cart entries are full copies of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub ingredients: Vec<String>,
    pub vegetarian: bool,
    pub spicy: bool,
    pub image: String,
}

impl MenuItem {
    /// Ingredients as printed on the dish card
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// Price with currency suffix ("120 грн", "12.5 грн")
pub fn format_price(price: f64) -> String {
    format!("{} {}", price, CURRENCY)
}

/// Find a dish by id
pub fn find_item(menu: &[MenuItem], id: u32) -> Option<&MenuItem> {
    menu.iter().find(|item| item.id == id)
}

#[cfg(test)]
pub(crate) fn make_item(id: u32, name: &str, category: &str, ingredients: &[&str], vegetarian: bool) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        price: 100.0 + id as f64,
        category: category.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        vegetarian,
        spicy: false,
        image: format!("images/{}.jpg", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_menu_entry() {
        let json = r#"{
            "id": 1,
            "name": "Borscht",
            "price": 120,
            "category": "soup",
            "ingredients": ["beet", "cabbage"],
            "vegetarian": true,
            "spicy": false,
            "image": "images/borscht.jpg"
        }"#;

        let item: MenuItem = serde_json::from_str(json).expect("valid menu entry");
        assert_eq!(item.id, 1);
        assert_eq!(item.price, 120.0);
        assert_eq!(item.ingredients_line(), "beet, cabbage");
        assert!(item.vegetarian);
        assert!(!item.spicy);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.0), "120 грн");
        assert_eq!(format_price(12.5), "12.5 грн");
    }

    #[test]
    fn test_find_item() {
        let menu = vec![
            make_item(1, "Borscht", "soup", &["beet"], true),
            make_item(2, "Steak", "main", &["beef"], false),
        ];
        assert_eq!(find_item(&menu, 2).map(|i| i.name.as_str()), Some("Steak"));
        assert!(find_item(&menu, 9).is_none());
    }
}
