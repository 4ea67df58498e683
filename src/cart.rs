//! Shopping Cart
//!
//! Ordered list of dish copies, written through to key-value storage on every change.

use serde::{Deserialize, Serialize};

use crate::browser::KeyValueStore;
use crate::config::CART_STORAGE_KEY;
use crate::error::{CartError, StorageError};
use crate::models::{find_item, format_price, MenuItem};

/// Cart contents. Serializes as a plain JSON array of menu items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<MenuItem>,
}

impl Cart {
    /// Load the cart saved under `restaurantCart`.
    ///
    /// A missing key, unreadable storage or malformed value all yield an empty cart;
    /// the bad value is replaced on the next write.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        match Self::load(store) {
            Ok(cart) => cart,
            Err(e) => {
                log::warn!("[CART] Could not restore saved cart, starting empty: {}", e);
                Self::default()
            }
        }
    }

    fn load(store: &impl KeyValueStore) -> Result<Self, StorageError> {
        match store.get_item(CART_STORAGE_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self::default()),
        }
    }

    /// Append a copy of the dish with `id`, then persist.
    ///
    /// Unknown ids are rejected without touching the cart or storage.
    pub fn add(
        &mut self,
        menu: &[MenuItem],
        id: u32,
        store: &impl KeyValueStore,
    ) -> Result<MenuItem, CartError> {
        let item = find_item(menu, id).cloned().ok_or(CartError::UnknownItem(id))?;
        self.entries.push(item.clone());

        if let Err(e) = self.persist(store) {
            log::warn!("[CART] Cart kept in memory only: {}", e);
        }
        Ok(item)
    }

    /// Overwrite the stored value with the whole cart
    pub fn persist(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        store.set_item(CART_STORAGE_KEY, &json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MenuItem] {
        &self.entries
    }

    /// Sum of all entry prices
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|item| item.price).sum()
    }

    /// Message shown when the cart button is clicked
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "Кошик порожній".to_string();
        }
        format!("У вас {} товарів на суму {}.", self.len(), format_price(self.total()))
    }
}
