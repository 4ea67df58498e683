//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{KeyValueStore, LocalStorage};
use crate::cart::Cart;
use crate::error::CartError;
use crate::lightbox::Lightbox;
use crate::models::MenuItem;

/// Where the menu load stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MenuStatus {
    /// Fetch in flight, nothing rendered yet
    #[default]
    Loading,
    Ready,
    /// Fetch failed; the menu stays empty
    Failed,
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Dishes loaded from menu.json
    pub menu: Vec<MenuItem>,
    pub menu_status: MenuStatus,
    /// Cart, mirrored to localStorage
    pub cart: Cart,
    pub lightbox: Lightbox,
}

impl AppState {
    /// Initial state with the cart restored from localStorage
    pub fn new() -> Self {
        let cart = Cart::restore(&LocalStorage);
        log::info!("[CART] Restored {} item(s)", cart.len());
        Self {
            cart,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install the loaded menu
pub fn store_set_menu(store: &AppStore, items: Vec<MenuItem>) {
    store.menu().set(items);
    store.menu_status().set(MenuStatus::Ready);
}

/// Record a failed menu load; the menu stays empty
pub fn store_menu_failed(store: &AppStore) {
    store.menu().set(Vec::new());
    store.menu_status().set(MenuStatus::Failed);
}

/// Add a dish to the cart by id (persisted on success)
pub fn store_add_to_cart(store: &AppStore, id: u32) -> Result<MenuItem, CartError> {
    store_add_to_cart_in(store, id, &LocalStorage)
}

/// Add to cart, writing through to `storage`
pub fn store_add_to_cart_in(
    store: &AppStore,
    id: u32,
    storage: &impl KeyValueStore,
) -> Result<MenuItem, CartError> {
    let menu = store.menu().get_untracked();
    store.cart().write().add(&menu, id, storage)
}

/// Show an image in the lightbox
pub fn store_open_lightbox(store: &AppStore, src: String) {
    store.lightbox().write().open(src);
}

pub fn store_close_lightbox(store: &AppStore) {
    store.lightbox().write().close();
}
