//! Restaurant Page App
//!
//! Builds the page state, loads the menu once and lays out the sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::components::{BookingForm, Gallery, LightboxOverlay, MenuSection, SiteHeader};
use crate::store::{store_menu_failed, store_set_menu, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Load menu on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match browser::fetch_menu().await {
                Ok(items) => {
                    log::info!("[MENU] Loaded {} items", items.len());
                    store_set_menu(&store, items);
                }
                Err(e) => {
                    log::error!("[MENU] {}", e);
                    store_menu_failed(&store);
                }
            }
        });
    });

    view! {
        <SiteHeader />
        <main>
            <MenuSection />
            <BookingForm />
            <Gallery />
        </main>
        <LightboxOverlay />
    }
}
