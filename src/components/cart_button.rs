//! Cart Button Component
//!
//! Item counter and the cart summary on click.

use leptos::prelude::*;

use crate::browser::notify;
use crate::store::{use_app_store, AppStateStoreFields};

/// Cart button with live item count
#[component]
pub fn CartButton() -> impl IntoView {
    let store = use_app_store();

    let count = move || store.cart().read().len();

    let view_cart = move |_| {
        let summary = store.cart().read_untracked().summary();
        notify(&summary);
    };

    view! {
        <button id="cartBtn" type="button" class="btn btn-warning position-relative" on:click=view_cart>
            <i class="bi bi-cart3"></i>
            <span id="cartCount" class="position-absolute top-0 start-100 translate-middle badge rounded-pill bg-danger">
                {count}
            </span>
        </button>
    }
}
