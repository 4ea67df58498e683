//! Gallery and Lightbox Components
//!
//! One delegated click listener on the gallery opens the overlay; the close
//! control or Escape hides it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{GALLERY_IMAGES, GALLERY_ITEM_CLASS};
use crate::store::{store_close_lightbox, store_open_lightbox, use_app_store, AppStateStoreFields};

/// Image grid; clicks on any `gallery-item` child open the lightbox
#[component]
pub fn Gallery() -> impl IntoView {
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(image) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if image.class_list().contains(GALLERY_ITEM_CLASS) {
            log::debug!("[LIGHTBOX] Open {}", image.src());
            store_open_lightbox(&store, image.src());
        }
    };

    view! {
        <section class="py-5">
            <div class="container">
                <h2 class="text-center font-serif mb-4">"Галерея"</h2>
                <div id="gallery" class="row g-3" on:click=on_click>
                    {GALLERY_IMAGES.iter().map(|(src, alt)| view! {
                        <div class="col-lg-4 col-md-6">
                            <img src=*src alt=*alt class="img-fluid rounded shadow-sm gallery-item" />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Full-screen overlay for the selected gallery image
#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let store = use_app_store();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if store.lightbox().with_untracked(|lb| lb.is_open()) {
            store.lightbox().update(|lb| lb.on_key(&ev.key()));
        }
    });
    on_cleanup(move || handle.remove());

    let display = move || if store.lightbox().read().is_open() { "block" } else { "none" };
    let src = move || store.lightbox().read().image().unwrap_or_default().to_string();

    view! {
        <div id="lightbox" class="lightbox" style:display=display>
            <span class="close-lightbox" on:click=move |_| store_close_lightbox(&store)>"×"</span>
            <img id="lightbox-img" class="lightbox-content" src=src alt="" />
        </div>
    }
}
