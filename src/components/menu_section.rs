//! Menu Section Component
//!
//! Filter bar plus the dish grid, driven by the loaded menu.

use leptos::prelude::*;

use crate::components::{MenuFilters, MenuGrid};
use crate::filter::MenuFilter;
use crate::store::{use_app_store, AppStateStoreFields, MenuStatus};

/// Menu heading, filters and results
#[component]
pub fn MenuSection() -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(MenuFilter::default());

    // Recomputed whenever the menu or any filter input changes
    let filtered = Memo::new(move |_| filter.with(|f| f.apply(&store.menu().read())));

    view! {
        <section id="menu" class="py-5">
            <div class="container">
                <h2 class="text-center font-serif mb-4">"Наше меню"</h2>

                <MenuFilters filter=filter set_filter=set_filter />

                <div id="menu-container" class="row g-4">
                    {move || match store.menu_status().get() {
                        MenuStatus::Loading => ().into_any(),
                        MenuStatus::Failed => view! {
                            <p class="text-center text-danger">"Не вдалося завантажити меню :("</p>
                        }.into_any(),
                        MenuStatus::Ready => view! {
                            <MenuGrid items=filtered />
                        }.into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use reactive_stores::Store;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use crate::models::make_item;
    use crate::store::{store_menu_failed, store_set_menu, AppState};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_section(setup: impl FnOnce(&crate::store::AppStore) + 'static) -> web_sys::HtmlElement {
        let container = document().create_element("div").unwrap().unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();
        let handle = leptos::mount::mount_to(container.clone(), move || {
            let store = Store::new(AppState::default());
            setup(&store);
            provide_context(store);
            view! { <MenuSection /> }
        });
        // Keep the view mounted for the rest of the test
        std::mem::forget(handle);
        container
    }

    #[wasm_bindgen_test]
    fn failed_load_shows_inline_error() {
        let container = mount_section(store_menu_failed);

        let menu = container.query_selector("#menu-container").unwrap().expect("menu container");
        assert_eq!(menu.text_content().unwrap_or_default(), "Не вдалося завантажити меню :(");
        assert_eq!(container.query_selector_all(".dish-card").unwrap().length(), 0);
    }

    #[wasm_bindgen_test]
    fn loaded_menu_renders_all_cards() {
        let container = mount_section(|store| {
            store_set_menu(store, vec![
                make_item(1, "Borscht", "soup", &["beet", "cabbage"], true),
                make_item(2, "Ribeye", "main", &["beef"], false),
            ]);
        });

        assert_eq!(container.query_selector_all(".dish-card").unwrap().length(), 2);
    }

    #[wasm_bindgen_test]
    fn loading_menu_renders_nothing() {
        let container = mount_section(|_| {});

        let menu = container.query_selector("#menu-container").unwrap().expect("menu container");
        assert_eq!(menu.text_content().unwrap_or_default(), "");
    }
}
