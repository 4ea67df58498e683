//! Menu Grid Component
//!
//! One card per dish, or a single "nothing found" line.

use leptos::prelude::*;

use crate::browser::notify;
use crate::models::{format_price, MenuItem};
use crate::store::{store_add_to_cart, use_app_store};

/// Cards for `items`, in order
#[component]
pub fn MenuGrid(#[prop(into)] items: Signal<Vec<MenuItem>>) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|items| !items.is_empty())
            fallback=|| view! { <p class="text-center">"Нічого не знайдено"</p> }
        >
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| view! { <DishCard item=item /> }
            />
        </Show>
    }
}

/// Single dish card with its own add-to-cart listener
#[component]
fn DishCard(item: MenuItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let add_to_cart = move |_| match store_add_to_cart(&store, id) {
        Ok(added) => {
            log::debug!("[CART] Added #{} {}", added.id, added.name);
            notify(&format!("{} додано до кошика!", added.name));
        }
        Err(e) => log::warn!("[CART] {}", e),
    };

    let ingredients = item.ingredients_line();
    let price = format_price(item.price);

    view! {
        <div class="col-lg-4 col-md-6 fade-in">
            <div class="card h-100 dish-card border-0 shadow-sm">
                <img
                    src=item.image.clone()
                    class="card-img-top"
                    alt=item.name.clone()
                    style="height: 200px; object-fit: cover;"
                />
                <div class="card-body text-center">
                    <h5 class="card-title font-serif">
                        {item.name.clone()}
                        {item.vegetarian.then(|| view! {
                            <span class="badge bg-success ms-1" title="Вегетаріанське"><i class="bi bi-leaf"></i></span>
                        })}
                        {item.spicy.then(|| view! {
                            <span class="badge bg-danger ms-1" title="Гостре"><i class="bi bi-fire"></i></span>
                        })}
                    </h5>
                    <p class="card-text text-muted small">{ingredients}</p>
                    <h5 class="text-warning fw-bold">{price}</h5>
                    <button class="btn btn-outline-dark btn-sm mt-2" on:click=add_to_cart>
                        "В кошик " <i class="bi bi-cart-plus"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use reactive_stores::Store;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use crate::filter::MenuFilter;
    use crate::models::make_item;
    use crate::store::AppState;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_grid(items: Vec<MenuItem>) -> web_sys::HtmlElement {
        let container = document().create_element("div").unwrap().unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();
        let handle = leptos::mount::mount_to(container.clone(), move || {
            provide_context(Store::new(AppState::default()));
            view! { <MenuGrid items=Signal::stored(items) /> }
        });
        // Keep the view mounted for the rest of the test
        std::mem::forget(handle);
        container
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            make_item(1, "Borscht", "soup", &["beet", "cabbage"], true),
            make_item(2, "Chicken Soup", "soup", &["chicken"], false),
            make_item(3, "Greek Salad", "salad", &["tomato", "feta"], true),
            make_item(4, "Ribeye", "main", &["beef"], false),
        ]
    }

    #[wasm_bindgen_test]
    fn renders_one_card_per_filtered_item() {
        let filter = MenuFilter { vegetarian_only: true, ..Default::default() };
        let filtered = filter.apply(&sample_menu());
        let expected = filtered.len() as u32;

        let container = mount_grid(filtered);

        let cards = container.query_selector_all(".dish-card").unwrap();
        assert_eq!(cards.length(), expected);
        let text = container.text_content().unwrap_or_default();
        assert!(text.contains("Borscht"));
        assert!(text.contains("Greek Salad"));
        assert!(!text.contains("Ribeye"));
        assert!(text.contains("beet, cabbage"));
    }

    #[wasm_bindgen_test]
    fn empty_list_renders_fallback() {
        let container = mount_grid(Vec::new());

        assert_eq!(container.query_selector_all(".dish-card").unwrap().length(), 0);
        assert_eq!(container.text_content().unwrap_or_default(), "Нічого не знайдено");
    }
}
