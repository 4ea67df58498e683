//! Menu Filters Component
//!
//! Search box, vegetarian toggle and mutually exclusive category buttons.

use leptos::prelude::*;

use crate::config::CATEGORIES;
use crate::filter::MenuFilter;

/// Filter inputs; every change rewrites the shared filter signal
#[component]
pub fn MenuFilters(
    filter: ReadSignal<MenuFilter>,
    set_filter: WriteSignal<MenuFilter>,
) -> impl IntoView {
    view! {
        <div class="menu-filters mb-4">
            <div class="row g-3 align-items-center mb-3">
                <div class="col-md-8">
                    <input
                        id="searchInput"
                        type="search"
                        class="form-control"
                        placeholder="Пошук страви або інгредієнта..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.search = value);
                        }
                    />
                </div>
                <div class="col-md-4">
                    <div class="form-check form-switch">
                        <input
                            id="vegFilter"
                            type="checkbox"
                            class="form-check-input"
                            prop:checked=move || filter.with(|f| f.vegetarian_only)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                set_filter.update(|f| f.vegetarian_only = checked);
                            }
                        />
                        <label class="form-check-label" for="vegFilter">"Тільки вегетаріанське"</label>
                    </div>
                </div>
            </div>

            <div class="category-buttons d-flex flex-wrap gap-2 justify-content-center">
                {CATEGORIES.iter().map(|(value, label)| {
                    let val = value.to_string();
                    let val_clone = val.clone();
                    let is_active = move || filter.with(|f| f.category == val);
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "btn btn-outline-dark category-btn active" } else { "btn btn-outline-dark category-btn" }
                            data-category=*value
                            on:click=move |_| {
                                let category = val_clone.clone();
                                set_filter.update(|f| f.category = category);
                            }
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
