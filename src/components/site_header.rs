//! Site Header Component

use leptos::prelude::*;

use crate::components::CartButton;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark sticky-top">
            <div class="container">
                <a class="navbar-brand font-serif" href="#">"Смачна Хата"</a>
                <div class="d-flex align-items-center gap-3">
                    <a class="nav-link text-light" href="#menu">"Меню"</a>
                    <a class="nav-link text-light" href="#booking">"Бронювання"</a>
                    <CartButton />
                </div>
            </div>
        </nav>
    }
}
