//! Booking Form Component
//!
//! Table reservation form with phone validation.

use leptos::prelude::*;

use crate::booking::{time_slots, BookingDraft, SubmitOutcome};
use crate::browser::notify;

/// Reservation form; an accepted booking is confirmed and the form cleared
#[component]
pub fn BookingForm() -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let outcome = draft.try_update(BookingDraft::validate);
        if outcome != Some(SubmitOutcome::Accepted) {
            log::debug!("[BOOKING] Rejected: invalid phone");
            return;
        }

        log::info!("[BOOKING] Table booked");
        notify("Столик заброньовано успішно!");
        draft.update(BookingDraft::reset);
    };

    let phone_class = move || {
        let marker = draft.with(|d| d.phone_marker.class());
        if marker.is_empty() {
            "form-control".to_string()
        } else {
            format!("form-control {}", marker)
        }
    };

    view! {
        <section id="booking" class="py-5 bg-light">
            <div class="container">
                <h2 class="text-center font-serif mb-4">"Бронювання столика"</h2>
                <form id="bookingForm" class="row g-3 justify-content-center" novalidate on:submit=on_submit>
                    <div class="col-md-6">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Ваше ім'я"
                            required
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                            }
                        />
                    </div>
                    <div class="col-md-6">
                        <input
                            id="phoneInput"
                            type="tel"
                            class=phone_class
                            placeholder="+380 50 123 45 67"
                            required
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.phone = value);
                            }
                        />
                        <div class="invalid-feedback">"Введіть коректний номер телефону"</div>
                    </div>
                    <div class="col-md-4">
                        <input
                            type="date"
                            class="form-control"
                            required
                            prop:value=move || draft.with(|d| d.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.date = value);
                            }
                        />
                    </div>
                    <div class="col-md-4">
                        <select
                            id="timeInput"
                            class="form-select"
                            required
                            prop:value=move || draft.with(|d| d.time.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.time = value);
                            }
                        >
                            <option value="" disabled selected>"Час"</option>
                            {time_slots().into_iter().map(|slot| view! {
                                <option value=slot.clone()>{slot.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="col-md-4">
                        <input
                            type="number"
                            class="form-control"
                            min="1"
                            max="20"
                            placeholder="Гостей"
                            prop:value=move || draft.with(|d| d.guests.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.guests = value);
                            }
                        />
                    </div>
                    <div class="col-12 text-center">
                        <button type="submit" class="btn btn-dark px-5">"Забронювати"</button>
                    </div>
                </form>
            </div>
        </section>
    }
}
