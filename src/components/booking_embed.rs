use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::widgets::cal::{self, Booking};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum EmbedStatus {
    Loading,
    Ready,
    Failed,
}

/// Inline scheduling calendar for the first call.
#[function_component(BookingEmbed)]
pub fn booking_embed() -> Html {
    let status = use_state_eq(|| EmbedStatus::Loading);
    let is_mounted = use_is_mounted();

    {
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let outcome = cal::mount_inline(Booking::default()).await;
                    if !is_mounted() {
                        return;
                    }
                    match outcome {
                        Ok(()) => {
                            log::debug!("booking embed loaded");
                            status.set(EmbedStatus::Ready);
                        }
                        Err(err) => {
                            log::error!("booking embed unavailable: {err}");
                            status.set(EmbedStatus::Failed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div class="booking-frame">
            {
                match *status {
                    EmbedStatus::Loading => html! {
                        <div class="booking-placeholder">
                            <div class="spinner"></div>
                            <p>{"Kalender wird geladen..."}</p>
                        </div>
                    },
                    EmbedStatus::Failed => html! {
                        <div class="booking-placeholder">
                            <p>{"Der Kalender konnte nicht geladen werden."}</p>
                            <p>
                                {"Schreiben Sie uns an "}
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </p>
                        </div>
                    },
                    EmbedStatus::Ready => html! {},
                }
            }
            <div id={config::CAL_CONTAINER_ID} class="booking-container"></div>
        </div>
    }
}
