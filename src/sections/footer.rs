use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::behavior::visibility::ActivationOptions;
use crate::components::chat_button::{ChatButton, ChatVariant};
use crate::config;
use crate::hooks::viewport::use_viewport_activation;

#[function_component(Footer)]
pub fn footer() -> Html {
    let section = use_node_ref();
    let visibility = use_viewport_activation(section.clone(), ActivationOptions::threshold(0.3));
    let shown = if visibility.entered() { "shown" } else { "hidden" };
    let year = Utc::now().year();

    html! {
        <footer ref={section} class="site-footer">
            <div class={classes!("footer-main", shown)}>
                <div class="footer-company">
                    <h3 class="footer-brand">{config::BRAND}</h3>
                    <p>
                        {"Wir transformieren Unternehmen mit modernsten KI-Automatisierungslösungen. \
                          Wir helfen Firmen, ihre Abläufe zu optimieren, die Effizienz zu steigern und \
                          grenzenlos zu skalieren."}
                    </p>
                </div>
                <div class="footer-contact">
                    <a class="footer-contact-line" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        <span class="footer-icon">{"✉"}</span>
                        <span>{config::CONTACT_EMAIL}</span>
                    </a>
                    <div class="footer-contact-line">
                        <span class="footer-icon">{"📍"}</span>
                        <span>{config::LOCATION}</span>
                    </div>
                    <ChatButton variant={ChatVariant::Mobile} class={classes!("mobile-only")} />
                </div>
            </div>

            <div class={classes!("footer-bottom", shown)}>
                <span>{format!("© {year} {}. Alle Rechte vorbehalten.", config::BRAND)}</span>
                <div class="footer-legal">
                    <span>{"Datenschutz"}</span>
                    <span>{"Nutzungsbedingungen"}</span>
                    <span>{"Cookie-Richtlinie"}</span>
                </div>
            </div>
        </footer>
    }
}
