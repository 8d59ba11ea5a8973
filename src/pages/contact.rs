use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::form::ContactFormValues;
use crate::components::booking_embed::BookingEmbed;
use crate::components::contact_form::ContactForm;
use crate::config;
use crate::dom;
use crate::SiteNav;

const EXPECTATIONS: [(&str, &str, &str); 3] = [
    (
        "📊",
        "Analyse",
        "Wir analysieren Ihre aktuellen Arbeitsabläufe und identifizieren Optimierungspotenziale.",
    ),
    (
        "💡",
        "Lösungen",
        "Wir zeigen Ihnen maßgeschneiderte KI-Lösungen für Ihr Unternehmen.",
    ),
    (
        "🚀",
        "Roadmap",
        "Sie erhalten eine klare Roadmap für die Implementierung.",
    ),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let nav = use_context::<SiteNav>();
    use_title(format!("Erstgespräch buchen | {}", config::BRAND));

    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    let return_home = Callback::from(move |_: ()| {
        if let Some(nav) = &nav {
            nav.return_home.emit(());
        }
    });
    let home_click = {
        let return_home = return_home.clone();
        Callback::from(move |_: MouseEvent| return_home.emit(()))
    };

    let on_submit = Callback::from(|values: ContactFormValues| {
        log::info!(
            "inquiry from {} <{}> at {} about {}",
            values.name,
            values.email,
            values.company,
            values.service
        );
    });

    html! {
        <div class="contact-page">
            <div class="contact-home">
                <button class="home-button" onclick={home_click}>
                    <span class="home-icon">{"⌂"}</span>
                    <span>{"Startseite"}</span>
                </button>
            </div>

            <div class="contact-content">
                <div class="contact-header">
                    <span class="contact-badge">{"📅 Termin vereinbaren"}</span>
                    <h1>
                        {"Buchen Sie"}<br />{"Ihr kostenloses"}<br />
                        <span class="accent">{"Erstgespräch"}</span>
                    </h1>
                    <p>{"Bereit, Ihr Unternehmen mit KI-Automatisierung zu transformieren?"}</p>
                    <p>{"Wählen Sie einen passenden Termin und lassen Sie uns gemeinsam Ihre individuellen Anforderungen besprechen."}</p>
                </div>

                <BookingEmbed />

                <div class="expectations">
                    <h3>{"Was Sie im Erstgespräch erwartet"}</h3>
                    <div class="expectation-grid">
                        { for EXPECTATIONS.iter().map(|(icon, title, text)| html! {
                            <div class="expectation" key={*title}>
                                <div class="expectation-icon">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <ContactForm {on_submit} on_return_home={return_home} />
            </div>
        </div>
    }
}
