use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::chat_button::{ChatButton, ChatVariant};
use crate::dom;
use crate::SiteNav;

const ENTRANCE_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or(AttrValue::from("Automatisieren Sie"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("Ihr Unternehmen"))]
    pub highlight: AttrValue,
    #[prop_or(AttrValue::from(
        "Transformieren Sie Ihr Unternehmen mit modernsten Automations-Lösungen. \
         Speziell entwickelt für Schweizer Standards, um Prozesse zu beschleunigen, \
         Effizienz zu steigern und nachhaltiges Wachstum zu sichern."
    ))]
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::from("Jetzt Starten"))]
    pub primary_label: AttrValue,
    #[prop_or(AttrValue::from("Demo ansehen"))]
    pub secondary_label: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let nav = use_context::<SiteNav>();
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ENTRANCE_DELAY_MS, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let show_contact = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &nav {
            nav.show_contact.emit(());
        }
    });
    let scroll_to_demo = Callback::from(|_: MouseEvent| dom::scroll_to_section("demo"));

    let stage = |delay: &'static str| {
        classes!("hero-stage", delay, if *entered { "stage-in" } else { "stage-out" })
    };

    html! {
        <section class="hero-section">
            <div class="hero-backdrop">
                <div class="hero-orb orb-a"></div>
                <div class="hero-orb orb-b"></div>
                <div class="hero-orb orb-c"></div>
            </div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <h1 class={stage("delay-0")}>
                        <span class="hero-title">{&props.title}</span>
                        <br />
                        <span class="hero-highlight">
                            {&props.highlight}
                            <span class="hero-underline"></span>
                        </span>
                    </h1>
                    <p class={stage("delay-300")}>{&props.subtitle}</p>

                    <div class={classes!(stage("delay-500"), "hero-actions")}>
                        <button class="cta-button" onclick={show_contact}>
                            {&props.primary_label}
                            <span class="cta-arrow">{"→"}</span>
                        </button>
                        <button class="cta-button outline" onclick={scroll_to_demo}>
                            <span class="cta-play">{"▶"}</span>
                            {&props.secondary_label}
                        </button>
                    </div>

                    <div class={classes!(stage("delay-700"), "hero-stats")}>
                        <div class="hero-stat">
                            <div class="hero-stat-value"><AnimatedCounter end={80} suffix="%" /></div>
                            <div class="hero-stat-label">{"Mehr Effizienz"}</div>
                        </div>
                        <div class="hero-stat">
                            <div class="hero-stat-value">{"24/7"}</div>
                            <div class="hero-stat-label">{"Immer verfügbar"}</div>
                        </div>
                    </div>
                </div>

                <div class={classes!(stage("delay-300"), "hero-visual")}>
                    <div class="ai-chip">
                        <div class="ai-chip-core">{"AI"}</div>
                        { for (0..8).map(|i| html! {
                            <span key={i} class="ai-chip-trace" style={format!("transform: rotate({}deg);", i * 45)}></span>
                        }) }
                    </div>
                    <ChatButton variant={ChatVariant::HeroDesktop} />
                </div>
            </div>
        </section>
    }
}
