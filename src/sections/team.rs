use yew::prelude::*;

use crate::behavior::visibility::ActivationOptions;
use crate::components::rotating_text::RotatingText;
use crate::config;
use crate::hooks::viewport::use_viewport_activation;
use crate::SiteNav;

struct Member {
    name: &'static str,
    role: &'static str,
    initial: &'static str,
    description: &'static str,
}

const MEMBERS: [Member; 2] = [
    Member {
        name: "Elia",
        role: "Projektleitung",
        initial: "E",
        description: "Analysiert Ihre Unternehmensprozesse, um die passenden Lösungen zu identifizieren. \
                      Elia stellt sicher, dass unsere Technologie exakt auf Ihre strategischen Ziele einzahlt.",
    },
    Member {
        name: "Lis",
        role: "Automation Engineer",
        initial: "L",
        description: "Verantwortlich für die technische Architektur und System-Integration. Lis übersetzt \
                      Ihre geschäftlichen Anforderungen in effizienten, fehlerfreien Code und automatisierte \
                      Workflows.",
    },
];

const TAGLINE_WORDS: [&str; 3] = ["Erfolg", "Zukunft", "Innovation"];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let nav = use_context::<SiteNav>();
    let section = use_node_ref();
    let visibility = use_viewport_activation(section.clone(), ActivationOptions::threshold(0.2));
    let shown = if visibility.entered() { "shown" } else { "hidden" };
    let words: Vec<AttrValue> = TAGLINE_WORDS.iter().copied().map(AttrValue::Static).collect();

    let contact_team = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &nav {
            nav.show_contact.emit(());
        }
    });

    html! {
        <section id="team" ref={section} class="team-section">
            <div class={classes!("section-header", shown)}>
                <h2 class="section-title">
                    {"Das Team"}<br />{"hinter Ihrem"}<br />
                    <RotatingText words={words} period_ms={config::TEAM_WORD_PERIOD_MS} class={classes!("accent")} />
                </h2>
            </div>

            <div class="team-grid">
                { for MEMBERS.iter().enumerate().map(|(index, member)| html! {
                    <div
                        key={member.name}
                        class={classes!("team-card", shown)}
                        style={format!("transition-delay: {}ms;", index * 100)}
                    >
                        <div class="team-avatar">{member.initial}</div>
                        <h3>{member.name}</h3>
                        <span class="team-role">{member.role}</span>
                        <p>{member.description}</p>
                    </div>
                }) }
            </div>

            <div class={classes!("team-cta", shown)}>
                <button class="cta-button glass" onclick={contact_team}>
                    {"Kontaktieren Sie unser Team"}
                </button>
            </div>
        </section>
    }
}
