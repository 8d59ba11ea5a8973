use yew::prelude::*;

use crate::behavior::scroll_spy::SpyRule;
use crate::behavior::visibility::ActivationOptions;
use crate::dom;
use crate::hooks::viewport::{use_scroll_spy, use_viewport_activation};
use crate::SiteNav;

struct Agent {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const AGENTS: [Agent; 2] = [
    Agent {
        id: "support",
        name: "Support Chatbot",
        icon: "💬",
        description: "Intelligenter KI-Assistent, der 24/7 Kundensupport mit natürlicher \
                      Sprachverarbeitung und kontextabhängigen Antworten bereitstellt.",
        features: [
            "Natürliche Sprachverarbeitung",
            "Mehrsprachige Unterstützung",
            "Sentimentanalyse",
            "Eskalation an menschliche Mitarbeiter",
        ],
    },
    Agent {
        id: "voice",
        name: "Voice Agent",
        icon: "🤖",
        description: "Fortgeschrittene Voice-KI, die Telefonanrufe mit menschenähnlichen \
                      Gesprächsfähigkeiten und Echtzeit-Antwortgenerierung verarbeitet.",
        features: [
            "Natürliche Sprachsynthese",
            "Echtzeit-Gespräch",
            "Anrufweiterleitung und -übertragung",
            "Sprachanalysen",
        ],
    },
];

/// Agent cards. Narrow screens highlight the card nearest the viewport
/// center, wider ones the hovered card.
#[function_component(DemoSection)]
pub fn demo_section() -> Html {
    let nav = use_context::<SiteNav>();
    let section = use_node_ref();
    let visibility = use_viewport_activation(section.clone(), ActivationOptions::threshold(0.3));
    let cards = use_memo(|_| (0..AGENTS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let nearest = use_scroll_spy(cards.clone(), SpyRule::NearestCenter);
    let hovered = use_state_eq(|| None::<usize>);

    let active = if dom::is_mobile() { nearest } else { *hovered };
    let shown = if visibility.entered() { "shown" } else { "hidden" };

    let request_demo = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &nav {
            nav.show_contact.emit(());
        }
    });

    html! {
        <section id="demo" ref={section} class="demo-section">
            <div class={classes!("section-header", shown)}>
                <h2 class="section-title">
                    {"Erleben Sie die Kraft der "}
                    <span class="accent">{"KI-Automatisierung"}</span>
                </h2>
                <p class="section-subtitle">
                    {"Sehen Sie unsere KI-Agenten in Aktion mit Echtzeit-Fähigkeiten, die die Art und Weise \
                      verändern, wie Unternehmen tätig sind, kommunizieren und wachsen."}
                </p>
            </div>

            <div class="agent-grid">
                { for AGENTS.iter().enumerate().map(|(index, agent)| {
                    let enter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| {
                            if !dom::is_mobile() {
                                hovered.set(Some(index));
                            }
                        })
                    };
                    let leave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| {
                            if !dom::is_mobile() {
                                hovered.set(None);
                            }
                        })
                    };
                    html! {
                        <div
                            key={agent.id}
                            ref={cards[index].clone()}
                            class={classes!("agent-card", (active == Some(index)).then(|| "active"), shown)}
                            style={format!("transition-delay: {}ms;", index * 200)}
                            onmouseenter={enter}
                            onmouseleave={leave}
                        >
                            <div class="agent-icon">{agent.icon}</div>
                            <h3>{agent.name}</h3>
                            <p>{agent.description}</p>
                            <ul class="agent-features">
                                { for agent.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✓"}</span>{*feature}</li>
                                }) }
                            </ul>
                            <button class="cta-button" onclick={request_demo.clone()}>
                                {"Demo anfragen"}
                                <span class="cta-arrow">{"→"}</span>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
