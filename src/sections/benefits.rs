use std::rc::Rc;

use yew::prelude::*;

use crate::behavior::scroll_spy::SpyRule;
use crate::behavior::visibility::ActivationOptions;
use crate::components::dashboards::{CompetitionDashboard, CostDashboard, TaskDashboard};
use crate::hooks::viewport::{use_scroll_spy, use_viewport_activation};

#[derive(Clone, Copy, PartialEq)]
enum Dashboard {
    Tasks,
    Costs,
    Competition,
}

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    dashboard: Dashboard,
}

const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "⚡",
        title: "Beschleunigen Sie jeden Workflow",
        description: "Unsere Automatisierungssysteme bearbeiten Aufgaben sofort, von E-Mails über \
                      Lead-Verwaltung bis hin zum Support. Dies ermöglicht Ihrem Team, schneller zu \
                      arbeiten, konzentriert zu bleiben und ohne zusätzliche Mühe mehr zu erreichen.",
        features: [
            "Sofortige Aufgabenverarbeitung",
            "E-Mail-Automatisierung",
            "Lead-Verwaltung",
            "24/7 Support-Bearbeitung",
        ],
        dashboard: Dashboard::Tasks,
    },
    Benefit {
        icon: "💲",
        title: "Reduzieren Sie Betriebskosten",
        description: "Automatisierte Workflows eliminieren die Notwendigkeit manueller Eingaben und \
                      repetitiver Prozesse. Dies bedeutet weniger Fehler, niedrigere Gemeinkosten und \
                      mehr Raum, um in Ihr Geschäftswachstum zu reinvestieren.",
        features: [
            "Niedrigere Gemeinkosten",
            "Weniger menschliche Fehler",
            "Automatisierte Prozesse",
            "Bessere ROI",
        ],
        dashboard: Dashboard::Costs,
    },
    Benefit {
        icon: "📈",
        title: "Bleiben Sie wettbewerbsfähig",
        description: "KI-Adoption ist nicht länger optional. Unternehmen, die Automatisierung heute \
                      nutzen, werden morgen ihre Branchen anführen, während andere Gefahr laufen, \
                      zurückzubleiben.",
        features: [
            "Branchenführerschaft",
            "Zukunftssichere Lösungen",
            "Wettbewerbsvorteil",
            "Skalierbares Wachstum",
        ],
        dashboard: Dashboard::Competition,
    },
];

#[function_component(BenefitsSection)]
pub fn benefits_section() -> Html {
    let section = use_node_ref();
    let visibility = use_viewport_activation(
        section.clone(),
        ActivationOptions::threshold(0.1).with_margin("150px 0px -50px 0px"),
    );
    let items = use_memo(|_| (0..BENEFITS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let active = use_scroll_spy(items.clone(), SpyRule::ContainsMidpoint).unwrap_or(0);
    let entered = visibility.entered();
    let shown = if entered { "shown" } else { "hidden" };

    html! {
        <section ref={section} class="benefits-section">
            <div class="section-header">
                <h2 class={classes!("section-title", shown)}>
                    {"Erreichen Sie mehr"}
                    <br />
                    {"mit "}
                    <span class="accent">{"weniger Aufwand"}</span>
                </h2>
                <p class={classes!("section-subtitle", shown)}>
                    {"Ersetzen Sie repetitive Aufgaben durch KI und gewinnen Sie Zeit für echtes Wachstum. \
                      Unsere Automatisierungslösungen liefern messbare Ergebnisse vom ersten Tag an."}
                </p>
            </div>

            <div class="benefit-stack">
                { for BENEFITS.iter().enumerate().map(|(index, benefit)| {
                    let is_active = index == active;
                    let live = entered && is_active;
                    let dashboard = match benefit.dashboard {
                        Dashboard::Tasks => html! { <TaskDashboard visible={live} /> },
                        Dashboard::Costs => html! { <CostDashboard visible={live} /> },
                        Dashboard::Competition => html! { <CompetitionDashboard visible={live} /> },
                    };
                    html! {
                        <div key={index} ref={items[index].clone()} class="benefit-row">
                            <div
                                class={classes!("benefit-copy", is_active.then(|| "active"), shown)}
                                style={format!("transition-delay: {}ms;", index * 150)}
                            >
                                <div class="benefit-icon">{benefit.icon}</div>
                                <div>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.description}</p>
                                    <div class="benefit-features">
                                        { for benefit.features.iter().map(|feature| html! {
                                            <div class="benefit-feature">
                                                <span class="feature-dot"></span>
                                                <span>{*feature}</span>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                                { if is_active { html! { <div class="active-indicator"></div> } } else { html! {} } }
                            </div>
                            <div
                                class={classes!("benefit-dashboard", if is_active { "focused" } else { "dimmed" }, shown)}
                                style={format!("transition-delay: {}ms;", index * 150)}
                            >
                                { dashboard }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
