use yew::prelude::*;

use crate::behavior::visibility::ActivationOptions;
use crate::hooks::viewport::use_viewport_activation;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Analyse & Strategie",
        description: "Wir analysieren Ihre aktuellen Arbeitsabläufe, um Automatisierungsmöglichkeiten \
                      zu identifizieren und eine umfassende, auf Ihre Geschäftsziele zugeschnittene \
                      Strategie zu entwickeln.",
        features: [
            "Workflow-Analyse",
            "Identifikation von Schwachstellen",
            "Maßgeschneiderte Automatisierungsstrategie",
            "ROI-Bewertung & Planung",
        ],
    },
    Step {
        number: "02",
        title: "Entwicklung & Integration",
        description: "Wir entwickeln und integrieren KI-Lösungen in Ihre bestehenden Systeme mit \
                      minimaler Beeinträchtigung Ihrer Betriebsabläufe.",
        features: [
            "Maßgeschneiderte KI-Entwicklung",
            "Systemintegration",
            "Datenmigration & Einrichtung",
            "Testing & Validierung",
        ],
    },
    Step {
        number: "03",
        title: "Launch & Optimierung",
        description: "Wir setzen Ihre Automatisierungslösungen ein und bieten kontinuierliche \
                      Optimierung, um maximale Effizienz und ROI zu gewährleisten.",
        features: [
            "Go-Live Support",
            "Performance-Monitoring",
            "Kontinuierliche Optimierung",
            "Schulung & Dokumentation",
        ],
    },
];

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let section = use_node_ref();
    let visibility = use_viewport_activation(section.clone(), ActivationOptions::threshold(0.3));
    let shown = if visibility.entered() { "shown" } else { "hidden" };

    html! {
        <section ref={section} class="process-section">
            <div class={classes!("section-header", shown)}>
                <h2 class="section-title">
                    {"Automatisieren Sie Ihre Arbeitsabläufe"}
                    <br />
                    <span class="accent">{"in drei klaren Schritten"}</span>
                </h2>
                <p class="section-subtitle">
                    {"Von der Analyse bis zur Optimierung, unser strukturierter Ansatz sorgt für eine \
                      erfolgreiche KI-Automatisierung in Ihrem Unternehmen."}
                </p>
            </div>

            <div class="timeline">
                <div class="timeline-line"></div>
                { for STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div
                        key={step.number}
                        class={classes!("timeline-item", shown)}
                        style={format!("transition-delay: {}ms;", index * 200)}
                    >
                        <div class="timeline-marker">{step.number}</div>
                        <div class="timeline-body">
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                            <ul>
                                { for step.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
