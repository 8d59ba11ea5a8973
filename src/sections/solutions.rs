use yew::prelude::*;

use crate::behavior::rotation::RotationTiming;
use crate::behavior::visibility::ActivationOptions;
use crate::config;
use crate::hooks::rotation::use_rotating_selection;
use crate::hooks::viewport::{use_scroll_progress, use_viewport_activation};

struct Solution {
    id: &'static str,
    tab: &'static str,
    icon: &'static str,
    title: &'static str,
    description: [&'static str; 4],
}

const SOLUTIONS: [Solution; 4] = [
    Solution {
        id: "crm",
        tab: "CRM-System",
        icon: "👥",
        title: "Schließen Sie mehr Deals mit KI",
        description: [
            "Optimieren Sie Ihre gesamte Sales-Pipeline mit intelligenter Automatisierung.",
            "Qualifizieren Sie Prospects sofort und identifizieren Sie hochwertige Gelegenheiten.",
            "Eliminieren Sie manuelle Aufgaben und befähigen Sie Ihr Team, sich auf das Closing zu konzentrieren.",
            "Erreichen Sie konsistentes Wachstum und maximieren Sie Ihre Sales-Effizienz.",
        ],
    },
    Solution {
        id: "lead-gen",
        tab: "Lead-Generierung",
        icon: "🎯",
        title: "Wandeln Sie Gespräche in Kunden um",
        description: [
            "Erreichen Sie Ihre idealen Prospects mit KI-gesteuerten Outreach-Kampagnen.",
            "Liefern Sie personalisierte Nachrichten im großen Maßstab und konvertieren Sie mehr Leads.",
            "Automatisieren Sie Lead-Nurturing und stellen Sie warme Übergaben an den Vertrieb sicher.",
            "Füllen Sie Ihre Pipeline konsistent auf und generieren Sie erhebliche Einnahmen.",
        ],
    },
    Solution {
        id: "support",
        tab: "Kundensupport",
        icon: "🎧",
        title: "Sofortige Antworten. Keine Wartezeit.",
        description: [
            "Bieten Sie sofortige, genaue Kundenantworten mit 24/7 KI-Support.",
            "Bearbeiten Sie hohe Anfragevolumina ohne zusätzliches Personal.",
            "Lösen Sie komplexe Probleme nahtlos mit natürlicher KI.",
            "Verbessern Sie die Kundenzufriedenheit und bauen Sie dauerhafte Loyalität auf.",
        ],
    },
    Solution {
        id: "voice",
        tab: "Sprach-Agent",
        icon: "🎙",
        title: "KI-Anrufe, die Ergebnisse liefern",
        description: [
            "Automatisieren Sie eingehende Anrufe, qualifizieren Sie Leads und leiten Sie effizient weiter.",
            "Bieten Sie natürlich klingende Interaktionen, die Ihre Marke widerspiegeln.",
            "Bieten Sie Kundenservice in Echtzeit, ohne Ihr Team zu erweitern.",
            "Nutzen Sie jede Gelegenheit, indem Sie schnelle, intelligente Antworten sicherstellen.",
        ],
    },
];

fn slide_class(index: usize, active: usize) -> &'static str {
    if index == active {
        "slide-current"
    } else if index < active {
        "slide-before"
    } else {
        "slide-after"
    }
}

/// Solution showcase. Autoplay runs only while the section is in view, a
/// manual pick pauses it for a cool-down, and re-entering starts over.
#[function_component(SolutionsSection)]
pub fn solutions_section() -> Html {
    let section = use_node_ref();
    let visibility = use_viewport_activation(
        section.clone(),
        ActivationOptions::threshold(0.3).with_margin("50px 0px -50px 0px"),
    );
    let rotation = use_rotating_selection(
        SOLUTIONS.len(),
        visibility.in_view(),
        RotationTiming::every(config::SHOWCASE_PERIOD_MS)
            .with_cooldown(config::SHOWCASE_COOLDOWN_MS)
            .restarting(),
    );
    let highlight = use_scroll_progress(section.clone());
    let shown = if visibility.entered() { "shown" } else { "hidden" };

    let highlight_style = format!(
        "transform: scaleX({highlight:.3}); opacity: {};",
        if highlight > 0.01 { 0.9 } else { 0.0 }
    );

    html! {
        <section id="solutions" ref={section} class="solutions-section">
            <div class={classes!("section-header", shown)}>
                <h2 class="section-title">
                    <span class="title-lead">{"Transformieren Sie Ihr Geschäft mit"}</span>
                    <br />
                    <span class="title-highlight">
                        <span class="highlight-sweep" style={highlight_style}></span>
                        <span class="highlight-text">{"Intelligenter Automatisierung"}</span>
                    </span>
                </h2>
                <p class="section-subtitle">
                    {"Optimieren Sie Ihre Betriebsabläufe und steigern Sie die Effizienz mit unseren KI-gestützten Lösungen."}
                </p>
            </div>

            <div class="solution-tabs">
                { for SOLUTIONS.iter().enumerate().map(|(index, solution)| {
                    let select = rotation.select.clone();
                    html! {
                        <button
                            key={solution.id}
                            class={classes!("solution-tab", (index == rotation.active).then(|| "active"), shown)}
                            style={format!("transition-delay: {}ms;", 300 + index * 150)}
                            onclick={Callback::from(move |_: MouseEvent| select.emit(index))}
                        >
                            <span class="solution-tab-icon">{solution.icon}</span>
                            {solution.tab}
                        </button>
                    }
                }) }
            </div>

            <div class={classes!("solution-stage", shown)}>
                { for SOLUTIONS.iter().enumerate().map(|(index, solution)| html! {
                    <div key={solution.id} class={classes!("solution-slide", slide_class(index, rotation.active))}>
                        <div class="solution-copy">
                            <h3>{solution.title}</h3>
                            <p>
                                { for solution.description.iter().map(|line| html! { <>{*line}<br /></> }) }
                            </p>
                        </div>
                        <div class="solution-visual" aria-hidden="true">
                            <span class="solution-visual-icon">{solution.icon}</span>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_move_out_on_either_side_of_the_active_one() {
        assert_eq!(slide_class(0, 2), "slide-before");
        assert_eq!(slide_class(2, 2), "slide-current");
        assert_eq!(slide_class(3, 2), "slide-after");
    }
}
