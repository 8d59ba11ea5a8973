use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::sections::{
    benefits::BenefitsSection, demo::DemoSection, faq::FaqSection, footer::Footer, hero::Hero,
    navbar::Navbar, process::ProcessSection, solutions::SolutionsSection, team::TeamSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_title(format!("{} | KI-Automatisierung für Schweizer Unternehmen", config::BRAND));

    html! {
        <div class="landing-page">
            <Navbar />
            <Hero />
            <BenefitsSection />
            <SolutionsSection />
            <DemoSection />
            <ProcessSection />
            <TeamSection />
            <FaqSection />
            <Footer />
        </div>
    }
}
