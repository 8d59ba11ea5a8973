use yew::prelude::*;

use crate::SiteNav;

struct Question {
    id: &'static str,
    icon: &'static str,
    question: &'static str,
    answer: &'static str,
}

const QUESTIONS: [Question; 5] = [
    Question {
        id: "ai-vs-traditional",
        icon: "🤖",
        question: "How is AI automation different from traditional automation?",
        answer: "Traditional automation follows fixed rules. AI automation adapts to input, learns from \
                 data, and handles more complex and dynamic tasks.",
    },
    Question {
        id: "cost",
        icon: "💲",
        question: "How much does it cost?",
        answer: "The consultation is free. After we understand your needs, we provide a custom quote \
                 based on the workload. Free demo builds are available.",
    },
    Question {
        id: "integration",
        icon: "🔌",
        question: "Can you integrate with the tools I already use?",
        answer: "Yes. We can connect with most CRMs, websites, email platforms, and other tools you are \
                 already using.",
    },
    Question {
        id: "technical-skills",
        icon: "👤",
        question: "Do I need any technical skills?",
        answer: "No. We handle everything from planning to deployment so you can focus on running your \
                 business.",
    },
    Question {
        id: "what-to-automate",
        icon: "💡",
        question: "What if I'm not sure what to automate?",
        answer: "That is exactly what we help with. During the consultation we identify time-consuming \
                 tasks in your business and show you what automation can handle.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    icon: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="faq-icon">{&props.icon}</span>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let nav = use_context::<SiteNav>();
    let contact = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &nav {
            nav.show_contact.emit(());
        }
    });

    html! {
        <section class="faq-section">
            <div class="section-header">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <p class="section-subtitle">{"Get answers to common questions about our AI automation"}</p>
            </div>

            <div class="faq-list">
                { for QUESTIONS.iter().map(|q| html! {
                    <FaqItem key={q.id} question={q.question} icon={q.icon}>
                        <p>{q.answer}</p>
                    </FaqItem>
                }) }
            </div>

            <div class="faq-contact">
                <div class="faq-contact-icon">{"🤖"}</div>
                <h3>{"Noch Fragen?"}</h3>
                <p>{"Sprechen Sie direkt mit uns. Wir finden gemeinsam heraus, was sich in Ihrem Unternehmen automatisieren lässt."}</p>
                <button class="cta-button" onclick={contact}>{"Kontakt aufnehmen"}</button>
            </div>
        </section>
    }
}
