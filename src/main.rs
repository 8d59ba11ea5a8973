use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod behavior {
    pub mod counter;
    pub mod form;
    pub mod metrics;
    pub mod rotation;
    pub mod scroll_spy;
    pub mod visibility;
}
mod hooks {
    pub mod rotation;
    pub mod viewport;
}
mod widgets {
    pub mod cal;
    pub mod chat;
    pub mod error;
    pub mod script;
}
mod components {
    pub mod animated_counter;
    pub mod booking_embed;
    pub mod chat_button;
    pub mod contact_form;
    pub mod dashboards;
    pub mod rotating_text;
}
mod sections {
    pub mod benefits;
    pub mod demo;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod process;
    pub mod solutions;
    pub mod team;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use components::chat_button::{ChatButton, ChatVariant};
use pages::{contact::Contact, home::Home};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    Contact,
}

/// Navigation handed down to every view in place of a router.
#[derive(Clone, PartialEq)]
pub struct SiteNav {
    pub show_contact: Callback<()>,
    pub return_home: Callback<()>,
}

#[function_component]
fn App() -> Html {
    let view = use_state_eq(|| View::Home);

    let nav = {
        let show = view.clone();
        let home = view.clone();
        SiteNav {
            show_contact: Callback::from(move |_| {
                info!("Switching to contact view");
                show.set(View::Contact);
            }),
            return_home: Callback::from(move |_| {
                info!("Returning to home view");
                home.set(View::Home);
            }),
        }
    };

    // The home view carries its own launchers in the hero and footer.
    let content = match *view {
        View::Home => html! { <Home /> },
        View::Contact => html! {
            <>
                <Contact />
                <ChatButton variant={ChatVariant::Desktop} class={classes!("desktop-only")} />
            </>
        },
    };

    html! {
        <ContextProvider<SiteNav> context={nav}>
            { content }
        </ContextProvider<SiteNav>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("could not initialize logging: {err}"));
    }

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
