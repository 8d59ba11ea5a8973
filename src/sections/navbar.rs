use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;
use crate::SiteNav;

#[derive(Clone, Copy, PartialEq)]
enum NavTarget {
    Section(&'static str),
    Contact,
}

const NAV_ITEMS: [(&str, NavTarget); 4] = [
    ("Lösungen", NavTarget::Section("solutions")),
    ("Demo", NavTarget::Section("demo")),
    ("Team", NavTarget::Section("team")),
    ("Kontakt", NavTarget::Contact),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_context::<SiteNav>();
    let menu_open = use_state_eq(|| false);
    let revealed = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > config::NAV_SCROLLED_OFFSET;

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NAV_REVEAL_DELAY_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let activate = {
        let menu_open = menu_open.clone();
        Callback::from(move |target: NavTarget| {
            match target {
                NavTarget::Section(id) => dom::scroll_to_section(id),
                NavTarget::Contact => {
                    if let Some(nav) = &nav {
                        nav.show_contact.emit(());
                    }
                }
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let render_items = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|(label, target)| {
                let activate = activate.clone();
                let target = *target;
                html! {
                    <button key={*label} class={class} onclick={Callback::from(move |_: MouseEvent| activate.emit(target))}>
                        {*label}
                        <span class="nav-underline"></span>
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!(
            "top-nav",
            if scrolled { "scrolled" } else { "resting" },
            if *revealed { "nav-shown" } else { "nav-hidden" }
        )}>
            <div class="nav-shell">
                <div class="nav-content">
                    <span class="nav-logo">{config::BRAND}</span>
                    <div class="nav-links">
                        { render_items("nav-link") }
                    </div>
                    <button class="burger-menu" aria-label="Menü" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
                {
                    if *menu_open {
                        html! { <div class="mobile-menu">{ render_items("mobile-nav-link") }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}
