use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::widgets::chat::{self, ChatApi};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChatVariant {
    /// Floating launcher in the page corner.
    Desktop,
    /// Launcher pinned inside the hero.
    HeroDesktop,
    /// Inline launcher with a caption.
    Mobile,
}

#[derive(Properties, PartialEq)]
pub struct ChatButtonProps {
    #[prop_or(ChatVariant::Desktop)]
    pub variant: ChatVariant,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders nothing until the chat SDK is available.
#[function_component(ChatButton)]
pub fn chat_button(props: &ChatButtonProps) -> Html {
    let api = use_state(|| None::<ChatApi>);
    let revealed = use_state_eq(|| false);
    let is_mounted = use_is_mounted();

    {
        let api = api.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let Some(chat) = chat::ready().await else {
                        return;
                    };
                    if !is_mounted() {
                        return;
                    }
                    api.set(Some(chat));
                    TimeoutFuture::new(config::CHAT_REVEAL_DELAY_MS).await;
                    if is_mounted() {
                        revealed.set(true);
                    }
                });
                || ()
            },
            (),
        );
    }

    let Some(chat) = (*api).clone() else {
        return html! {};
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Err(err) = chat.open() {
            log::warn!("could not open chat: {err}");
        }
    });

    let reveal = if *revealed { "chat-launcher-shown" } else { "chat-launcher-hidden" };

    match props.variant {
        ChatVariant::Desktop | ChatVariant::HeroDesktop => {
            let placement = if props.variant == ChatVariant::Desktop {
                "chat-launcher-floating"
            } else {
                "chat-launcher-hero"
            };
            html! {
                <button
                    class={classes!("chat-launcher", placement, reveal, props.class.clone())}
                    aria-label="Chat mit uns"
                    {onclick}
                >
                    <span class="chat-launcher-bubble">{"💬"}</span>
                    <span class="chat-launcher-ping"></span>
                    <span class="chat-launcher-online"></span>
                </button>
            }
        }
        ChatVariant::Mobile => html! {
            <button class={classes!("chat-launcher-inline", props.class.clone())} aria-label="Chat mit uns" {onclick}>
                <span class="chat-launcher-bubble small">{"💬"}</span>
                <span class="chat-launcher-caption">{"Chat starten"}</span>
            </button>
        },
    }
}
