use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::counter::CountUp;
use crate::behavior::visibility::ActivationOptions;
use crate::config;
use crate::dom::now_ms;
use crate::hooks::viewport::use_viewport_activation;

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(config::COUNTER_DELAY_MS)]
    pub delay_ms: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up to `end` once half of it is on screen, after `delay_ms`.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visibility = use_viewport_activation(node.clone(), ActivationOptions::threshold(0.5));
    let count = use_state_eq(|| 0u32);
    let is_mounted = use_is_mounted();

    {
        let count = count.clone();
        let end = props.end;
        let count_up = CountUp {
            delay_ms: props.delay_ms,
            duration_ms: config::COUNTER_DURATION_MS,
        };
        use_effect_with_deps(
            move |entered: &bool| {
                if *entered {
                    spawn_local(async move {
                        let started = now_ms();
                        loop {
                            if !is_mounted() {
                                return;
                            }
                            let elapsed = now_ms().saturating_sub(started) as f64;
                            count.set(count_up.value(end, elapsed));
                            if count_up.is_finished(elapsed) {
                                break;
                            }
                            TimeoutFuture::new(FRAME_MS).await;
                        }
                    });
                }
                || ()
            },
            visibility.entered(),
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>
            {&props.prefix}{*count}{&props.suffix}
        </span>
    }
}
