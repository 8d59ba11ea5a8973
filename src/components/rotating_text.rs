use yew::prelude::*;

use crate::behavior::rotation::RotationTiming;
use crate::hooks::rotation::use_rotating_selection;

#[derive(Properties, PartialEq)]
pub struct RotatingTextProps {
    pub words: Vec<AttrValue>,
    pub period_ms: u64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RotatingText)]
pub fn rotating_text(props: &RotatingTextProps) -> Html {
    let rotation = use_rotating_selection(props.words.len(), true, RotationTiming::every(props.period_ms));
    let word = props.words.get(rotation.active).cloned().unwrap_or_default();

    html! {
        <span class={classes!("rotating-text", props.class.clone())}>
            // Keyed so the entrance animation replays for every word.
            <span key={rotation.active} class="rotating-text-word">{word}</span>
        </span>
    }
}
