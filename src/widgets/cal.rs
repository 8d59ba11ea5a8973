//! Inline booking calendar from cal.eu.
//!
//! The embed script expects a `Cal` command queue on `window` before it loads.
//! This module installs that queue once, initializes each namespace once and
//! then only issues `inline`/`ui` commands, so re-entering the contact view
//! never injects the script twice.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Object, Reflect};
use web_sys::{window, Window};

use super::error::WidgetError;
use super::script;
use crate::config;

thread_local! {
    static NAMESPACES: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub origin: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfig {
    pub layout: String,
    pub use_slots_view_on_small_screen: String,
    pub theme: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineOptions {
    pub element_or_selector: String,
    pub config: EmbedConfig,
    pub cal_link: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiOptions {
    pub theme: String,
    pub hide_event_type_details: bool,
    pub layout: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub css_vars_per_theme: BTreeMap<String, BTreeMap<String, String>>,
}

/// Everything needed to place one booking calendar.
#[derive(Clone, Debug, PartialEq)]
pub struct Booking {
    pub namespace: String,
    pub origin: String,
    pub cal_link: String,
    pub container_id: String,
    pub theme: String,
    pub layout: String,
    pub brand_color: Option<String>,
}

impl Default for Booking {
    fn default() -> Self {
        Self {
            namespace: config::CAL_NAMESPACE.to_string(),
            origin: config::CAL_ORIGIN.to_string(),
            cal_link: config::CAL_LINK.to_string(),
            container_id: config::CAL_CONTAINER_ID.to_string(),
            theme: "light".to_string(),
            layout: "month_view".to_string(),
            brand_color: Some("#5da0ff".to_string()),
        }
    }
}

impl Booking {
    pub fn inline_options(&self) -> InlineOptions {
        InlineOptions {
            element_or_selector: format!("#{}", self.container_id),
            config: EmbedConfig {
                layout: self.layout.clone(),
                use_slots_view_on_small_screen: "true".to_string(),
                theme: self.theme.clone(),
            },
            cal_link: self.cal_link.clone(),
        }
    }

    pub fn ui_options(&self) -> UiOptions {
        let mut css_vars_per_theme = BTreeMap::new();
        if let Some(color) = &self.brand_color {
            let vars = BTreeMap::from([("cal-brand".to_string(), color.clone())]);
            css_vars_per_theme.insert(self.theme.clone(), vars);
        }
        UiOptions {
            theme: self.theme.clone(),
            hide_event_type_details: false,
            layout: self.layout.clone(),
            css_vars_per_theme,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, WidgetError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// A function that records its arguments into `queue` for the embed script
/// to replay once it has loaded.
fn queue_function(queue: &Array) -> Function {
    let queue = queue.clone();
    let record = Closure::wrap(Box::new(move |a: JsValue, b: JsValue, c: JsValue| {
        let mut args = vec![a, b, c];
        while args.last().map_or(false, |v| v.is_undefined()) {
            args.pop();
        }
        queue.push(&args.into_iter().collect::<Array>());
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>);
    record.into_js_value().unchecked_into()
}

fn install_queue(window: &Window) -> Result<JsValue, WidgetError> {
    let key = JsValue::from_str("Cal");
    let existing = Reflect::get(window, &key)?;
    if existing.is_function() {
        return Ok(existing);
    }

    let queue = Array::new();
    let cal = queue_function(&queue);
    Reflect::set(&cal, &"q".into(), &queue)?;
    Reflect::set(&cal, &"ns".into(), &Object::new())?;
    Reflect::set(&cal, &"loaded".into(), &JsValue::TRUE)?;
    Reflect::set(window, &key, &cal)?;
    Ok(cal.into())
}

fn namespace_api(cal: &JsValue, namespace: &str) -> Result<Function, WidgetError> {
    let namespaces = Reflect::get(cal, &"ns".into())?;
    let api = Reflect::get(&namespaces, &namespace.into())?;
    api.dyn_into::<Function>()
        .map_err(|_| WidgetError::MissingGlobal("Cal.ns"))
}

fn init_namespace(cal: &JsValue, booking: &Booking) -> Result<(), WidgetError> {
    let namespaces = Reflect::get(cal, &"ns".into())?;
    let queue = Array::new();
    let api = queue_function(&queue);
    Reflect::set(&api, &"q".into(), &queue)?;
    Reflect::set(&namespaces, &booking.namespace.as_str().into(), &api)?;

    let init = to_js(&InitOptions {
        origin: booking.origin.clone(),
    })?;
    queue.push(&Array::of3(&"init".into(), &booking.namespace.as_str().into(), &init));

    let cal_queue: Array = Reflect::get(cal, &"q".into())?.unchecked_into();
    cal_queue.push(&Array::of2(&"initNamespace".into(), &booking.namespace.as_str().into()));

    watch_dimensions(&api, booking.container_id.clone())?;
    Ok(())
}

/// Grows the host container with the calendar iframe.
fn watch_dimensions(api: &Function, container_id: String) -> Result<(), WidgetError> {
    let on_resize = Closure::wrap(Box::new(move |event: JsValue| {
        let height = ["detail", "data", "iframeHeight"]
            .iter()
            .try_fold(event, |value, key| Reflect::get(&value, &(*key).into()).ok())
            .and_then(|h| h.as_f64());
        let Some(height) = height else { return };
        if let Some(container) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&container_id))
        {
            let _ = container.set_attribute("style", &format!("width: 100%; min-height: {}px;", height.ceil()));
        }
    }) as Box<dyn FnMut(JsValue)>);

    let subscription = Object::new();
    Reflect::set(&subscription, &"action".into(), &"__dimensionChanged".into())?;
    Reflect::set(&subscription, &"callback".into(), &on_resize.into_js_value())?;
    api.call2(&JsValue::NULL, &"on".into(), &subscription)?;
    Ok(())
}

/// Runs `init` for a namespace until it succeeds once.
fn init_once(
    namespace: &str,
    init: impl FnOnce() -> Result<(), WidgetError>,
) -> Result<(), WidgetError> {
    if NAMESPACES.with(|ns| ns.borrow().contains(namespace)) {
        return Ok(());
    }
    init()?;
    NAMESPACES.with(|ns| ns.borrow_mut().insert(namespace.to_string()));
    log::info!("booking namespace {namespace} initialized");
    Ok(())
}

/// Places the calendar into its container and waits for the embed script.
pub async fn mount_inline(booking: Booking) -> Result<(), WidgetError> {
    let window = window().ok_or(WidgetError::NoDocument)?;
    let cal = install_queue(&window)?;

    init_once(&booking.namespace, || init_namespace(&cal, &booking))?;

    let api = namespace_api(&cal, &booking.namespace)?;
    api.call2(&JsValue::NULL, &"inline".into(), &to_js(&booking.inline_options())?)?;
    api.call2(&JsValue::NULL, &"ui".into(), &to_js(&booking.ui_options())?)?;

    let loaded = script::script_promise(config::CAL_EMBED_SCRIPT)?;
    script::wait_for(loaded, config::CAL_EMBED_SCRIPT).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_options_target_the_container() {
        let booking = Booking::default();
        let inline = booking.inline_options();
        assert_eq!(inline.element_or_selector, "#my-cal-inline-erstgesprach");
        assert_eq!(inline.cal_link, "automaticly/erstgesprach");
        assert_eq!(inline.config.use_slots_view_on_small_screen, "true");
    }

    #[test]
    fn failed_namespace_init_is_retried() {
        let failed = init_once("retry-ns", || Err(WidgetError::MissingGlobal("Cal.ns")));
        assert!(failed.is_err());

        let mut calls = 0;
        init_once("retry-ns", || {
            calls += 1;
            Ok(())
        })
        .unwrap();
        init_once("retry-ns", || {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn ui_options_carry_brand_color_per_theme() {
        let ui = Booking::default().ui_options();
        assert_eq!(ui.css_vars_per_theme["light"]["cal-brand"], "#5da0ff");
        assert!(!ui.hide_event_type_details);

        let plain = Booking {
            brand_color: None,
            ..Booking::default()
        };
        assert!(plain.ui_options().css_vars_per_theme.is_empty());
    }
}
