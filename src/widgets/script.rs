use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;
use web_sys::{window, HtmlScriptElement};

use super::error::WidgetError;

thread_local! {
    /// One load promise per script URL for the lifetime of the page.
    static SCRIPTS: RefCell<HashMap<String, Promise>> = RefCell::new(HashMap::new());
}

fn inject(url: &str) -> Result<Promise, WidgetError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::NoDocument)?;
    let head = document.head().ok_or(WidgetError::NoDocument)?;

    let script: HtmlScriptElement = document
        .create_element("script")?
        .dyn_into()
        .map_err(|_| WidgetError::NoDocument)?;
    script.set_src(url);
    script.set_async(true);

    let target = script.clone();
    let loaded = Promise::new(&mut |resolve, reject| {
        let on_load = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        let _ = target.add_event_listener_with_callback("load", on_load.unchecked_ref());
        let _ = target.add_event_listener_with_callback("error", on_error.unchecked_ref());
    });

    head.append_child(&script)?;
    log::debug!("injected script {url}");
    Ok(loaded)
}

/// Returns the load promise for `url`, injecting the script on first use.
pub fn script_promise(url: &str) -> Result<Promise, WidgetError> {
    SCRIPTS.with(|scripts| {
        if let Some(existing) = scripts.borrow().get(url) {
            return Ok(existing.clone());
        }
        let promise = inject(url)?;
        scripts.borrow_mut().insert(url.to_string(), promise.clone());
        Ok(promise)
    })
}

/// Resolves once the script has loaded. A failed load stays failed.
pub async fn wait_for(promise: Promise, url: &str) -> Result<(), WidgetError> {
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| WidgetError::ScriptLoad(url.to_string()))
}
