use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WidgetError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("script {0} failed to load")]
    ScriptLoad(String),
    #[error("global `{0}` is not available")]
    MissingGlobal(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("could not serialize widget config: {0}")]
    Config(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                web_sys::js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for WidgetError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        WidgetError::Config(value.to_string())
    }
}
