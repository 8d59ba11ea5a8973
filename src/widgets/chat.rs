//! Voiceflow chat launcher glue.
//!
//! The chat SDK is loaded by the host page and offers no readiness hook of its
//! own, so readiness is a single shared promise resolved by bounded polling.
//! Every launcher awaits the same promise; a finished poll is never restarted.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::window;

use super::error::WidgetError;
use crate::config;

thread_local! {
    static READY: RefCell<Option<Promise>> = RefCell::new(None);
}

#[derive(Clone, Debug)]
pub struct ChatApi {
    chat: JsValue,
}

impl PartialEq for ChatApi {
    fn eq(&self, other: &Self) -> bool {
        self.chat == other.chat
    }
}

impl ChatApi {
    fn lookup() -> Option<Self> {
        let window = window()?;
        let voiceflow = Reflect::get(&window, &"voiceflow".into()).ok()?;
        if voiceflow.is_undefined() || voiceflow.is_null() {
            return None;
        }
        let chat = Reflect::get(&voiceflow, &"chat".into()).ok()?;
        if chat.is_object() {
            Some(Self { chat })
        } else {
            None
        }
    }

    fn call(&self, method: &'static str) -> Result<(), WidgetError> {
        let function: Function = Reflect::get(&self.chat, &method.into())?
            .dyn_into()
            .map_err(|_| WidgetError::MissingGlobal("voiceflow.chat"))?;
        function.call0(&self.chat)?;
        Ok(())
    }

    pub fn open(&self) -> Result<(), WidgetError> {
        self.call("open")
    }
}

fn start_polling() -> Promise {
    Promise::new(&mut |resolve, _reject| {
        spawn_local(async move {
            for _ in 0..config::CHAT_POLL_ATTEMPTS {
                if ChatApi::lookup().is_some() {
                    log::info!("chat widget ready");
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
                    return;
                }
                TimeoutFuture::new(config::CHAT_POLL_INTERVAL_MS).await;
            }
            gloo_console::warn!("chat widget never became available");
            let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
        });
    })
}

/// Waits for the chat SDK. `None` means it never loaded.
pub async fn ready() -> Option<ChatApi> {
    let promise = READY.with(|ready| ready.borrow_mut().get_or_insert_with(start_polling).clone());
    match JsFuture::from(promise).await {
        Ok(loaded) if loaded.is_truthy() => ChatApi::lookup(),
        _ => None,
    }
}
