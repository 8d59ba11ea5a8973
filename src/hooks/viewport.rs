use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::behavior::scroll_spy::{self, Span, SpyRule};
use crate::behavior::visibility::{sweep_progress, ActivationOptions, VisibilityState};
use crate::dom;

fn observer_supported() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Tracks whether the node behind `node` is on screen.
///
/// The returned state carries both the entrance latch and the live flag, so a
/// section can animate in once and still pause timers when scrolled away.
#[hook]
pub fn use_viewport_activation(node: NodeRef, options: ActivationOptions) -> VisibilityState {
    let state = use_state_eq(VisibilityState::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, ActivationOptions)| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> = None;

                match node.cast::<Element>() {
                    Some(element) if observer_supported() => {
                        let threshold = options.threshold;
                        let current = Rc::new(Cell::new(*state));
                        let setter = state.clone();
                        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                            let mut next = current.get();
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                next.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                            }
                            if next != current.get() {
                                current.set(next);
                                setter.set(next);
                            }
                        }) as Box<dyn FnMut(js_sys::Array)>);

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(threshold));
                        init.set_root_margin(&options.root_margin);

                        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                            Ok(observer) => {
                                observer.observe(&element);
                                teardown = Some((observer, callback));
                            }
                            Err(err) => {
                                log::warn!("intersection observer rejected options: {:?}", err);
                                state.set(VisibilityState::always_visible());
                            }
                        }
                    }
                    _ => state.set(VisibilityState::always_visible()),
                }

                move || {
                    if let Some((observer, callback)) = teardown {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (node, options),
        );
    }

    *state
}

/// Scroll listener that defers its work to the next animation frame and
/// drops intermediate samples.
struct FrameCoalescedScroll {
    scroll: Closure<dyn FnMut()>,
    _frame: Rc<Closure<dyn FnMut(f64)>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameCoalescedScroll {
    fn attach(mut sample: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let pending = Rc::new(Cell::new(None::<i32>));

        let frame = {
            let pending = pending.clone();
            Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                sample();
            }) as Box<dyn FnMut(f64)>))
        };

        let scroll = {
            let pending = pending.clone();
            let frame = frame.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if pending.get().is_some() {
                    return;
                }
                if let Ok(id) = window.request_animation_frame((*frame).as_ref().unchecked_ref()) {
                    pending.set(Some(id));
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
            .ok()?;

        // Initial sample so the state matches a page that loads mid-scroll.
        let _ = scroll.as_ref().unchecked_ref::<js_sys::Function>().call0(&JsValue::NULL);

        Some(Self {
            scroll,
            _frame: frame,
            pending,
        })
    }
}

impl Drop for FrameCoalescedScroll {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
            if let Some(id) = self.pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Highlight progress in `[0, 1]` for the node, updated on scroll.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = FrameCoalescedScroll::attach(move || {
                    if let Some(element) = node.cast::<Element>() {
                        let rect = element.get_bounding_client_rect();
                        progress.set(sweep_progress(rect.top(), dom::viewport_height()));
                    }
                });
                move || drop(listener)
            },
            node,
        );
    }

    *progress
}

/// Which of `nodes` is active for the current scroll position.
#[hook]
pub fn use_scroll_spy(nodes: Rc<Vec<NodeRef>>, rule: SpyRule) -> Option<usize> {
    let active = use_state_eq(|| None::<usize>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(nodes, rule): &(Rc<Vec<NodeRef>>, SpyRule)| {
                let nodes = nodes.clone();
                let rule = *rule;
                let last = Rc::new(RefCell::new(None::<usize>));
                let listener = FrameCoalescedScroll::attach(move || {
                    let scroll = dom::scroll_y();
                    let spans: Vec<Option<Span>> = nodes
                        .iter()
                        .map(|n| {
                            n.cast::<Element>().map(|el| {
                                let rect = el.get_bounding_client_rect();
                                Span::new(rect.top() + scroll, rect.height())
                            })
                        })
                        .collect();
                    let probe = scroll + dom::viewport_height() / 2.0;
                    let next = scroll_spy::resolve(rule, probe, &spans, *last.borrow());
                    *last.borrow_mut() = next;
                    active.set(next);
                });
                move || drop(listener)
            },
            (nodes, rule),
        );
    }

    *active
}
