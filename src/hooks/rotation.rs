use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::rotation::{RotatingSelection, RotationTiming};
use crate::dom::now_ms;

#[derive(Clone, PartialEq)]
pub struct RotationHandle {
    pub active: usize,
    pub select: Callback<usize>,
}

struct Driver {
    machine: Rc<RefCell<RotatingSelection>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    active: UseStateHandle<usize>,
    is_mounted: Rc<dyn Fn() -> bool>,
}

impl Clone for Driver {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
            timer: self.timer.clone(),
            active: self.active.clone(),
            is_mounted: self.is_mounted.clone(),
        }
    }
}

impl Driver {
    fn publish(&self) {
        if (self.is_mounted)() {
            self.active.set(self.machine.borrow().active());
        }
    }

    /// Replaces the pending timer with one for the machine's next deadline.
    fn rearm(&self) {
        let deadline = self.machine.borrow().next_deadline();
        let next = deadline.map(|at| {
            let delay = at.saturating_sub(now_ms()).min(u32::MAX as u64) as u32;
            let driver = self.clone();
            Timeout::new(delay, move || {
                // The timer slot still owns this callback; rearm once it has returned.
                spawn_local(async move {
                    if !(driver.is_mounted)() {
                        return;
                    }
                    driver.machine.borrow_mut().advance_to(now_ms());
                    driver.publish();
                    driver.rearm();
                });
            })
        });
        *self.timer.borrow_mut() = next;
    }

    fn stop(&self) {
        self.timer.borrow_mut().take();
    }
}

/// Autoplaying selection over `len` items that only runs while `visible`.
#[hook]
pub fn use_rotating_selection(len: usize, visible: bool, timing: RotationTiming) -> RotationHandle {
    let machine = use_mut_ref(|| RotatingSelection::new(len, timing));
    let timer = use_mut_ref(|| None::<Timeout>);
    let active = use_state_eq(|| 0usize);
    let is_mounted = use_is_mounted();

    let driver = Driver {
        machine,
        timer,
        active: active.clone(),
        is_mounted,
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                {
                    let mut machine = driver.machine.borrow_mut();
                    if *visible {
                        machine.show(now_ms());
                    } else {
                        machine.hide();
                    }
                }
                driver.publish();
                driver.rearm();
                || ()
            },
            visible,
        );
    }

    {
        let driver = driver.clone();
        use_effect_with_deps(move |_| move || driver.stop(), ());
    }

    let select = {
        let driver = driver.clone();
        Callback::from(move |index: usize| {
            let changed = driver.machine.borrow_mut().select(now_ms(), index);
            if changed {
                driver.publish();
                driver.rearm();
            }
        })
    };

    RotationHandle {
        active: *active,
        select,
    }
}
