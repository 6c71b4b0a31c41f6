//! Auto-scroll controls for the reading view.
//!
//! The controller state lives in a [`sheet::AutoScroll`] signal. The recurring timer
//! is a single spawned task whose handle is kept outside the signal graph; it is
//! cancelled when scrolling is toggled off, replaced when the speed changes while
//! running, and cancelled when the component is dropped.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use sheet::scroll::{MAX_SPEED, MIN_SPEED, SPEED_STEP, TICK_PERIOD};
use sheet::{AutoScroll, Tick};

use crate::icons::{FaPause, FaPlay};
use crate::Icon;

type TimerSlot = Rc<Cell<Option<Task>>>;

fn disarm(timer: &TimerSlot) {
    if let Some(task) = timer.take() {
        task.cancel();
    }
}

/// Cancel any running timer and start a new one driven by `scroll`.
fn arm(mut scroll: Signal<AutoScroll>, timer: &TimerSlot) {
    disarm(timer);

    let slot = timer.clone();
    let task = spawn(async move {
        loop {
            sleep(TICK_PERIOD).await;
            let Some(viewport) = dom::viewport() else {
                scroll.write().stop();
                break;
            };
            let tick = scroll.write().tick(viewport);
            match tick {
                Tick::ScrollBy(dy) => dom::scroll_by(dy),
                Tick::ReachedBottom | Tick::Idle => break,
            }
        }
        slot.set(None);
    });
    timer.set(Some(task));
}

#[component]
pub fn AutoScrollControls() -> Element {
    let mut scroll = use_signal(AutoScroll::default);
    let timer: TimerSlot = use_hook(|| Rc::new(Cell::new(None)));

    {
        let timer = timer.clone();
        use_drop(move || disarm(&timer));
    }

    let toggle = {
        let timer = timer.clone();
        move |_| {
            if scroll.write().toggle() {
                arm(scroll, &timer);
            } else {
                disarm(&timer);
            }
        }
    };

    let change_speed = {
        let timer = timer.clone();
        move |evt: FormEvent| {
            let Ok(value) = evt.value().parse::<f64>() else {
                return;
            };
            if scroll.write().set_speed(value) {
                arm(scroll, &timer);
            }
        }
    };

    let state = scroll();
    let speed = format!("{:.1}", state.speed());

    rsx! {
        div {
            class: "auto-scroll",
            button {
                class: if state.is_running() { "auto-scroll-toggle active" } else { "auto-scroll-toggle" },
                onclick: toggle,
                if state.is_running() {
                    Icon { icon: FaPause, width: 12, height: 12 }
                    span { "Parar rolagem" }
                } else {
                    Icon { icon: FaPlay, width: 12, height: 12 }
                    span { "Rolagem automática" }
                }
            }
            label {
                class: "auto-scroll-speed",
                span { "Velocidade" }
                input {
                    r#type: "range",
                    min: "{MIN_SPEED}",
                    max: "{MAX_SPEED}",
                    step: "{SPEED_STEP}",
                    value: "{state.speed()}",
                    oninput: change_speed,
                }
                span { class: "auto-scroll-value", "{speed}x" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(period: std::time::Duration) {
    gloo_timers::future::sleep(period).await;
}

// There is no document to scroll outside the browser; the loop stops on the first
// tick because `dom::viewport` returns `None`.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(_period: std::time::Duration) {}

#[cfg(target_arch = "wasm32")]
mod dom {
    use sheet::Viewport;

    pub fn viewport() -> Option<Viewport> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        Some(Viewport {
            scroll_top: window.scroll_y().ok()?,
            client_height: root.client_height() as f64,
            scroll_height: root.scroll_height() as f64,
        })
    }

    pub fn scroll_by(dy: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_by_with_x_and_y(0.0, dy);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod dom {
    use sheet::Viewport;

    pub fn viewport() -> Option<Viewport> {
        None
    }

    pub fn scroll_by(_dy: f64) {}
}
