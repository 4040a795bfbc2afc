//! Animation-frame scheduling and scroll-driven frame loops.
//!
//! ARCHITECTURE
//! ============
//! `on_scroll_frames` coalesces scroll and resize bursts into at most one
//! callback per rendered frame. The callback reports whether it still has
//! work; once it returns `Watch::Done` the listeners are removed, which is how
//! one-shot watchers detach after their last target fires.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::SiteError;
use crate::state::viewport::FrameGate;
use crate::util::dom::{self, Listener};

/// Whether a frame loop keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Done,
}

/// Run `f` on the next animation frame, or immediately when frames are
/// unavailable.
pub fn request_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        f();
        return;
    };

    let pending = Rc::new(RefCell::new(Some(f)));
    let pending_for_cb = Rc::clone(&pending);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let next = pending_for_cb.borrow_mut().take();
        if let Some(f) = next {
            f();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        let next = pending.borrow_mut().take();
        if let Some(f) = next {
            f();
        }
    }
}

struct FrameLoop {
    gate: FrameGate,
    tick: Box<dyn FnMut() -> Watch>,
    listeners: Vec<Listener>,
}

/// Handle to a running scroll frame loop.
#[derive(Clone)]
pub struct ScrollFrames {
    inner: Rc<RefCell<FrameLoop>>,
}

/// Call `tick` once now and then once per frame after any scroll or resize.
pub fn on_scroll_frames<F>(tick: F) -> Result<ScrollFrames, SiteError>
where
    F: FnMut() -> Watch + 'static,
{
    let window = dom::window()?;
    let inner = Rc::new(RefCell::new(FrameLoop { gate: FrameGate::default(), tick: Box::new(tick), listeners: Vec::new() }));
    let frames = ScrollFrames { inner };

    let initial = (frames.inner.borrow_mut().tick)();
    if initial == Watch::Done {
        return Ok(frames);
    }

    let mut listeners = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let inner = Rc::clone(&frames.inner);
        listeners.push(Listener::passive(window.as_ref(), event, move |_| schedule(&inner))?);
    }
    frames.inner.borrow_mut().listeners = listeners;
    Ok(frames)
}

fn schedule(inner: &Rc<RefCell<FrameLoop>>) {
    if !inner.borrow_mut().gate.request() {
        return;
    }
    let inner = Rc::clone(inner);
    request_frame(move || {
        let outcome = {
            let mut frame_loop = inner.borrow_mut();
            frame_loop.gate.complete();
            (frame_loop.tick)()
        };
        if outcome == Watch::Done {
            let listeners = std::mem::take(&mut inner.borrow_mut().listeners);
            drop(listeners);
        }
    });
}
