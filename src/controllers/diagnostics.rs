//! Diagnostics binding: runtime errors, page view, interactions, load
//! timing and scroll depth, all reported to one `DiagnosticsSink`.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ErrorEvent, PromiseRejectionEvent, Window};

use crate::config::DiagnosticsConfig;
use crate::error::SiteError;
use crate::state::diagnostics::{self, DiagnosticEvent, DiagnosticsSink, ErrorKind, ScrollDepthTracker};
use crate::util::dom::{self, Listener};
use crate::util::frame::{self, ScrollFrames, Watch};

pub struct DiagnosticsController {
    _listeners: Vec<Listener>,
    _depth: ScrollFrames,
}

impl DiagnosticsController {
    pub fn install(config: &DiagnosticsConfig, sink: Rc<dyn DiagnosticsSink>) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let mut listeners = Vec::with_capacity(3);

        {
            let sink = Rc::clone(&sink);
            listeners.push(Listener::new(window.as_ref(), "error", move |ev| {
                let message = ev.dyn_ref::<ErrorEvent>().map(ErrorEvent::message).unwrap_or_default();
                sink.emit(DiagnosticEvent::Error { kind: ErrorKind::Uncaught, message });
            })?);
        }
        {
            let sink = Rc::clone(&sink);
            listeners.push(Listener::new(window.as_ref(), "unhandledrejection", move |ev| {
                let message =
                    ev.dyn_ref::<PromiseRejectionEvent>().map(|e| describe(&e.reason())).unwrap_or_default();
                sink.emit(DiagnosticEvent::Error { kind: ErrorKind::UnhandledRejection, message });
            })?);
        }

        let path = window.location().pathname()?;
        sink.emit(DiagnosticEvent::PageView { path });

        {
            let sink = Rc::clone(&sink);
            let interactive = config.interactive_classes.clone();
            listeners.push(Listener::new(doc.as_ref(), "click", move |ev| {
                let Some(el) = dom::event_element(&ev) else {
                    return;
                };
                if diagnostics::is_interactive(class_names(&el).iter().map(String::as_str), &interactive) {
                    let label = el.text_content().unwrap_or_default().trim().to_owned();
                    sink.emit(DiagnosticEvent::Interaction { label });
                }
            })?);
        }

        {
            let sink = Rc::clone(&sink);
            let window = window.clone();
            dom::when_loaded(move || {
                // loadEventEnd is only populated after the load handlers return.
                Timeout::new(0, move || {
                    if let Some(millis) = load_duration(&window) {
                        sink.emit(DiagnosticEvent::PageLoad { millis });
                    }
                })
                .forget();
            })?;
        }

        let mut tracker = ScrollDepthTracker::new(config.scroll_milestones.clone());
        let depth = frame::on_scroll_frames(move || {
            let document_height = doc.body().map_or(0.0, |b| f64::from(b.scroll_height()));
            let percent =
                diagnostics::scroll_percent(dom::scroll_y(&window), document_height, dom::viewport_height(&window));
            if let Some(percent) = percent {
                for milestone in tracker.record(percent) {
                    sink.emit(DiagnosticEvent::ScrollDepth { percent: milestone });
                }
            }
            if tracker.is_complete() { Watch::Done } else { Watch::Continue }
        })?;

        Ok(Self { _listeners: listeners, _depth: depth })
    }
}

fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `loadEventEnd - loadEventStart` of the navigation timing entry.
fn load_duration(window: &Window) -> Option<f64> {
    let entry = window.performance()?.get_entries_by_type("navigation").get(0);
    if entry.is_undefined() {
        return None;
    }
    let field = |name: &str| {
        dom::logged("navigation timing", js_sys::Reflect::get(&entry, &JsValue::from_str(name))).and_then(|v| v.as_f64())
    };
    Some(field("loadEventEnd")? - field("loadEventStart")?)
}
