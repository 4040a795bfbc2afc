//! DOM lookup and event listener helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers bind to markup they do not own. Lookups return `SiteError`
//! instead of panicking so a page missing one widget still boots the rest,
//! and `Listener` removes its callback from the target when dropped.
//!
//! Class, attribute and style writes go through the helpers below, which log
//! a rejected call at `debug` instead of discarding it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::SiteError;
use crate::state::viewport::{self, Rect};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::Unavailable("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::Unavailable("document"))
}

pub fn body(doc: &Document) -> Result<HtmlElement, SiteError> {
    doc.body().ok_or_else(|| SiteError::MissingElement("body".to_owned()))
}

/// `value` as a `T`, when it is one.
pub fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    value.has_type::<T>().then(|| value.unchecked_into())
}

/// Value of a browser call, logging the rejection when it fails.
pub fn logged<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{what} failed: {e:?}");
            None
        }
    }
}

/// Element by id, cast to `T`.
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, SiteError> {
    doc.get_element_by_id(id)
        .and_then(cast::<T>)
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Result<T, SiteError> {
    doc.query_selector(selector)?
        .and_then(cast::<T>)
        .ok_or_else(|| SiteError::MissingElement(selector.to_owned()))
}

/// All elements matching `selector` that cast to `T`, in document order.
pub fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::warn!("invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(cast::<T>).collect()
}

pub fn viewport_height(window: &Window) -> f64 {
    logged("innerHeight", window.inner_height()).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport-relative vertical extent of `el`.
pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.top(), r.bottom())
}

/// Extent of `el` if it is rendered; `None` for hidden or detached elements.
pub fn layout_rect(el: &Element) -> Option<Rect> {
    viewport::laid_out(el.get_client_rects().length(), rect_of(el))
}

pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        if let Err(e) = style.set_property(name, value) {
            log::debug!("style {name} rejected: {e:?}");
        }
    }
}

pub fn set_style(el: &HtmlElement, name: &str, value: &str) {
    set_styles(el, &[(name, value)]);
}

pub fn clear_style(el: &HtmlElement, name: &str) {
    if let Err(e) = el.style().remove_property(name) {
        log::debug!("style {name} not removed: {e:?}");
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} rejected: {e:?}");
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::debug!("attribute {name} rejected: {e:?}");
    }
}

pub fn remove_attr(el: &Element, name: &str) {
    if let Err(e) = el.remove_attribute(name) {
        log::debug!("attribute {name} not removed: {e:?}");
    }
}

/// Element the event was dispatched to, if it is an element.
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(cast::<Element>)
}

/// Registered event callback; unregisters itself on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Same as `new`, registered as passive (never calls `preventDefault`).
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}

fn listen_once<F>(target: &EventTarget, event: &str, f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(event, callback.unchecked_ref(), &options)?;
    Ok(())
}

/// Run `f` once the document has been parsed.
pub fn when_ready<F>(f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    listen_once(doc.as_ref(), "DOMContentLoaded", f)
}

/// Run `f` once the window `load` event has fired, immediately if it already has.
pub fn when_loaded<F>(f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() == "complete" {
        f();
        return Ok(());
    }
    listen_once(window()?.as_ref(), "load", f)
}
