//! Document head and page-level integrations: structured data, preload
//! hints, the section meta description, analytics config and service
//! worker registration.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlHeadElement, HtmlMetaElement, Window};

use crate::config::HeadConfig;
use crate::error::SiteError;
use crate::state::head;
use crate::state::nav;
use crate::util::dom;

/// Viewport offset used to decide which section the page opened on.
const SECTION_LINE_PX: f64 = 100.0;

pub struct HeadController;

impl HeadController {
    pub fn install(config: &HeadConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let head_el = doc.head().ok_or_else(|| SiteError::MissingElement("head".to_owned()))?;

        // Each step stands alone; one failing leaves the others in place.
        step("structured data", append_structured_data(&window, &doc, &head_el, config));
        step("preload hints", append_preloads(&doc, &head_el, &config.preload_styles));
        update_meta_description(&doc);
        configure_analytics(&window, &config.analytics_measurement_id);
        step("service worker", register_service_worker(&window, config.service_worker_url.clone()));
        Ok(Self)
    }
}

fn step(name: &str, result: Result<(), SiteError>) {
    if let Err(e) = result {
        log::warn!("{name} skipped: {e}");
    }
}

fn append_structured_data(
    window: &Window,
    doc: &Document,
    head_el: &HtmlHeadElement,
    config: &HeadConfig,
) -> Result<(), SiteError> {
    let origin = window.location().origin()?;
    let script = doc.create_element("script")?;
    script.set_attribute("type", "application/ld+json")?;
    script.set_text_content(Some(&head::structured_data(config, &origin).to_string()));
    head_el.append_child(&script)?;
    Ok(())
}

fn append_preloads(doc: &Document, head_el: &HtmlHeadElement, hrefs: &[String]) -> Result<(), SiteError> {
    for href in hrefs {
        let link = doc.create_element("link")?;
        for (name, value) in head::preload_attributes(href) {
            link.set_attribute(name, value)?;
        }
        head_el.append_child(&link)?;
    }
    Ok(())
}

fn update_meta_description(doc: &Document) {
    let Ok(meta) = dom::query::<HtmlMetaElement>(doc, "meta[name=\"description\"]") else {
        log::debug!("no meta description to update");
        return;
    };
    let sections: Vec<Element> = dom::query_all(doc, "section[id]");
    let ids: Vec<String> = sections.iter().map(Element::id).collect();
    let measured: Vec<(&str, _)> = ids.iter().map(String::as_str).zip(sections.iter().map(dom::rect_of)).collect();
    let section = nav::current_section(&measured, SECTION_LINE_PX);
    if let Some(description) = nav::section_description(section) {
        meta.set_content(description);
    }
}

fn configure_analytics(window: &Window, measurement_id: &str) {
    let gtag = dom::logged("gtag lookup", js_sys::Reflect::get(window, &JsValue::from_str("gtag")));
    let Some(gtag) = gtag.and_then(dom::cast::<js_sys::Function>) else {
        log::debug!("analytics not loaded");
        return;
    };
    if let Err(e) = gtag.call2(&JsValue::NULL, &JsValue::from_str("config"), &JsValue::from_str(measurement_id)) {
        log::warn!("analytics config failed: {e:?}");
    }
}

fn register_service_worker(window: &Window, url: String) -> Result<(), SiteError> {
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        log::debug!("service workers unsupported");
        return Ok(());
    }
    dom::when_loaded(move || {
        let promise = navigator.service_worker().register(&url);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(registration) => log::info!("SW registered: {registration:?}"),
                Err(e) => log::warn!("SW registration failed: {e:?}"),
            }
        });
    })
}
