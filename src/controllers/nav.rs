//! Navigation binding: mobile menu, smooth anchor scrolling, active link
//! highlighting and the scrolled header tint.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config::NavConfig;
use crate::error::SiteError;
use crate::state::nav::{self, LinkAction, MenuEvent, MenuState, SectionTracker};
use crate::state::theme::ThemePreference;
use crate::state::viewport::{Band, Trigger};
use crate::util::dom::{self, Listener};
use crate::util::frame::{self, ScrollFrames, Watch};

const ACTIVE: &str = "active";

/// Shared menu state plus the two elements that render it.
#[derive(Clone)]
struct Menu {
    state: Rc<Cell<MenuState>>,
    hamburger: HtmlElement,
    panel: HtmlElement,
    body: HtmlElement,
}

impl Menu {
    fn send(&self, event: MenuEvent) {
        let prev = self.state.get();
        let next = prev.next(event);
        if next == prev {
            return;
        }
        self.state.set(next);
        let open = next.is_open();
        dom::set_class(&self.hamburger, ACTIVE, open);
        dom::set_class(&self.panel, ACTIVE, open);
        dom::set_style(&self.body, "overflow", next.body_overflow());
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.hamburger.contains(target) || self.panel.contains(target)
    }
}

pub struct NavController {
    _listeners: Vec<Listener>,
    _frames: ScrollFrames,
}

impl NavController {
    pub fn install(config: &NavConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let body = dom::body(&doc)?;
        let links: Vec<HtmlElement> = dom::query_all(&doc, ".nav-link");
        let header: Option<HtmlElement> = dom::query_all(&doc, ".header").into_iter().next();

        let menu = match (dom::by_id::<HtmlElement>(&doc, "hamburger"), dom::query::<HtmlElement>(&doc, ".nav-menu")) {
            (Ok(hamburger), Ok(panel)) => {
                Some(Menu { state: Rc::new(Cell::new(MenuState::Closed)), hamburger, panel, body })
            }
            _ => {
                log::debug!("no mobile menu on this page");
                None
            }
        };

        let mut listeners = Vec::new();
        if let Some(menu) = &menu {
            let m = menu.clone();
            listeners.push(Listener::new(menu.hamburger.as_ref(), "click", move |_| {
                m.send(MenuEvent::HamburgerClick);
            })?);

            let m = menu.clone();
            listeners.push(Listener::new(doc.as_ref(), "click", move |ev| {
                let target = ev.target().and_then(dom::cast::<Node>);
                if !m.contains(target.as_ref()) {
                    m.send(MenuEvent::OutsideClick);
                }
            })?);
        }

        for link in &links {
            let link_el = link.clone();
            let menu = menu.clone();
            let window = window.clone();
            let doc = doc.clone();
            let header = header.clone();
            let margin = config.scroll_margin_px;
            listeners.push(Listener::new(link.as_ref(), "click", move |ev| {
                let href = link_el.get_attribute("href").unwrap_or_default();
                let event = match nav::link_action(&href) {
                    LinkAction::Follow => MenuEvent::LinkClick,
                    LinkAction::Scroll(section) => {
                        ev.prevent_default();
                        match section.and_then(|id| doc.get_element_by_id(id)) {
                            Some(target) => scroll_to(&window, &target, header.as_ref(), margin),
                            None => log::debug!("no section for {href}"),
                        }
                        MenuEvent::Navigated
                    }
                };
                if let Some(menu) = &menu {
                    menu.send(event);
                }
            })?);
        }

        let frames = track_sections(config, window, doc, links, header)?;
        Ok(Self { _listeners: listeners, _frames: frames })
    }
}

fn scroll_to(window: &Window, target: &Element, header: Option<&HtmlElement>, margin: f64) {
    let header_height = header.map_or(0.0, |h| f64::from(h.offset_height()));
    let doc_top = dom::rect_of(target).top + dom::scroll_y(window);
    let options = ScrollToOptions::new();
    options.set_top(nav::anchor_scroll_top(doc_top, header_height, margin));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Per-frame section tracking and header tint. Runs for the page lifetime.
fn track_sections(
    config: &NavConfig,
    window: Window,
    doc: Document,
    links: Vec<HtmlElement>,
    header: Option<HtmlElement>,
) -> Result<ScrollFrames, SiteError> {
    let sections: Vec<Element> = dom::query_all::<Element>(&doc, "section[id]")
        .into_iter()
        .filter(|s| links.iter().any(|l| link_points_at(l, &s.id())))
        .collect();
    let trigger = Trigger::fraction(Band::inset(config.section_band_inset_px), config.section_threshold);
    let mut tracker = SectionTracker::new(trigger, sections.iter().map(Element::id).collect());
    let scrolled_after = config.header_scrolled_after_px;

    frame::on_scroll_frames(move || {
        let vh = dom::viewport_height(&window);
        let rects: Vec<_> = sections.iter().map(dom::layout_rect).collect();
        if let Some(active) = tracker.observe(&rects, vh) {
            for link in &links {
                let on = link_points_at(link, active);
                dom::set_class(link, ACTIVE, on);
            }
        }

        if let Some(header) = &header {
            let theme = current_theme(&doc);
            let tint = nav::header_background(dom::scroll_y(&window), scrolled_after, theme);
            dom::set_style(header, "background", tint);
        }
        Watch::Continue
    })
}

fn link_points_at(link: &HtmlElement, section_id: &str) -> bool {
    link.get_attribute("href").as_deref().and_then(nav::anchor_target) == Some(section_id)
}

fn current_theme(doc: &Document) -> ThemePreference {
    let attr = doc.document_element().and_then(|root| root.get_attribute("data-theme"));
    ThemePreference::from_dark(attr.as_deref() == Some(ThemePreference::Dark.as_str()))
}
