//! Parallax binding for the hero's floating shapes.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::config::ParallaxConfig;
use crate::error::SiteError;
use crate::state::parallax::{self, ParallaxField};
use crate::util::dom::{self, Listener};
use crate::util::frame;

pub struct ParallaxController {
    _listener: Option<Listener>,
}

impl ParallaxController {
    pub fn install(config: &ParallaxConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let shapes: Rc<Vec<HtmlElement>> = Rc::new(dom::query_all(&doc, ".floating-elements .floating-shape"));
        let field = ParallaxField::new(shapes.len(), config.speed_min, config.speed_span, js_sys::Math::random);
        if field.is_empty() {
            log::debug!("no parallax layers");
            return Ok(Self { _listener: None });
        }
        let field = Rc::new(RefCell::new(field));

        let win = window.clone();
        let listener = Listener::passive(window.as_ref(), "scroll", move |_| {
            if !field.borrow_mut().scrolled() {
                return;
            }
            let field = Rc::clone(&field);
            let shapes = Rc::clone(&shapes);
            let win = win.clone();
            frame::request_frame(move || {
                let offsets = field.borrow_mut().frame(dom::scroll_y(&win));
                for (shape, offset) in shapes.iter().zip(offsets) {
                    dom::set_style(shape, "transform", &parallax::translate_y(offset));
                }
            });
        })?;
        Ok(Self { _listener: Some(listener) })
    }
}
