//! Scroll reveal binding.

use web_sys::HtmlElement;

use crate::config::RevealConfig;
use crate::error::SiteError;
use crate::state::reveal::{self, HIDDEN_STYLE, REVEAL_CLASS, REVEAL_GROUPS, REVEALED_CLASS, SHOWN_STYLE};
use crate::util::dom;
use crate::util::frame::{self, ScrollFrames, Watch};

pub struct RevealController {
    _frames: ScrollFrames,
}

impl RevealController {
    pub fn install(config: &RevealConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;

        // An element matching several groups is prepared once, by its first group.
        let mut targets: Vec<HtmlElement> = Vec::new();
        for selector in REVEAL_GROUPS {
            for (index, el) in dom::query_all::<HtmlElement>(&doc, selector).into_iter().enumerate() {
                if targets.contains(&el) {
                    continue;
                }
                dom::set_styles(&el, &HIDDEN_STYLE);
                dom::set_style(&el, "animation-delay", &reveal::stagger_delay(index, config.stagger_secs));
                dom::set_class(&el, REVEAL_CLASS, true);
                targets.push(el);
            }
        }
        let mut watch = reveal::reveal_watch::<usize>(config.bottom_inset_px);
        for i in 0..targets.len() {
            watch.watch(i);
        }
        log::debug!("{} reveal targets", watch.pending());

        let frames = frame::on_scroll_frames(move || {
            let vh = dom::viewport_height(&window);
            let fired = watch.poll(vh, |&i| targets.get(i).and_then(|el| dom::layout_rect(el)));
            for i in fired {
                if let Some(el) = targets.get(i) {
                    dom::set_styles(el, &SHOWN_STYLE);
                    dom::set_class(el, REVEALED_CLASS, true);
                }
            }
            if watch.is_idle() { Watch::Done } else { Watch::Continue }
        })?;
        Ok(Self { _frames: frames })
    }
}
