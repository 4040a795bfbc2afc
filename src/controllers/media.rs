//! Deferred image loading binding.

use web_sys::{HtmlElement, HtmlImageElement};

use crate::config::MediaConfig;
use crate::error::SiteError;
use crate::state::media::{self, STAGED_SRC_ATTR};
use crate::util::dom;
use crate::util::frame::{self, ScrollFrames, Watch};

pub struct MediaController {
    _frames: ScrollFrames,
}

impl MediaController {
    pub fn install(config: &MediaConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;

        let mut hinted = 0;
        for (index, img) in dom::query_all::<HtmlElement>(&doc, "img").iter().enumerate() {
            if media::wants_lazy_hint(index, config.eager_image_count) {
                dom::set_attr(img, "loading", "lazy");
                hinted += 1;
            }
        }

        let staged: Vec<HtmlImageElement> = dom::query_all(&doc, &format!("img[{STAGED_SRC_ATTR}]"));
        let mut watch = media::image_watch::<usize>();
        for i in 0..staged.len() {
            watch.watch(i);
        }
        log::debug!("{hinted} images hinted lazy, {} staged", watch.pending());

        let frames = frame::on_scroll_frames(move || {
            let vh = dom::viewport_height(&window);
            let fired = watch.poll(vh, |&i| staged.get(i).and_then(|img| dom::layout_rect(img)));
            for i in fired {
                let Some(img) = staged.get(i) else { continue };
                if let Some(src) = media::staged_source(img.get_attribute(STAGED_SRC_ATTR)) {
                    img.set_src(&src);
                }
                dom::remove_attr(img, STAGED_SRC_ATTR);
            }
            if watch.is_idle() { Watch::Done } else { Watch::Continue }
        })?;
        Ok(Self { _frames: frames })
    }
}
