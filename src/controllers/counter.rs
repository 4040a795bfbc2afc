//! Stat counter binding.
//!
//! Each `.stat-number` starts counting once half of it is visible. The count
//! runs on its own interval, which is cancelled when the animation finishes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::HtmlElement;

use crate::config::CounterConfig;
use crate::error::SiteError;
use crate::state::counter::{CounterAnimation, CounterText};
use crate::state::viewport::{Band, OneShotWatch, Trigger};
use crate::util::dom;
use crate::util::frame::{self, ScrollFrames, Watch};

pub struct CounterController {
    _frames: ScrollFrames,
}

impl CounterController {
    pub fn install(config: &CounterConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let counters: Vec<HtmlElement> = dom::query_all(&doc, ".stat-number");

        let mut watch = OneShotWatch::<usize>::new(Trigger::fraction(Band::full(), config.visible_threshold));
        for i in 0..counters.len() {
            watch.watch(i);
        }
        log::debug!("{} counters waiting", watch.pending());

        let config = config.clone();
        let frames = frame::on_scroll_frames(move || {
            let vh = dom::viewport_height(&window);
            let fired = watch.poll(vh, |&i| counters.get(i).and_then(|el| dom::layout_rect(el)));
            for i in fired {
                if let Some(el) = counters.get(i) {
                    animate(el.clone(), &config);
                }
            }
            if watch.is_idle() { Watch::Done } else { Watch::Continue }
        })?;
        Ok(Self { _frames: frames })
    }
}

fn animate(el: HtmlElement, config: &CounterConfig) {
    let text = CounterText::parse(&el.text_content().unwrap_or_default());
    log::debug!("counting to {}", text.target);
    let mut animation = CounterAnimation::new(text, config.steps);
    let period = CounterAnimation::step_interval_ms(config.duration_ms, config.steps).max(1);

    // The interval owns the closure that must cancel it, so the handle lives
    // in a shared slot and is dropped from a zero-delay timeout.
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_for_tick = Rc::clone(&slot);
    let interval = Interval::new(period, move || {
        let Some(rendered) = animation.tick() else {
            return;
        };
        el.set_text_content(Some(&rendered));
        if animation.is_finished() {
            let slot = Rc::clone(&slot_for_tick);
            Timeout::new(0, move || {
                slot.borrow_mut().take();
            })
            .forget();
        }
    });
    *slot.borrow_mut() = Some(interval);
}
