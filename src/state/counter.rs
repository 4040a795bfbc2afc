//! Stat counter animation.
//!
//! A counter reads its target from the digits of the element's initial text
//! and keeps every non-digit character as a suffix, so `"500+"` counts up to
//! `500` and renders `"<n>+"` on each step.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Target value and suffix extracted from counter text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterText {
    pub target: u64,
    pub suffix: String,
}

impl CounterText {
    /// Concatenate all ASCII digits as the target (saturating at `u64::MAX`);
    /// everything else is the suffix. No digits yields a target of 0.
    pub fn parse(text: &str) -> Self {
        let mut target: u64 = 0;
        let mut suffix = String::new();
        for ch in text.chars() {
            match ch.to_digit(10) {
                Some(d) if ch.is_ascii_digit() => {
                    target = target.saturating_mul(10).saturating_add(u64::from(d));
                }
                _ => suffix.push(ch),
            }
        }
        Self { target, suffix }
    }

    pub fn render(&self, value: u64) -> String {
        format!("{value}{}", self.suffix)
    }
}

/// Fixed-step count-up from 0 to a target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    text: CounterText,
    steps: u32,
    taken: u32,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(text: CounterText, steps: u32) -> Self {
        Self { text, steps: steps.max(1), taken: 0, current: 0.0, finished: false }
    }

    /// Milliseconds between steps for a total `duration_ms`.
    pub fn step_interval_ms(duration_ms: u32, steps: u32) -> u32 {
        duration_ms / steps.max(1)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the text to display. Returns `None` once
    /// the animation has completed, so a stray timer tick changes nothing.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        let target = self.text.target as f64;
        self.taken += 1;
        self.current += target / f64::from(self.steps);
        let value = if self.current >= target || self.taken >= self.steps {
            self.finished = true;
            self.text.target
        } else {
            self.current.floor() as u64
        };
        Some(self.text.render(value))
    }
}
