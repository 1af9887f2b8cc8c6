//! Scroll, reveal and easing math shared by the page sections.

pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const REVEAL_OFFSET: f64 = 150.0;
pub const ENTRANCE_START: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Fraction of the section's travel through the viewport. Unclamped.
pub fn section_progress(scroll_y: f64, bounds: SectionBounds, viewport_height: f64) -> f64 {
    let span = bounds.height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }

    (scroll_y - (bounds.top - viewport_height)) / span
}

/// Progress while any part of the section is on screen, `None` otherwise.
pub fn parallax_progress(
    scroll_y: f64,
    bounds: SectionBounds,
    viewport_height: f64,
) -> Option<f64> {
    let enters = bounds.top - viewport_height;
    let leaves = bounds.top + bounds.height;

    (scroll_y > enters && scroll_y < leaves)
        .then(|| section_progress(scroll_y, bounds, viewport_height))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// `reveal`: follows the element in both directions.
    Toggle,
    /// `reveal-once`: stays active after the first entrance.
    Once,
}

impl RevealMode {
    pub fn marker_class(self) -> &'static str {
        match self {
            Self::Toggle => "reveal",
            Self::Once => "reveal-once",
        }
    }
}

pub fn reveal_state(mode: RevealMode, element_top: f64, viewport_height: f64, active: bool) -> bool {
    match mode {
        RevealMode::Toggle => element_top < viewport_height - REVEAL_OFFSET,
        RevealMode::Once => active || element_top < viewport_height * ENTRANCE_START,
    }
}

pub fn stagger_style(index: usize, step_seconds: f64) -> String {
    format!("--reveal-delay: {:.2}s;", index as f64 * step_seconds)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    Top,
    Element(&'a str),
}

/// Selector to scroll to for an in-page link, `None` for anything else.
pub fn anchor_target(href: &str) -> Option<AnchorTarget<'_>> {
    match href {
        "#" => Some(AnchorTarget::Top),
        _ if href.starts_with('#') => Some(AnchorTarget::Element(href)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    Power2Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A scalar moving from `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    pub fn settled(value: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration,
            ease,
        }
    }

    pub fn value_at(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }

        let t = (now - self.start) / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Restarts from wherever the tween is at `now`.
    pub fn retarget(&mut self, now: f64, to: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
    }
}
