use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    effects::transitions::{SlideDir, TransitionKind, parse_slide_dir, parse_transition},
    foundation::core::Millis,
    foundation::error::{CarouselError, CarouselResult},
};

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL: Millis = Millis(5000);
/// Default transition duration.
pub const DEFAULT_SPEED: Millis = Millis(500);

const MAX_SPEED: Millis = Millis(60_000);

/// Which interaction suspends auto-advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseOn {
    /// Pointer entering the container pauses; leaving resumes.
    #[default]
    Hover,
    /// Clicking the container toggles between paused and running.
    Click,
    /// A manual `next()` suspends auto-advance.
    Next,
    /// A manual `prev()` suspends auto-advance.
    Prev,
    /// A manual `go_to()` suspends auto-advance.
    To,
    /// Nothing pauses auto-advance.
    Never,
}

impl PauseOn {
    /// Parse a markup value.
    pub fn parse(s: &str) -> CarouselResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hover" => Ok(Self::Hover),
            "click" => Ok(Self::Click),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "to" | "goto" => Ok(Self::To),
            "never" | "none" | "false" => Ok(Self::Never),
            other => Err(CarouselError::config(format!("unknown pause trigger '{other}'"))),
        }
    }
}

/// Configuration snapshot captured when a controller is built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Options {
    /// Auto-advance interval; `None` disables auto-advance.
    pub interval: Option<Millis>,
    /// Interaction that suspends auto-advance.
    pub pause_on: PauseOn,
    /// Transition duration.
    pub speed: Millis,
    /// Transition effect.
    pub transition: TransitionKind,
    /// Slide axis hint.
    pub direction: SlideDir,
    /// Easing applied by animated drivers.
    pub ease: Ease,
    /// Start auto-advance during initialization.
    pub auto_start: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: Some(DEFAULT_INTERVAL),
            pause_on: PauseOn::default(),
            speed: DEFAULT_SPEED,
            transition: TransitionKind::default(),
            direction: SlideDir::default(),
            ease: Ease::default(),
            auto_start: true,
        }
    }
}

impl Options {
    /// Build options from `data-*` attributes, starting from the defaults.
    ///
    /// Attributes this reader does not know are ignored.
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> CarouselResult<Self> {
        let mut opts = Self::default();
        for (key, value) in attrs {
            match key.as_str() {
                "data-interval" => opts.interval = parse_interval(value)?,
                "data-pause" => opts.pause_on = PauseOn::parse(value)?,
                "data-speed" => opts.speed = parse_millis(key, value)?,
                "data-transition" => opts.transition = parse_transition(value)?,
                "data-direction" => opts.direction = parse_slide_dir(value)?,
                "data-ease" => opts.ease = Ease::parse(value)?,
                "data-autostart" => opts.auto_start = parse_bool(key, value)?,
                _ => {}
            }
        }
        opts.validate()?;
        Ok(opts)
    }

    /// Check value ranges.
    pub fn validate(&self) -> CarouselResult<()> {
        if self.interval == Some(Millis::ZERO) {
            return Err(CarouselError::validation(
                "interval must be > 0 when set (use null to disable)",
            ));
        }
        if self.speed > MAX_SPEED {
            return Err(CarouselError::validation(format!(
                "speed must be <= {MAX_SPEED}, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

fn parse_interval(value: &str) -> CarouselResult<Option<Millis>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "false" | "off" | "none" | "0" => Ok(None),
        _ => parse_millis("data-interval", value).map(Some),
    }
}

fn parse_millis(key: &str, value: &str) -> CarouselResult<Millis> {
    value
        .trim()
        .parse::<u64>()
        .map(Millis)
        .map_err(|e| CarouselError::config(format!("{key}: expected milliseconds, got '{value}': {e}")))
}

fn parse_bool(key: &str, value: &str) -> CarouselResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(CarouselError::config(format!(
            "{key}: expected true/false, got '{value}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/options.rs"]
mod tests;
