use crate::{
    scene::options::PauseOn,
    session::controller::{RotationController, RunMode},
    session::driver::TransitionDriver,
    session::events::EventBus,
    session::timer::Scheduler,
};

/// A key as delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Anything else, left for default handling.
    Other(String),
}

impl Key {
    /// Interpret a host key name (`ArrowLeft`, `left`, key code `37`, ...).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrowleft" | "left" | "37" => Self::ArrowLeft,
            "arrowright" | "right" | "39" => Self::ArrowRight,
            _ => Self::Other(s.trim().to_owned()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Key> for String {
    fn from(k: Key) -> Self {
        match k {
            Key::ArrowLeft => "ArrowLeft".to_owned(),
            Key::ArrowRight => "ArrowRight".to_owned(),
            Key::Other(s) => s,
        }
    }
}

/// Input the host forwards from the container.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// A key was pressed while the container had focus.
    KeyDown(Key),
    /// Pointer entered the container.
    PointerEnter,
    /// Pointer left the container.
    PointerLeave,
    /// Container was clicked.
    Click,
}

/// Whether the host should run its default handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Consumed; suppress default handling.
    Handled,
    /// Not ours; let default handling run.
    Ignored,
}

impl<B, D, S> RotationController<B, D, S>
where
    B: EventBus,
    D: TransitionDriver,
    S: Scheduler,
{
    /// Route one input through the public navigation and timer API.
    ///
    /// Arrow keys always navigate. Pointer bindings only apply when they are the configured pause
    /// trigger: hover pauses on enter and starts auto-advance on leave, click toggles.
    pub fn handle_input(&mut self, input: &InputEvent) -> InputOutcome {
        if self.is_detached() {
            return InputOutcome::Ignored;
        }
        let pause_on = self.options().pause_on;
        match input {
            InputEvent::KeyDown(Key::ArrowLeft) => {
                self.prev();
                InputOutcome::Handled
            }
            InputEvent::KeyDown(Key::ArrowRight) => {
                self.next();
                InputOutcome::Handled
            }
            InputEvent::KeyDown(Key::Other(_)) => InputOutcome::Ignored,
            InputEvent::PointerEnter if pause_on == PauseOn::Hover => {
                self.pause();
                InputOutcome::Handled
            }
            InputEvent::PointerLeave if pause_on == PauseOn::Hover => {
                self.start();
                InputOutcome::Handled
            }
            InputEvent::Click if pause_on == PauseOn::Click => {
                if self.run_mode() == RunMode::Running {
                    self.pause();
                } else {
                    self.start();
                }
                InputOutcome::Handled
            }
            InputEvent::PointerEnter | InputEvent::PointerLeave | InputEvent::Click => {
                InputOutcome::Ignored
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/interaction.rs"]
mod tests;
