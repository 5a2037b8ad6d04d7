use std::fmt;

/// A point in time or a duration, in milliseconds.
///
/// The controller never reads a wall clock; hosts feed time in through a
/// scheduler and a transition driver.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Return `true` for a zero duration.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to fractional seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Stable identity of one rotatable item.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Borrow the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to one item in a controller's sequence.
///
/// Position is fixed at construction. Only the two markers change, and only when a
/// transition settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    index: usize,
    active: bool,
    hidden: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, index: usize, active: bool) -> Self {
        Self {
            id,
            index,
            active,
            hidden: !active,
        }
    }

    /// Stable identity.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// 0-based position in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Exposed "active" marker.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Assistive-visibility marker (`true` means hidden from assistive tech).
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.hidden = true;
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
        self.hidden = false;
    }
}

/// Direction tag attached to a transition and its events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward through the sequence.
    Next,
    /// Backward through the sequence.
    Prev,
}

impl Direction {
    /// Event-facing tag, `"next"` or `"prev"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }

    /// `+1.0` for [`Direction::Next`], `-1.0` for [`Direction::Prev`].
    pub fn sign(self) -> f64 {
        match self {
            Self::Next => 1.0,
            Self::Prev => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
