use kurbo::Vec2;

use crate::{
    foundation::core::Direction,
    foundation::error::{CarouselError, CarouselResult},
};

/// Visual effect played between the outgoing and incoming item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Instant swap.
    #[default]
    None,
    /// Directional slide; see [`SlideDir`].
    Slide,
    /// Outgoing fades out while incoming fades in.
    CrossFade,
}

/// Axis and sense a slide travels in when advancing with [`Direction::Next`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDir {
    /// Outgoing leaves towards the left.
    #[default]
    Left,
    /// Outgoing leaves towards the right.
    Right,
    /// Outgoing leaves upwards.
    Up,
    /// Outgoing leaves downwards.
    Down,
}

impl SlideDir {
    /// Unit vector (in container-size fractions) the outgoing item travels along.
    pub fn exit_vector(self, direction: Direction) -> Vec2 {
        let base = match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
        };
        base * direction.sign()
    }
}

/// Parse a transition kind from markup (`none`, `slide`, `xfade`, ...).
pub fn parse_transition(s: &str) -> CarouselResult<TransitionKind> {
    let kind = s.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(CarouselError::config("transition kind must be non-empty"));
    }

    match kind.as_str() {
        "none" | "instant" => Ok(TransitionKind::None),
        "slide" => Ok(TransitionKind::Slide),
        "xfade" | "crossfade" | "cross-fade" | "cross_fade" | "fade" => {
            Ok(TransitionKind::CrossFade)
        }
        _ => Err(CarouselError::config(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

/// Parse a slide direction hint from markup.
pub fn parse_slide_dir(s: &str) -> CarouselResult<SlideDir> {
    match s.trim().to_ascii_lowercase().as_str() {
        "left" | "" => Ok(SlideDir::Left),
        "right" => Ok(SlideDir::Right),
        "up" => Ok(SlideDir::Up),
        "down" => Ok(SlideDir::Down),
        other => Err(CarouselError::config(format!(
            "unknown slide direction '{other}'"
        ))),
    }
}

/// Placement of one item at a point in a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Offset from the resting position, in container-size fractions.
    pub offset: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Pose {
    /// Resting, fully visible.
    pub const SHOWN: Self = Self {
        offset: Vec2::ZERO,
        opacity: 1.0,
    };

    /// Resting, fully transparent.
    pub const HIDDEN: Self = Self {
        offset: Vec2::ZERO,
        opacity: 0.0,
    };
}

/// Outgoing and incoming placement at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionFrame {
    /// Item being replaced.
    pub outgoing: Pose,
    /// Item being presented.
    pub incoming: Pose,
}

/// Sample a transition at eased progress `t` in `[0, 1]`.
pub fn sample(kind: TransitionKind, dir: SlideDir, direction: Direction, t: f64) -> TransitionFrame {
    let t = t.clamp(0.0, 1.0);
    match kind {
        TransitionKind::None => TransitionFrame {
            outgoing: Pose::HIDDEN,
            incoming: Pose::SHOWN,
        },
        TransitionKind::Slide => {
            let exit = dir.exit_vector(direction);
            TransitionFrame {
                outgoing: Pose {
                    offset: exit * t,
                    opacity: 1.0,
                },
                incoming: Pose {
                    offset: -exit * (1.0 - t),
                    opacity: 1.0,
                },
            }
        }
        TransitionKind::CrossFade => TransitionFrame {
            outgoing: Pose {
                offset: Vec2::ZERO,
                opacity: 1.0 - t,
            },
            incoming: Pose {
                offset: Vec2::ZERO,
                opacity: t,
            },
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
