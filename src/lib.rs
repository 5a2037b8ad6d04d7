//! Carousel is a presentation-rotation controller.
//!
//! A [`RotationController`] owns an ordered, fixed set of items and moves between them on an
//! auto-advance timer or on command. Each move emits a vetoable `show` event, hands the visual
//! effect to a [`TransitionDriver`], and once the driver reports completion updates the active
//! item and emits `shown`.
//!
//! - Build [`Options`] directly or from `data-*` attributes
//! - Wire a controller to an [`EventBus`], a [`TransitionDriver`] and a [`Scheduler`]
//! - Or load a whole [`Page`] and let discovery build one [`Stage`] per carousel
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod scene;
mod session;

pub use crate::animation::ease::Ease;
pub use crate::effects::transitions::{
    Pose, SlideDir, TransitionFrame, TransitionKind, parse_slide_dir, parse_transition, sample,
};
pub use crate::foundation::core::{Direction, Item, ItemId, Millis};
pub use crate::foundation::error::{CarouselError, CarouselResult};
pub use crate::scene::markup::{
    Action, CAROUSEL_ATTR, ContainerDef, ItemDef, PageDef, ScriptStep,
};
pub use crate::scene::options::{DEFAULT_INTERVAL, DEFAULT_SPEED, Options, PauseOn};
pub use crate::session::controller::{RotationController, RunMode, Trigger};
pub use crate::session::driver::{
    InstantDriver, Playback, TimedDriver, TransitionDriver, TransitionRequest, TransitionTicket,
};
pub use crate::session::events::{
    CarouselEvent, EventBus, EventKind, ListenerBus, ListenerId, Recorded, RecordingBus, Verdict,
};
pub use crate::session::interaction::{InputEvent, InputOutcome, Key};
pub use crate::session::page::Page;
pub use crate::session::stage::{Stage, StageController};
pub use crate::session::timer::{Scheduler, TimerHandle, VirtualScheduler};
