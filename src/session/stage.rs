use crate::{
    effects::transitions::TransitionFrame,
    foundation::core::{ItemId, Millis},
    scene::options::Options,
    session::controller::RotationController,
    session::driver::TimedDriver,
    session::events::{ListenerBus, RecordingBus},
    session::interaction::{InputEvent, InputOutcome},
    session::timer::VirtualScheduler,
};

/// Controller wired to the in-process bus, timed driver and virtual clock.
pub type StageController = RotationController<RecordingBus<ListenerBus>, TimedDriver, VirtualScheduler>;

/// One container's controller plus the single-threaded loop that feeds it time.
#[derive(Debug)]
pub struct Stage {
    id: String,
    controller: StageController,
}

impl Stage {
    /// Build (but do not initialize) a stage.
    ///
    /// `animated` is the driver's capability flag; without it every transition completes
    /// immediately.
    pub fn new(
        id: impl Into<String>,
        items: Vec<ItemId>,
        initial_active: Option<usize>,
        options: Options,
        animated: bool,
    ) -> Self {
        Self {
            id: id.into(),
            controller: RotationController::new(
                items,
                initial_active,
                options,
                RecordingBus::new(ListenerBus::new()),
                TimedDriver::new(animated),
                VirtualScheduler::new(),
            ),
        }
    }

    /// Container identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current time on the stage clock.
    pub fn now(&self) -> Millis {
        self.controller.scheduler().now()
    }

    /// The controller.
    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    /// The controller, mutably.
    pub fn controller_mut(&mut self) -> &mut StageController {
        &mut self.controller
    }

    /// Forward one input to the controller.
    pub fn dispatch(&mut self, input: &InputEvent) -> InputOutcome {
        self.controller.handle_input(input)
    }

    /// Sample the transition currently playing, if any.
    pub fn frame(&self) -> Option<TransitionFrame> {
        let ticket = self.controller.in_flight()?;
        self.controller.driver().frame(ticket)
    }

    /// Run the loop until `now`, delivering every due completion and timer in time order.
    ///
    /// At equal times driver completions are delivered before timers.
    pub fn advance_to(&mut self, now: Millis) {
        loop {
            let due = [
                self.controller.driver().next_deadline(),
                self.controller.scheduler().next_deadline(),
            ]
            .into_iter()
            .flatten()
            .filter(|at| *at <= now)
            .min();
            let Some(at) = due else {
                break;
            };

            let done = self.controller.driver_mut().advance_to(at);
            let fired = self.controller.scheduler_mut().advance_to(at);
            for ticket in done {
                self.controller.complete_transition(ticket);
            }
            for handle in fired {
                self.controller.on_timer(handle);
            }
        }
        let done = self.controller.driver_mut().advance_to(now);
        let fired = self.controller.scheduler_mut().advance_to(now);
        debug_assert!(done.is_empty() && fired.is_empty());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/stage.rs"]
mod tests;
