use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::Millis,
    foundation::error::{CarouselError, CarouselResult},
    scene::markup::{Action, PageDef, ScriptStep},
    session::stage::Stage,
};

/// Every discovered carousel on a page, sharing one timeline.
#[derive(Debug)]
pub struct Page {
    stages: Vec<Stage>,
    script: Vec<ScriptStep>,
    cursor: usize,
}

impl Page {
    /// Load, discover and initialize a page from a JSON file.
    pub fn from_path(path: impl AsRef<Path>, animated: bool) -> CarouselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CarouselError::Other(
                anyhow::Error::from(e).context(format!("open page JSON '{}'", path.display())),
            )
        })?;
        Self::from_def(&PageDef::from_reader(BufReader::new(f))?, animated)
    }

    /// Build and initialize one stage per qualifying container.
    #[tracing::instrument(skip(def), fields(containers = def.containers.len()))]
    pub fn from_def(def: &PageDef, animated: bool) -> CarouselResult<Self> {
        def.validate()?;
        let mut stages = Vec::new();
        for container in def.discover() {
            let options = container.options()?;
            let (items, active) = container.item_ids()?;
            let mut stage = Stage::new(container.id.clone(), items, active, options, animated);
            stage.controller_mut().initialize();
            tracing::debug!(container = %container.id, "carousel discovered");
            stages.push(stage);
        }

        let mut script = def.script.clone();
        script.sort_by_key(|s| s.at);
        Ok(Self {
            stages,
            script,
            cursor: 0,
        })
    }

    /// Stages in document order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Look up a stage by container id.
    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id() == id)
    }

    /// Look up a stage by container id, mutably.
    pub fn stage_mut(&mut self, id: &str) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|s| s.id() == id)
    }

    /// Advance every stage to `now` without running the script.
    pub fn advance_to(&mut self, now: Millis) {
        for stage in &mut self.stages {
            stage.advance_to(now);
        }
    }

    /// Replay script steps due by `until`, interleaved with the event loop, then settle at `until`.
    pub fn run(&mut self, until: Millis) {
        while let Some(step) = self.script.get(self.cursor) {
            if step.at > until {
                break;
            }
            let step = step.clone();
            self.cursor += 1;
            self.advance_to(step.at);
            if let Some(stage) = self.stage_mut(&step.container) {
                apply(stage, &step.action);
            }
        }
        self.advance_to(until);
    }
}

fn apply(stage: &mut Stage, action: &Action) {
    tracing::debug!(container = stage.id(), ?action, "script step");
    let ctl = stage.controller_mut();
    match action {
        Action::Next => {
            ctl.next();
        }
        Action::Prev => {
            ctl.prev();
        }
        Action::GoTo(i) => {
            ctl.go_to(*i);
        }
        Action::Start => {
            ctl.start();
        }
        Action::Pause => {
            ctl.pause();
        }
        Action::Stop => {
            ctl.stop();
        }
        Action::Teardown => ctl.teardown(),
        Action::Input(input) => {
            ctl.handle_input(input);
        }
    }
}
