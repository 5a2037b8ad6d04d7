use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::{ItemId, Millis},
    foundation::error::{CarouselError, CarouselResult},
    scene::options::Options,
    session::interaction::InputEvent,
};

/// Attribute that marks a container for auto-discovery.
pub const CAROUSEL_ATTR: &str = "data-carousel";

/// A page: containers plus an optional scripted interaction timeline.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageDef {
    /// Candidate containers, in document order.
    #[serde(default)]
    pub containers: Vec<ContainerDef>,
    /// Actions to replay, ordered by time when run.
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

/// One container element.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContainerDef {
    /// Element id, used to address the container from the script.
    pub id: String,
    /// Element attributes; `data-*` entries configure the controller.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Child items in document order.
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// One child item.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemDef {
    /// Item identity.
    pub id: String,
    /// Already presented when the page loads.
    #[serde(default)]
    pub active: bool,
}

/// A scripted call against one container.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    /// When to perform the action.
    pub at: Millis,
    /// Target container id.
    pub container: String,
    /// What to do.
    pub action: Action,
}

/// Calls a script may make; exactly the public navigation API plus forwarded input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// `next()`.
    Next,
    /// `prev()`.
    Prev,
    /// `go_to(index)`.
    GoTo(usize),
    /// `start()`.
    Start,
    /// `pause()`.
    Pause,
    /// `stop()`.
    Stop,
    /// `teardown()`.
    Teardown,
    /// Forwarded host input.
    Input(InputEvent),
}

impl ContainerDef {
    /// `true` when the container carries [`CAROUSEL_ATTR`].
    pub fn qualifies(&self) -> bool {
        self.attributes.contains_key(CAROUSEL_ATTR)
    }

    /// Resolve options from the container's attributes.
    pub fn options(&self) -> CarouselResult<Options> {
        Options::from_attributes(&self.attributes)
            .map_err(|e| CarouselError::config(format!("container '{}': {e}", self.id)))
    }

    /// Item ids and the initially active index.
    pub fn item_ids(&self) -> CarouselResult<(Vec<ItemId>, Option<usize>)> {
        let mut seen = BTreeSet::new();
        let mut active = None;
        for (i, item) in self.items.iter().enumerate() {
            if !seen.insert(item.id.as_str()) {
                return Err(CarouselError::validation(format!(
                    "container '{}' has duplicate item id '{}'",
                    self.id, item.id
                )));
            }
            if item.active {
                if active.is_some() {
                    return Err(CarouselError::validation(format!(
                        "container '{}' has more than one active item",
                        self.id
                    )));
                }
                active = Some(i);
            }
        }
        let ids = self.items.iter().map(|it| ItemId::from(it.id.as_str())).collect();
        Ok((ids, active))
    }
}

impl PageDef {
    /// Parse a page from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CarouselResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CarouselError::serde(format!("parse page JSON: {e}")))
    }

    /// Qualifying containers in document order.
    pub fn discover(&self) -> impl Iterator<Item = &ContainerDef> {
        self.containers.iter().filter(|c| c.qualifies())
    }

    /// Check container ids are unique and the script only addresses discovered containers.
    pub fn validate(&self) -> CarouselResult<()> {
        let mut ids = BTreeSet::new();
        for c in &self.containers {
            if !ids.insert(c.id.as_str()) {
                return Err(CarouselError::validation(format!(
                    "duplicate container id '{}'",
                    c.id
                )));
            }
        }
        let discovered: BTreeSet<&str> = self.discover().map(|c| c.id.as_str()).collect();
        for step in &self.script {
            if !discovered.contains(step.container.as_str()) {
                return Err(CarouselError::validation(format!(
                    "script step at {} addresses unknown carousel '{}'",
                    step.at, step.container
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/markup.rs"]
mod tests;
