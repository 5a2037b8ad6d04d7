pub(crate) mod controller;
pub(crate) mod driver;
pub(crate) mod events;
pub(crate) mod interaction;
pub(crate) mod page;
pub(crate) mod stage;
pub(crate) mod timer;
