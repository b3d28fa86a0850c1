pub mod actor;
pub mod state;

pub use actor::{DashboardActor, DashboardMessage};
pub use state::{DashboardSnapshot, DashboardState, Effect, Notification, QuerySlot};
