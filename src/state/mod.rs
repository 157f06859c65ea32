//! Versioned model state: snapshots, history and the model that ties the
//! collections, views and history together.

mod history;
mod model;
mod snapshot;

pub use history::History;
pub use model::{ExpenseView, Model, PersonView, ScheduleView};
pub use snapshot::Snapshot;
