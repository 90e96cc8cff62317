//! Screen rendering and input handling.

mod connect;
pub mod detail;
mod explore;
mod schedule;

pub use connect::ConnectScreen;
pub use explore::ExploreScreen;
pub use schedule::ScheduleScreen;
