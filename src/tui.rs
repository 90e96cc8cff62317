//! Terminal client: map and list explorer, schedule, and conversations.

mod app;
mod screens;
mod theme;

pub use app::run;
