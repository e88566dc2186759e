pub mod enums;
pub mod route;
pub mod schedule;
pub mod task;
pub mod timer;

pub use enums::{Preset, UiMode};
pub use route::Route;
pub use task::{Task, TaskId, TaskList};
pub use timer::{format_time, PresetDurations, Timer};
