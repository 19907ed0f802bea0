//! Chart specifications for the report tabs.

mod compose;
mod figure;

pub use compose::{
    compose_all, error_box, error_lines, reward_box, reward_smoothed, ChartSet, SHOW_ALL_LABEL,
};
pub use figure::{BoxTrace, Button, Figure, Layout, LineTrace, Trace, UpdateMenu};
