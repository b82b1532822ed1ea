mod messages;
mod recycle_bin_monitor;
mod toggles;

pub use {
    recycle_bin_monitor::{EmptyOutcome, RecycleBinMonitor},
    toggles::ToggleOutcome,
};
