mod blocking_runner;
mod config;
mod icon_assets;
mod logging;
mod settings_store;
#[cfg(target_os = "linux")]
mod xdg_autostart;
