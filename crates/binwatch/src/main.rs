#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! Binwatch: tray icon reflecting whether the recycle bin is empty.

mod app;
mod blocking_runner;
mod config;
mod desktop_notifier;
mod error;
mod icon_assets;
mod logging;
mod platform;
mod settings_store;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    blocking_runner::{BlockingRunner, InFlight},
    desktop_notifier::DesktopNotifier,
    error::{AppError, Result as AppResult},
    icon_assets::IconAssets,
    tray_command::TrayCommand,
    tray_manager::{TrayIconSink, TrayManager},
};

use crate::config::Config;

use std::time::Instant;

use binwatch_core::CommandOutcome;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tray_icon::menu::MenuEvent;

/// Log a fatal startup problem, tell the user on stderr and exit with 1.
///
/// `exit` skips destructors, so the log file is flushed here first.
fn fail_startup(what: &str, e: &AppError, log_guard: &mut Option<WorkerGuard>) -> ! {
    error!(error = ?e, "{}", what);
    eprintln!("binwatch: {}: {}", what, e.detail());
    logging::shutdown(log_guard);
    std::process::exit(1);
}

/// Application entry point.
fn main() {
    let mut log_guard = logging::init();

    if let Err(e) = platform::ensure_supported() {
        fail_startup("Platform not supported", &e, &mut log_guard);
    }

    let (config, config_path) = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => fail_startup("Failed to load config", &e, &mut log_guard),
    };

    if let Err(e) = config.validate() {
        fail_startup("Invalid config", &e, &mut log_guard);
    }

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Err(e) = proxy.send_event(TrayCommand::MenuClicked(event.id)) {
            warn!(error = ?e, "Event loop closed, dropping menu click");
        }
    }));

    // App owns the tray, so it is built on the main thread after the
    // event loop exists.
    let mut app = match App::build(config, config_path) {
        Ok(app) => app,
        Err(e) => fail_startup("Startup failed", &e, &mut log_guard),
    };

    event_loop.run(move |event, _, control_flow| {
        if matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
            return;
        }

        match event {
            Event::NewEvents(StartCause::Init) => app.start(Instant::now()),
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                app.on_wake(Instant::now());
            }
            Event::UserEvent(TrayCommand::MenuClicked(id)) => {
                if app.handle_menu_click(&id) == CommandOutcome::Quit {
                    info!("Exit requested from tray menu");
                    // The loop never returns to main.
                    logging::shutdown(&mut log_guard);
                    *control_flow = ControlFlow::ExitWithCode(0);
                    return;
                }
            }
            _ => {}
        }

        *control_flow = ControlFlow::WaitUntil(app.next_deadline());
    });
}
