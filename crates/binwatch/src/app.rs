use crate::{
    AppResult, BlockingRunner, DesktopNotifier, IconAssets, TrayIconSink, TrayManager,
    config::Config,
    platform::{ShellViewer, SystemAutostart, TimedExecutor, TimedProbe},
    settings_store::ConfigSettingsStore,
};

use std::{path::PathBuf, rc::Rc, time::Instant};

use binwatch_core::{
    AutostartController, CommandOutcome, CommandTable, IconAsset, MonitorContext, PollTimer,
    RecycleBinMonitor,
};
use tracing::{debug, info, info_span, instrument, warn};
use tray_icon::menu::MenuId;
use uuid::Uuid;

/// Name shown as the notification sender.
const APP_NAME: &str = "Binwatch";

/// Main application state.
///
/// Lives on the event-loop thread together with the tray (`TrayIcon` is
/// `!Send`). Every entry point (startup, timer wake-up, menu click) runs to
/// completion before the loop dispatches the next event.
pub struct App {
    monitor: RecycleBinMonitor,
    commands: CommandTable,
    timer: PollTimer,
    tray: Rc<TrayManager>,
}

impl App {
    /// Verify assets, build the tray and wire every collaborator.
    ///
    /// Any error here is a startup fault; nothing has been shown yet.
    #[track_caller]
    #[instrument(skip(config))]
    pub fn build(config: Config, config_path: PathBuf) -> AppResult<Self> {
        let icons_dir = IconAssets::resolve_dir(config.assets.icons_dir.as_deref());
        let assets = Rc::new(IconAssets::load(&icons_dir)?);

        let runner = Rc::new(BlockingRunner::new()?);
        let monitor_cfg = config.monitor.clone();

        let autostart = SystemAutostart::new()?;
        let autostart_registered = autostart.is_registered();

        let settings = ConfigSettingsStore::new(config, config_path);
        let preferences = settings.preferences();
        if preferences.autostart_enabled != autostart_registered {
            warn!(
                stored = preferences.autostart_enabled,
                registered = autostart_registered,
                "Stored autostart preference differs from OS registration, showing OS state"
            );
        }

        let tray = Rc::new(TrayManager::new(
            Rc::clone(&assets),
            autostart_registered,
            preferences.notifications_enabled,
        )?);

        let icon_paths = IconAsset::ALL
            .into_iter()
            .map(|asset| (asset, assets.path(asset)))
            .collect();

        let ctx = MonitorContext {
            probe: Box::new(TimedProbe::new(
                Rc::clone(&runner),
                monitor_cfg.probe_timeout(),
            )),
            executor: Box::new(TimedExecutor::new(runner, monitor_cfg.empty_timeout())),
            viewer: Box::new(ShellViewer),
            autostart: Box::new(autostart),
            settings: Box::new(settings),
            notifier: Box::new(DesktopNotifier::new(APP_NAME, icon_paths)),
            icon: Box::new(TrayIconSink(Rc::clone(&tray))),
        };

        info!(
            poll_interval_ms = monitor_cfg.poll_interval_ms,
            notifications = preferences.notifications_enabled,
            autostart = autostart_registered,
            "Binwatch initialized"
        );

        Ok(Self {
            monitor: RecycleBinMonitor::new(ctx),
            commands: CommandTable::standard(),
            timer: PollTimer::new(monitor_cfg.poll_interval(), Instant::now()),
            tray,
        })
    }

    /// First synchronization once the event loop runs.
    #[instrument(skip(self))]
    pub fn start(&mut self, now: Instant) {
        let state = self.monitor.refresh();
        self.timer.reschedule(now);
        info!(state = ?state, "Initial bin state");
    }

    /// When the loop should wake up next.
    pub fn next_deadline(&self) -> Instant {
        self.timer.next_deadline()
    }

    /// Loop woke up; poll if the timer is due.
    pub fn on_wake(&mut self, now: Instant) {
        if !self.timer.is_due(now) {
            return;
        }

        self.monitor.periodic_tick();
        self.timer.reschedule(Instant::now());
    }

    /// Route a menu click through the command table and apply the outcome.
    pub fn handle_menu_click(&mut self, id: &MenuId) -> CommandOutcome {
        let Some((action, checked)) = self.tray.resolve(id) else {
            debug!(menu_id = ?id, "Click on unknown menu item");
            return CommandOutcome::Handled;
        };

        let action_id = Uuid::new_v4();
        let span = info_span!("action", action_id = %action_id, action = action.name(), checked);
        let _enter = span.enter();

        let outcome = self.commands.dispatch(&mut self.monitor, action, checked);

        if let CommandOutcome::SetChecked { action, checked } = outcome {
            self.tray.set_checked(action, checked);
        }

        info!(outcome = ?outcome, state = ?self.monitor.state(), "Action handled");

        outcome
    }
}
