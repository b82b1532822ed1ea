//! In-memory collaborators that record every call.

use crate::{
    AutostartController, BinActionExecutor, BinError, BinStatus, BinStatusProbe, BinViewer,
    CoreResult, IconAsset, IconSink, MonitorContext, Notification, NotificationSink,
    PreferenceKey, Preferences, RecycleBinMonitor, ResultCode, SettingsStore,
};

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Scripted probe answer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ProbeAnswer {
    Items(u64),
    Fault,
}

/// Scripted executor answer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum EmptyAnswer {
    Code(ResultCode),
    Fault,
}

/// Shared record of everything the monitor did.
#[derive(Debug, Default)]
pub(crate) struct World {
    pub probe_answers: VecDeque<ProbeAnswer>,
    pub last_probe: Option<ProbeAnswer>,
    pub probe_calls: usize,
    pub empty_answer: Option<EmptyAnswer>,
    pub empty_calls: usize,
    pub open_fails: bool,
    pub open_calls: usize,
    pub autostart_registered: bool,
    pub autostart_works: bool,
    pub preferences: Preferences,
    pub notifications: Vec<Notification>,
    pub icons: Vec<IconAsset>,
}

impl World {
    /// Queue probe answers. The last answer repeats once the queue drains.
    pub fn script_probe(&mut self, answers: &[ProbeAnswer]) {
        self.probe_answers.extend(answers.iter().copied());
    }
}

pub(crate) type Shared = Rc<RefCell<World>>;

struct FakeProbe(Shared);
struct FakeExecutor(Shared);
struct FakeViewer(Shared);
struct FakeAutostart(Shared);
struct FakeSettings(Shared);
struct FakeNotifier(Shared);
struct FakeIcon(Shared);

impl BinStatusProbe for FakeProbe {
    fn probe(&self) -> CoreResult<BinStatus> {
        let mut world = self.0.borrow_mut();
        world.probe_calls += 1;
        let answer = match world.probe_answers.pop_front() {
            Some(answer) => answer,
            None => world.last_probe.unwrap_or(ProbeAnswer::Items(0)),
        };
        world.last_probe = Some(answer);
        match answer {
            ProbeAnswer::Items(item_count) => Ok(BinStatus { item_count }),
            ProbeAnswer::Fault => Err(BinError::query_failed("probe unavailable")),
        }
    }
}

impl BinActionExecutor for FakeExecutor {
    fn empty(&self) -> CoreResult<ResultCode> {
        let mut world = self.0.borrow_mut();
        world.empty_calls += 1;
        match world.empty_answer.unwrap_or(EmptyAnswer::Code(0)) {
            EmptyAnswer::Code(code) => Ok(code),
            EmptyAnswer::Fault => Err(BinError::action_failed("empty", "shell unavailable")),
        }
    }
}

impl BinViewer for FakeViewer {
    fn open(&self) -> CoreResult<()> {
        let mut world = self.0.borrow_mut();
        world.open_calls += 1;
        if world.open_fails {
            Err(BinError::action_failed("open", "no file manager"))
        } else {
            Ok(())
        }
    }
}

impl AutostartController for FakeAutostart {
    fn is_registered(&self) -> bool {
        self.0.borrow().autostart_registered
    }

    fn enable(&self) -> bool {
        let mut world = self.0.borrow_mut();
        if world.autostart_works {
            world.autostart_registered = true;
        }
        world.autostart_works
    }

    fn disable(&self) -> bool {
        let mut world = self.0.borrow_mut();
        if world.autostart_works {
            world.autostart_registered = false;
        }
        world.autostart_works
    }
}

impl SettingsStore for FakeSettings {
    fn get_preference(&self, key: PreferenceKey) -> bool {
        self.0.borrow().preferences.get(key)
    }

    fn set_preference(&mut self, key: PreferenceKey, value: bool) {
        self.0.borrow_mut().preferences.set(key, value);
    }
}

impl NotificationSink for FakeNotifier {
    fn show(&self, notification: &Notification) {
        self.0.borrow_mut().notifications.push(notification.clone());
    }
}

impl IconSink for FakeIcon {
    fn set_icon(&self, asset: IconAsset) {
        self.0.borrow_mut().icons.push(asset);
    }
}

/// Monitor wired to a fresh world with working autostart and default
/// preferences.
pub(crate) fn monitor() -> (RecycleBinMonitor, Shared) {
    let world: Shared = Rc::new(RefCell::new(World {
        autostart_works: true,
        ..World::default()
    }));

    let ctx = MonitorContext {
        probe: Box::new(FakeProbe(Rc::clone(&world))),
        executor: Box::new(FakeExecutor(Rc::clone(&world))),
        viewer: Box::new(FakeViewer(Rc::clone(&world))),
        autostart: Box::new(FakeAutostart(Rc::clone(&world))),
        settings: Box::new(FakeSettings(Rc::clone(&world))),
        notifier: Box::new(FakeNotifier(Rc::clone(&world))),
        icon: Box::new(FakeIcon(Rc::clone(&world))),
    };

    (RecycleBinMonitor::new(ctx), world)
}
