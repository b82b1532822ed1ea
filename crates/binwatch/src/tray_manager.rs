//! System tray icon with state-based updates.
//!
//! Owns the tray icon and its context menu (Open, Empty, Autostart,
//! Show notifications, Exit) and maps menu ids back to [`ActionId`]s.

use crate::{AppError, AppResult, IconAssets};

use std::{cell::Cell, collections::HashMap, panic::Location, rc::Rc};

use binwatch_core::{ActionId, IconAsset, IconSink};
use error_location::ErrorLocation;
use tracing::{error, info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder};

const TOOLTIP: &str = "Binwatch - Recycle Bin";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    assets: Rc<IconAssets>,
    current: Cell<Option<IconAsset>>,
    autostart_item: CheckMenuItem,
    notifications_item: CheckMenuItem,
    actions: HashMap<MenuId, ActionId>,
}

impl TrayManager {
    /// Create the tray icon showing the empty-bin icon and the given
    /// initial check states.
    #[track_caller]
    #[instrument(skip(assets))]
    pub fn new(
        assets: Rc<IconAssets>,
        autostart_checked: bool,
        notifications_checked: bool,
    ) -> AppResult<Self> {
        let menu = Menu::new();

        let open_item = MenuItem::new("Open Recycle Bin", true, None);
        let empty_item = MenuItem::new("Empty Recycle Bin", true, None);
        let autostart_item = CheckMenuItem::new("Start at login", true, autostart_checked, None);
        let notifications_item =
            CheckMenuItem::new("Show notifications", true, notifications_checked, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let actions = HashMap::from([
            (open_item.id().clone(), ActionId::OpenBin),
            (empty_item.id().clone(), ActionId::EmptyBin),
            (autostart_item.id().clone(), ActionId::ToggleAutostart),
            (notifications_item.id().clone(), ActionId::ToggleNotifications),
            (exit_item.id().clone(), ActionId::Quit),
        ]);

        menu.append_items(&[
            &open_item,
            &empty_item,
            &autostart_item,
            &notifications_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP)
            .with_menu(Box::new(menu))
            .with_icon(assets.icon(IconAsset::Empty)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            assets,
            current: Cell::new(Some(IconAsset::Empty)),
            autostart_item,
            notifications_item,
            actions,
        })
    }

    /// Resolve a clicked menu id and the item's check state after the click.
    pub fn resolve(&self, id: &MenuId) -> Option<(ActionId, bool)> {
        let action = *self.actions.get(id)?;
        let checked = match action {
            ActionId::ToggleAutostart => self.autostart_item.is_checked(),
            ActionId::ToggleNotifications => self.notifications_item.is_checked(),
            _ => false,
        };
        Some((action, checked))
    }

    /// Force the check state of a checkable item.
    pub fn set_checked(&self, action: ActionId, checked: bool) {
        match action {
            ActionId::ToggleAutostart => self.autostart_item.set_checked(checked),
            ActionId::ToggleNotifications => self.notifications_item.set_checked(checked),
            other => error!(action = other.name(), "Action has no check state"),
        }
    }

    /// Swap the tray icon and tooltip. Repeating the current asset is a no-op.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show_asset(&self, asset: IconAsset) -> AppResult<()> {
        if self.current.get() == Some(asset) {
            return Ok(());
        }

        let tooltip = match asset {
            IconAsset::Full => "Binwatch - Recycle Bin has items",
            IconAsset::Empty => "Binwatch - Recycle Bin is empty",
            _ => TOOLTIP,
        };

        self.tray_icon
            .set_icon(Some(self.assets.icon(asset)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.current.set(Some(asset));

        Ok(())
    }
}

/// [`IconSink`] handle onto the shared tray.
pub struct TrayIconSink(pub Rc<TrayManager>);

impl IconSink for TrayIconSink {
    fn set_icon(&self, asset: IconAsset) {
        if let Err(e) = self.0.show_asset(asset) {
            error!(error = ?e, asset = asset.tag(), "Failed to update tray icon");
        }
    }
}
