mod action_result;
mod bin_state;
mod icon_asset;
mod preferences;

pub use {
    action_result::{ActionResult, ResultCode, classify_empty_code},
    bin_state::{BinState, BinStatus},
    icon_asset::IconAsset,
    preferences::{PreferenceKey, Preferences},
};
