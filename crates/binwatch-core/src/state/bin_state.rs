use crate::IconAsset;

/// Result of a successful bin probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinStatus {
    /// Number of items currently in the bin.
    pub item_count: u64,
}

/// Presentation state of the bin, driving which tray icon is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinState {
    /// Bin has no items.
    Empty,
    /// Bin holds at least one item.
    NonEmpty,
    /// No successful probe yet.
    #[default]
    Unknown,
}

impl BinState {
    /// Derive the presentation state from a successful probe.
    pub fn from_status(status: BinStatus) -> Self {
        if status.item_count == 0 {
            BinState::Empty
        } else {
            BinState::NonEmpty
        }
    }

    /// Icon shown for this state. `Unknown` has no icon of its own.
    pub fn icon(self) -> Option<IconAsset> {
        match self {
            BinState::Empty => Some(IconAsset::Empty),
            BinState::NonEmpty => Some(IconAsset::Full),
            BinState::Unknown => None,
        }
    }
}
