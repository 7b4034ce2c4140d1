use std::path::PathBuf;
use std::time::Duration;

use super::errors::PanelError;

/// Width of the expanded navigation panel.
pub(crate) const PANEL_WIDTH: f32 = 288.0;
/// Viewport width below which the panel overlays the content.
pub(crate) const PANEL_BREAKPOINT: f32 = 768.0;
/// Slide animation duration.
const PANEL_SLIDE_MS: u64 = 250;
/// Trailing-edge delay before a resize burst is applied.
const PANEL_RESIZE_DEBOUNCE_MS: u64 = 150;
/// Persisted entries older than this are discarded on restore.
pub(crate) const PANEL_STATE_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Immutable panel options supplied once at construction.
#[derive(Debug, Clone)]
pub(crate) struct PanelConfig {
    pub(crate) width: f32,
    pub(crate) default_open: bool,
    pub(crate) slide: Duration,
    pub(crate) breakpoint: f32,
    pub(crate) resize_debounce: Duration,
    pub(crate) state_path: PathBuf,
}

impl PanelConfig {
    /// Reject configurations the panel cannot operate with.
    pub(crate) fn validate(&self) -> Result<(), PanelError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PanelError::Config {
                message: String::from("panel width must be positive"),
            });
        }
        if !self.breakpoint.is_finite() || self.breakpoint < 0.0 {
            return Err(PanelError::Config {
                message: String::from(
                    "responsive breakpoint must be non-negative",
                ),
            });
        }
        if self.state_path.file_name().is_none() {
            return Err(PanelError::Config {
                message: String::from("state path has no file name"),
            });
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            default_open: false,
            slide: Duration::from_millis(PANEL_SLIDE_MS),
            breakpoint: PANEL_BREAKPOINT,
            resize_debounce: Duration::from_millis(PANEL_RESIZE_DEBOUNCE_MS),
            state_path: super::storage::default_state_path(),
        }
    }
}

/// Layout regime derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewportMode {
    /// Panel sits beside the content.
    Wide,
    /// Panel overlays the content behind a dismiss backdrop.
    Narrow,
}

impl ViewportMode {
    /// Classify a viewport width against the configured breakpoint.
    pub(crate) fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Navigation entries hosted by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelItem {
    Home,
    Library,
    Settings,
}

impl PanelItem {
    /// Panel entries in display and focus order.
    pub(crate) const ALL: [PanelItem; 3] =
        [PanelItem::Home, PanelItem::Library, PanelItem::Settings];

    /// Human-readable entry title.
    pub(crate) fn title(&self) -> &'static str {
        match self {
            PanelItem::Home => "Home",
            PanelItem::Library => "Library",
            PanelItem::Settings => "Settings",
        }
    }
}

/// Read-only projection of sidebar state for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) is_open: bool,
    pub(crate) mode: ViewportMode,
    pub(crate) backdrop_visible: bool,
    pub(crate) scroll_locked: bool,
    pub(crate) active_item: PanelItem,
    pub(crate) focused_item: Option<usize>,
    pub(crate) width: f32,
    pub(crate) slide_progress: f32,
}
