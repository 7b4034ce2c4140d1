use std::sync::Arc;

use flyout_ui_access::Announcement;

use super::errors::PanelStoreError;
use super::model::PanelItem;

/// Cadence of the panel tick driving resize settling and slide frames.
pub(crate) const PANEL_TICK_MS: u64 = 50;

/// Intent events reduced by the sidebar widget.
#[derive(Debug, Clone)]
pub(crate) enum SidebarUiEvent {
    OpenRequested,
    CloseRequested,
    ToggleRequested,
    BackdropPressed,
    ItemSelected(PanelItem),
    FocusAdvanced { backward: bool },
    FocusedItemActivated,
    ViewportResized { width: f32 },
    Tick,
    PersistCompleted,
    PersistFailed(Arc<PanelStoreError>),
    DestroyRequested,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    Announce(Announcement),
}

/// External panel API routed through the app update loop.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SidebarCommand {
    Open,
    Close,
    Toggle,
    Destroy,
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Ui(SidebarUiEvent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
