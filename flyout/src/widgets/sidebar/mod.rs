mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod storage;
pub(crate) mod view;

use std::sync::Arc;

pub(crate) use errors::PanelError;
pub(crate) use event::{
    PANEL_TICK_MS, SidebarCommand, SidebarEffect, SidebarEvent,
    SidebarUiEvent,
};
use iced::Task;
pub(crate) use model::{PanelConfig, SidebarViewModel, ViewportMode};
use state::SidebarState;
use storage::{JsonFileStore, PanelStore};

/// Sidebar widget owning its private state and the injected state store.
///
/// The panel keeps exactly one persisted entry (open flag + timestamp) and
/// is the only writer of it.
pub(crate) struct SidebarWidget {
    state: SidebarState,
    store: Arc<dyn PanelStore>,
}

impl SidebarWidget {
    /// Construct the panel, restoring persisted state from disk.
    ///
    /// An invalid configuration is a fatal setup error. Storage failures are
    /// recovered internally and start the panel closed.
    pub(crate) fn restore(
        config: PanelConfig,
        viewport_width: f32,
    ) -> Result<Self, PanelError> {
        let store: Arc<dyn PanelStore> =
            Arc::new(JsonFileStore::new(config.state_path.clone()));
        Self::with_store_impl(config, store, viewport_width)
    }

    /// Construct the panel with an injected store, used by tests.
    #[cfg(test)]
    pub(crate) fn with_store(
        config: PanelConfig,
        store: Arc<dyn PanelStore>,
        viewport_width: f32,
    ) -> Result<Self, PanelError> {
        Self::with_store_impl(config, store, viewport_width)
    }

    fn with_store_impl(
        config: PanelConfig,
        store: Arc<dyn PanelStore>,
        viewport_width: f32,
    ) -> Result<Self, PanelError> {
        config.validate()?;
        let open = storage::load_initial_open(&store, &config);
        Ok(Self {
            state: SidebarState::new(config, open, viewport_width),
            store,
        })
    }

    /// Construct an inert widget that ignores every event.
    ///
    /// Installed when setup fails so the rest of the application keeps
    /// running without a panel.
    pub(crate) fn disabled() -> Self {
        let state = SidebarState::disabled();
        let store: Arc<dyn PanelStore> = Arc::new(JsonFileStore::new(
            state.config().state_path.clone(),
        ));
        Self { state, store }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarUiEvent,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, &self.store, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            is_open: self.state.is_open(),
            mode: self.state.mode(),
            backdrop_visible: self.state.backdrop_visible(),
            scroll_locked: self.state.scroll_locked(),
            active_item: self.state.active_item(),
            focused_item: self.state.focused_item(),
            width: self.state.config().width,
            slide_progress: self.state.slide_progress(),
        }
    }

    /// Return whether the panel is currently open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Return whether a resize burst is waiting out the debounce delay.
    pub(crate) fn has_pending_resize(&self) -> bool {
        self.state.has_pending_resize()
    }

    /// Return whether the slide animation window is still running.
    pub(crate) fn is_sliding(&self) -> bool {
        self.state.is_sliding()
    }
}
