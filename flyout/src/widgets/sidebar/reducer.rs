use std::sync::Arc;

use flyout_ui_access::Announcement;
use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarUiEvent};
use super::state::SidebarState;
use super::storage::{self, PanelStore, PersistedPanelState};

const OPENED_ANNOUNCEMENT: &str = "Navigation panel opened";
const CLOSED_ANNOUNCEMENT: &str = "Navigation panel closed";

/// Reduce a sidebar UI event into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    store: &Arc<dyn PanelStore>,
    event: SidebarUiEvent,
) -> Task<SidebarEvent> {
    if !state.is_enabled() {
        return Task::none();
    }

    match event {
        SidebarUiEvent::OpenRequested => {
            if state.open_panel() {
                after_toggle(state, store, OPENED_ANNOUNCEMENT)
            } else {
                Task::none()
            }
        },
        SidebarUiEvent::CloseRequested | SidebarUiEvent::BackdropPressed => {
            if state.close_panel() {
                after_toggle(state, store, CLOSED_ANNOUNCEMENT)
            } else {
                Task::none()
            }
        },
        SidebarUiEvent::ToggleRequested => {
            let next = if state.is_open() {
                SidebarUiEvent::CloseRequested
            } else {
                SidebarUiEvent::OpenRequested
            };
            reduce(state, store, next)
        },
        SidebarUiEvent::ItemSelected(item) => {
            state.set_active_item(item);
            Task::none()
        },
        SidebarUiEvent::FocusAdvanced { backward } => {
            let _ = state.focus_advance(backward);
            Task::none()
        },
        SidebarUiEvent::FocusedItemActivated => {
            if let Some(item) = state.focused_panel_item() {
                state.set_active_item(item);
            }
            Task::none()
        },
        SidebarUiEvent::ViewportResized { width } => {
            state.mark_resize(width);
            Task::none()
        },
        SidebarUiEvent::Tick => {
            let _ = state.settle_resize();
            Task::none()
        },
        SidebarUiEvent::PersistCompleted => Task::none(),
        SidebarUiEvent::PersistFailed(err) => {
            log::warn!("failed to persist panel state: {err}");
            Task::none()
        },
        SidebarUiEvent::DestroyRequested => {
            if let Err(err) = store.clear() {
                log::warn!("failed to clear panel state: {err}");
            }
            state.dismantle();
            Task::none()
        },
    }
}

/// Persist the new open flag and announce the change.
fn after_toggle(
    state: &SidebarState,
    store: &Arc<dyn PanelStore>,
    message: &'static str,
) -> Task<SidebarEvent> {
    let snapshot = PersistedPanelState::now(state.is_open());
    let store = Arc::clone(store);

    let persist = Task::perform(
        storage::persist_panel_state(store, snapshot),
        |result| match result {
            Ok(()) => SidebarEvent::Ui(SidebarUiEvent::PersistCompleted),
            Err(err) => SidebarEvent::Ui(SidebarUiEvent::PersistFailed(
                Arc::new(err),
            )),
        },
    );
    let announce = Task::done(SidebarEvent::Effect(SidebarEffect::Announce(
        Announcement::polite(message),
    )));

    Task::batch(vec![persist, announce])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::widgets::sidebar::model::{
        PanelConfig, PanelItem, ViewportMode,
    };
    use crate::widgets::sidebar::storage::{
        MemoryStore, PanelStore, PersistedPanelState,
    };
    use crate::widgets::sidebar::{SidebarUiEvent, SidebarWidget};

    const WIDE_VIEWPORT: f32 = 1024.0;
    const NARROW_VIEWPORT: f32 = 480.0;

    /// Config with instant debounce and animation so tests need no sleeps.
    fn test_config() -> PanelConfig {
        PanelConfig {
            slide: Duration::ZERO,
            resize_debounce: Duration::ZERO,
            ..PanelConfig::default()
        }
    }

    fn widget_with_store(store: Arc<MemoryStore>) -> SidebarWidget {
        SidebarWidget::with_store(test_config(), store, WIDE_VIEWPORT)
            .expect("valid config")
    }

    fn widget() -> SidebarWidget {
        widget_with_store(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn given_open_requested_when_reduced_then_panel_is_open() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        assert!(widget.is_open());
    }

    #[test]
    fn given_open_requested_twice_when_reduced_then_state_matches_single_open()
     {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        let once = widget.vm();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        let twice = widget.vm();

        assert!(twice.is_open);
        assert_eq!(once.is_open, twice.is_open);
        assert_eq!(once.mode, twice.mode);
        assert_eq!(once.backdrop_visible, twice.backdrop_visible);
    }

    #[test]
    fn given_close_requested_when_already_closed_then_nothing_changes() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::CloseRequested);
        assert!(!widget.is_open());
    }

    #[test]
    fn given_toggle_requested_twice_when_reduced_then_state_returns_to_start()
    {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::ToggleRequested);
        assert!(widget.is_open());
        let _task = widget.reduce(SidebarUiEvent::ToggleRequested);
        assert!(!widget.is_open());
    }

    #[test]
    fn given_backdrop_pressed_when_open_then_panel_closes() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        let _task = widget.reduce(SidebarUiEvent::BackdropPressed);
        assert!(!widget.is_open());
    }

    #[test]
    fn given_resize_across_breakpoint_while_open_then_only_mode_changes() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);

        let _task = widget.reduce(SidebarUiEvent::ViewportResized {
            width: NARROW_VIEWPORT,
        });
        let _task = widget.reduce(SidebarUiEvent::Tick);

        let vm = widget.vm();
        assert!(vm.is_open);
        assert_eq!(vm.mode, ViewportMode::Narrow);
        assert!(vm.backdrop_visible);
        assert!(vm.scroll_locked);

        let _task = widget.reduce(SidebarUiEvent::ViewportResized {
            width: WIDE_VIEWPORT,
        });
        let _task = widget.reduce(SidebarUiEvent::Tick);

        let vm = widget.vm();
        assert!(vm.is_open);
        assert_eq!(vm.mode, ViewportMode::Wide);
        assert!(!vm.backdrop_visible);
        assert!(!vm.scroll_locked);
    }

    #[test]
    fn given_pending_resize_within_debounce_when_ticked_then_mode_holds() {
        let config = PanelConfig {
            slide: Duration::ZERO,
            resize_debounce: Duration::from_secs(60),
            ..PanelConfig::default()
        };
        let mut widget = SidebarWidget::with_store(
            config,
            Arc::new(MemoryStore::default()),
            WIDE_VIEWPORT,
        )
        .expect("valid config");

        let _task = widget.reduce(SidebarUiEvent::ViewportResized {
            width: NARROW_VIEWPORT,
        });
        let _task = widget.reduce(SidebarUiEvent::Tick);

        assert!(widget.has_pending_resize());
        assert_eq!(widget.vm().mode, ViewportMode::Wide);
    }

    #[test]
    fn given_focus_advanced_past_last_entry_when_open_then_focus_wraps() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);

        for _ in 0..PanelItem::ALL.len() {
            let _task =
                widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        }
        assert_eq!(widget.vm().focused_item, Some(PanelItem::ALL.len() - 1));

        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        assert_eq!(widget.vm().focused_item, Some(0));

        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: true });
        assert_eq!(widget.vm().focused_item, Some(PanelItem::ALL.len() - 1));
    }

    #[test]
    fn given_focus_advanced_when_closed_then_nothing_is_focused() {
        let mut widget = widget();
        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        assert_eq!(widget.vm().focused_item, None);
    }

    #[test]
    fn given_panel_closed_when_reduced_then_focus_is_released() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        assert!(widget.vm().focused_item.is_some());

        let _task = widget.reduce(SidebarUiEvent::CloseRequested);
        assert_eq!(widget.vm().focused_item, None);
    }

    #[test]
    fn given_focused_entry_activated_when_reduced_then_it_becomes_active() {
        let mut widget = widget();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        let _task =
            widget.reduce(SidebarUiEvent::FocusAdvanced { backward: false });
        let _task = widget.reduce(SidebarUiEvent::FocusedItemActivated);

        assert_eq!(widget.vm().active_item, PanelItem::ALL[1]);
    }

    #[test]
    fn given_item_selected_when_reduced_then_active_item_changes() {
        let mut widget = widget();
        let _task =
            widget.reduce(SidebarUiEvent::ItemSelected(PanelItem::Settings));
        assert_eq!(widget.vm().active_item, PanelItem::Settings);
    }

    #[test]
    fn given_fresh_persisted_entry_when_restored_then_panel_reopens() {
        let store =
            Arc::new(MemoryStore::with_entry(PersistedPanelState::now(true)));
        let widget = widget_with_store(store);
        assert!(widget.is_open());
    }

    #[test]
    fn given_stale_persisted_entry_when_restored_then_panel_stays_closed() {
        let store = Arc::new(MemoryStore::with_entry(PersistedPanelState {
            version: 1,
            is_open: true,
            saved_at_ms: 0,
        }));
        let widget = widget_with_store(store);
        assert!(!widget.is_open());
    }

    #[test]
    fn given_destroy_when_reduced_then_store_is_cleared_and_widget_is_inert()
    {
        let store =
            Arc::new(MemoryStore::with_entry(PersistedPanelState::now(true)));
        let mut widget = widget_with_store(store.clone());
        assert!(widget.is_open());

        let _task = widget.reduce(SidebarUiEvent::DestroyRequested);

        assert!(store.load().expect("load").is_none());
        let vm = widget.vm();
        assert!(!vm.is_open);
        assert!(!vm.backdrop_visible);

        // Later intents are ignored.
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        assert!(!widget.is_open());
    }

    #[test]
    fn given_disabled_widget_when_reduced_then_every_intent_is_ignored() {
        let mut widget = SidebarWidget::disabled();
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        assert!(!widget.is_open());
        let _task = widget.reduce(SidebarUiEvent::ViewportResized {
            width: NARROW_VIEWPORT,
        });
        assert!(!widget.has_pending_resize());
    }

    #[test]
    fn given_invalid_config_when_constructed_then_setup_fails() {
        let config = PanelConfig {
            width: -10.0,
            ..PanelConfig::default()
        };
        let result = SidebarWidget::with_store(
            config,
            Arc::new(MemoryStore::default()),
            WIDE_VIEWPORT,
        );
        assert!(result.is_err());
    }

    #[test]
    fn given_settled_states_when_projected_then_slide_progress_is_terminal() {
        let mut widget = widget();
        assert_eq!(widget.vm().slide_progress, 0.0);
        let _task = widget.reduce(SidebarUiEvent::OpenRequested);
        assert_eq!(widget.vm().slide_progress, 1.0);
    }
}
