use std::time::Instant;

use flyout_ui_access::FocusRing;

use super::model::{PanelConfig, PanelItem, ViewportMode};

/// Internal runtime state for panel layout and interaction metadata.
#[derive(Debug)]
pub(super) struct SidebarState {
    config: PanelConfig,
    enabled: bool,
    open: bool,
    mode: ViewportMode,
    active_item: PanelItem,
    focus: FocusRing,
    pending_resize: Option<PendingResize>,
    last_toggle_at: Option<Instant>,
}

/// A resize burst waiting out the trailing-edge debounce delay.
#[derive(Debug, Clone, Copy)]
struct PendingResize {
    at: Instant,
    width: f32,
}

impl SidebarState {
    /// Create state for a validated config with a restored open flag.
    pub(super) fn new(
        config: PanelConfig,
        open: bool,
        viewport_width: f32,
    ) -> Self {
        let mode = ViewportMode::for_width(viewport_width, config.breakpoint);
        Self {
            config,
            enabled: true,
            open,
            mode,
            active_item: PanelItem::Home,
            focus: FocusRing::new(PanelItem::ALL.len()),
            pending_resize: None,
            last_toggle_at: None,
        }
    }

    /// Create inert state that ignores every interaction.
    pub(super) fn disabled() -> Self {
        let config = PanelConfig::default();
        let breakpoint = config.breakpoint;
        let mut state = Self::new(config, false, breakpoint);
        state.enabled = false;
        state
    }

    pub(super) fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub(super) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub(super) fn active_item(&self) -> PanelItem {
        self.active_item
    }

    pub(super) fn focused_item(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Whether the dismiss backdrop is shown behind the panel.
    pub(super) fn backdrop_visible(&self) -> bool {
        self.open && self.mode == ViewportMode::Narrow
    }

    /// Whether content scrolling is held while the panel overlays it.
    pub(super) fn scroll_locked(&self) -> bool {
        self.open && self.mode == ViewportMode::Narrow
    }

    pub(super) fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    /// Whether the slide animation window is still running.
    pub(super) fn is_sliding(&self) -> bool {
        self.last_toggle_at
            .map(|at| at.elapsed() <= self.config.slide)
            .unwrap_or(false)
    }

    /// Fraction of the panel width currently visible, eased over the
    /// configured slide duration.
    pub(super) fn slide_progress(&self) -> f32 {
        let progress = match self.last_toggle_at {
            Some(at) if !self.config.slide.is_zero() => {
                (at.elapsed().as_secs_f32() / self.config.slide.as_secs_f32())
                    .min(1.0)
            },
            Some(_) => 1.0,
            None => 1.0,
        };

        if self.open { progress } else { 1.0 - progress }
    }

    /// Open the panel. Returns false when it is already open.
    pub(super) fn open_panel(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.last_toggle_at = Some(Instant::now());
        true
    }

    /// Close the panel and release focus. Returns false when already closed.
    pub(super) fn close_panel(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.focus.clear();
        self.last_toggle_at = Some(Instant::now());
        true
    }

    pub(super) fn set_active_item(&mut self, item: PanelItem) {
        self.active_item = item;
    }

    /// Cycle panel focus. Focus only exists while the panel is open.
    pub(super) fn focus_advance(&mut self, backward: bool) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.focus.advance(backward)
    }

    /// Resolve the focused slot back to its panel entry.
    pub(super) fn focused_panel_item(&self) -> Option<PanelItem> {
        self.focus
            .focused()
            .and_then(|index| PanelItem::ALL.get(index).copied())
    }

    /// Record the latest viewport width and restart the debounce window.
    pub(super) fn mark_resize(&mut self, width: f32) {
        self.pending_resize = Some(PendingResize {
            at: Instant::now(),
            width,
        });
    }

    /// Apply the settled viewport width once the debounce delay elapsed.
    ///
    /// Returns true when the viewport mode flipped. The open flag is never
    /// touched here.
    pub(super) fn settle_resize(&mut self) -> bool {
        let Some(pending) = self.pending_resize else {
            return false;
        };
        if pending.at.elapsed() < self.config.resize_debounce {
            return false;
        }
        self.pending_resize = None;

        let mode =
            ViewportMode::for_width(pending.width, self.config.breakpoint);
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        true
    }

    /// Reset all interaction state and disable the widget.
    pub(super) fn dismantle(&mut self) {
        self.open = false;
        self.focus.clear();
        self.pending_resize = None;
        self.last_toggle_at = None;
        self.enabled = false;
    }
}
