use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{PANEL_TICK_MS, SidebarUiEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Panel tick while a resize is settling or the slide animation runs
    if app.widgets.sidebar.has_pending_resize()
        || app.widgets.sidebar.is_sliding()
    {
        let tick = iced::time::every(std::time::Duration::from_millis(
            PANEL_TICK_MS,
        ))
        .map(|_| AppEvent::SidebarUi(SidebarUiEvent::Tick));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
