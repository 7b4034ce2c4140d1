use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::SidebarUiEvent;

/// Handle window resize events and forward the new width to the panel.
///
/// The panel debounces the raw stream itself; the router only stamps the
/// geometry state and hands over the latest width.
pub(crate) fn handle_resize(app: &mut App, size: iced::Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    Task::done(AppEvent::SidebarUi(SidebarUiEvent::ViewportResized {
        width: size.width,
    }))
}
