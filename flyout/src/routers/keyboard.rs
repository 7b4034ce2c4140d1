use iced::Task;
use iced::keyboard::{Event, Key, key};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::SidebarUiEvent;

/// Classify keyboard input while the navigation panel is open.
///
/// Tab and Shift+Tab cycle focus inside the panel, Enter activates the
/// focused entry, Escape dismisses. Everything else passes through. With the
/// panel closed, keys are left to the rest of the application.
pub(crate) fn route(app: &App, event: Event) -> Task<AppEvent> {
    if !app.widgets.sidebar.is_open() {
        return Task::none();
    }

    match event {
        Event::KeyPressed {
            key: Key::Named(key::Named::Tab),
            modifiers,
            ..
        } => Task::done(AppEvent::SidebarUi(SidebarUiEvent::FocusAdvanced {
            backward: modifiers.shift(),
        })),
        Event::KeyPressed {
            key: Key::Named(key::Named::Enter),
            ..
        } => Task::done(AppEvent::SidebarUi(
            SidebarUiEvent::FocusedItemActivated,
        )),
        Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        } => Task::done(AppEvent::SidebarUi(SidebarUiEvent::CloseRequested)),
        _ => Task::none(),
    }
}
