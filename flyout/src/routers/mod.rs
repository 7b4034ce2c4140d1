use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod keyboard;
pub(crate) mod sidebar;
pub(crate) mod window;

/// Route an app event to its owning router.
pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Sidebar widget
        AppEvent::SidebarUi(event) => sidebar::route_event(app, event),
        AppEvent::SidebarEffect(effect) => sidebar::route_effect(app, effect),
        AppEvent::SidebarCommand(command) => {
            sidebar::route_command(app, command)
        },
        // Direct operations
        AppEvent::Keyboard(event) => keyboard::route(app, event),
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
