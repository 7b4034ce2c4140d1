use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{
    SidebarCommand, SidebarEffect, SidebarEvent, SidebarUiEvent,
};

/// Route a sidebar UI event through widget reduction.
pub(crate) fn route_event(
    app: &mut App,
    event: SidebarUiEvent,
) -> Task<AppEvent> {
    app.widgets.sidebar.reduce(event).map(map_widget_event)
}

/// Route a sidebar effect into app-level orchestration.
pub(crate) fn route_effect(
    app: &mut App,
    effect: SidebarEffect,
) -> Task<AppEvent> {
    match effect {
        SidebarEffect::Announce(announcement) => {
            app.announcer.announce(announcement);
            Task::none()
        },
    }
}

/// Route an external panel command into widget reduction.
///
/// This is the programmatic API surface: anything outside the widget drives
/// the panel through these commands rather than through its private state.
pub(crate) fn route_command(
    app: &mut App,
    command: SidebarCommand,
) -> Task<AppEvent> {
    let event = match command {
        SidebarCommand::Open => SidebarUiEvent::OpenRequested,
        SidebarCommand::Close => SidebarUiEvent::CloseRequested,
        SidebarCommand::Toggle => SidebarUiEvent::ToggleRequested,
        SidebarCommand::Destroy => SidebarUiEvent::DestroyRequested,
    };
    route_event(app, event)
}

fn map_widget_event(event: SidebarEvent) -> AppEvent {
    match event {
        SidebarEvent::Ui(event) => AppEvent::SidebarUi(event),
        SidebarEvent::Effect(effect) => AppEvent::SidebarEffect(effect),
    }
}
