#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use flyout_ui_access::Announcer;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::sidebar::{
    PanelConfig, SidebarCommand, SidebarEffect, SidebarUiEvent, SidebarWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    SidebarUi(SidebarUiEvent),
    SidebarEffect(SidebarEffect),
    SidebarCommand(SidebarCommand),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) announcer: Announcer,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let config = PanelConfig::default();
        let sidebar = match SidebarWidget::restore(config, window_size.width) {
            Ok(widget) => widget,
            Err(err) => {
                log::warn!("sidebar panel setup failed: {err}");
                SidebarWidget::disabled()
            },
        };

        let app = App {
            state: State::new(window_size),
            announcer: Announcer::new(),
            widgets: Widgets { sidebar },
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Flyout")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
