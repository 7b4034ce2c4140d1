use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::widgets::sidebar::{
    self, SidebarCommand, SidebarViewModel, ViewportMode,
};

const HEADER_HEIGHT: f32 = 40.0;
const HEADER_PADDING: f32 = 8.0;
const STATUS_LINE_HEIGHT: f32 = 24.0;
const CONTENT_PADDING: f32 = 16.0;
const CONTENT_ROWS: usize = 24;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let vm = app.widgets.sidebar.vm();

    let body: Element<'_, AppEvent, Theme, iced::Renderer> = match vm.mode {
        ViewportMode::Wide => {
            let panel =
                sidebar::view::view(sidebar::view::SidebarViewProps { vm })
                    .map(AppEvent::SidebarUi);
            row![panel, view_content(vm)]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        },
        ViewportMode::Narrow => view_overlay_layout(vm),
    };

    column![view_header(vm), body, view_status_line(app)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render content with the panel floating above it behind a backdrop.
fn view_overlay_layout(
    vm: SidebarViewModel,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![view_content(vm)];

    if vm.backdrop_visible {
        layers.push(sidebar::view::backdrop().map(AppEvent::SidebarUi));
    }

    if vm.slide_progress > 0.0 {
        let panel = sidebar::view::view(sidebar::view::SidebarViewProps { vm })
            .map(AppEvent::SidebarUi);
        layers.push(
            container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left)
                .into(),
        );
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: panel toggle + app title.
fn view_header(
    vm: SidebarViewModel,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let toggle_label = if vm.is_open { "Hide menu" } else { "Show menu" };
    let toggle = button(text(toggle_label).size(14.0))
        .padding([4.0, 10.0])
        .on_press(AppEvent::SidebarCommand(SidebarCommand::Toggle));

    let title = text("Flyout").size(16.0);

    let bar = row![toggle, title]
        .spacing(12.0)
        .align_y(alignment::Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding(HEADER_PADDING)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

/// Render the active section's content list.
///
/// While the overlay panel is open the list stops scrolling; the backdrop
/// owns the pointer until the panel is dismissed.
fn view_content(
    vm: SidebarViewModel,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let heading = text(vm.active_item.title()).size(20.0);

    let rows = (0..CONTENT_ROWS).fold(
        column![].spacing(8.0),
        |col, index| {
            col.push(
                text(format!("{} entry {index}", vm.active_item.title()))
                    .size(14.0),
            )
        },
    );

    let inner = column![heading, rows]
        .spacing(CONTENT_PADDING)
        .padding(CONTENT_PADDING)
        .width(Length::Fill);

    if vm.scroll_locked {
        container(inner)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into()
    } else {
        scrollable(inner)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Render the status line carrying the latest announcement.
fn view_status_line(
    app: &App,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let message = app
        .announcer
        .latest()
        .map(|announcement| announcement.text())
        .unwrap_or("");

    container(text(message).size(12.0))
        .width(Length::Fill)
        .height(Length::Fixed(STATUS_LINE_HEIGHT))
        .padding([0.0, HEADER_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}
