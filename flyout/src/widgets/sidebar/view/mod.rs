use iced::widget::{Space, button, column, container, mouse_area, text};
use iced::{Border, Element, Length, Theme};

use super::event::SidebarUiEvent;
use super::model::{PanelItem, SidebarViewModel};

const PANEL_PADDING: f32 = 12.0;
const NAV_ITEM_HEIGHT: f32 = 36.0;
const NAV_ITEM_SPACING: f32 = 4.0;
const NAV_TEXT_SIZE: f32 = 14.0;
const FOCUS_BORDER_WIDTH: f32 = 2.0;
const ITEM_RADIUS: f32 = 4.0;
const BACKDROP_ALPHA: f32 = 0.5;

/// Props for the panel view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps {
    pub(crate) vm: SidebarViewModel,
}

/// Render the navigation panel at its current slide width.
pub(crate) fn view(
    props: SidebarViewProps,
) -> Element<'static, SidebarUiEvent, Theme, iced::Renderer> {
    let vm = props.vm;
    let width = vm.width * vm.slide_progress;

    if width <= 0.0 {
        return container(Space::new())
            .width(Length::Shrink)
            .height(Length::Fill)
            .into();
    }

    let mut items = column![]
        .spacing(NAV_ITEM_SPACING)
        .width(Length::Fill);
    for (index, item) in PanelItem::ALL.iter().enumerate() {
        items = items.push(nav_item(
            *item,
            vm.active_item == *item,
            vm.focused_item == Some(index),
        ));
    }

    container(items)
        .padding(PANEL_PADDING)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            iced::widget::container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

/// Render the dismiss backdrop shown behind the overlay panel.
pub(crate) fn backdrop()
-> Element<'static, SidebarUiEvent, Theme, iced::Renderer> {
    let shade = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| {
            let mut color = iced::Color::BLACK;
            color.a = BACKDROP_ALPHA;
            iced::widget::container::Style {
                background: Some(color.into()),
                ..Default::default()
            }
        });

    mouse_area(shade)
        .on_press(SidebarUiEvent::BackdropPressed)
        .into()
}

fn nav_item(
    item: PanelItem,
    is_active: bool,
    is_focused: bool,
) -> Element<'static, SidebarUiEvent, Theme, iced::Renderer> {
    button(text(item.title()).size(NAV_TEXT_SIZE))
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ITEM_HEIGHT))
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();

            let background = if is_active {
                Some(palette.primary.weak.color.into())
            } else if status == iced::widget::button::Status::Hovered {
                Some(palette.background.strong.color.into())
            } else {
                None
            };

            let border = if is_focused {
                Border {
                    color: palette.primary.strong.color,
                    width: FOCUS_BORDER_WIDTH,
                    radius: ITEM_RADIUS.into(),
                }
            } else {
                Border {
                    radius: ITEM_RADIUS.into(),
                    ..Border::default()
                }
            };

            iced::widget::button::Style {
                background,
                text_color: palette.background.base.text,
                border,
                ..iced::widget::button::Style::default()
            }
        })
        .on_press(SidebarUiEvent::ItemSelected(item))
        .into()
}
