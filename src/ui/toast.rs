// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts render as small cards with a variant-colored accent border, an
//! optional action button and a dismiss button. The overlay stacks them at
//! the toaster's anchor with the newest toast nearest the anchor edge.

use crate::toast::{Alignment, Edge, Message, Toast, Toaster, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast.
pub fn view<'a>(toast: &Toast) -> Element<'a, Message> {
    let variant = toast.variant();
    let accent_color = variant.color();
    let id = toast.id();

    let glyph = Container::new(Text::new(variant.glyph()).size(typography::BODY_LG).style(
        move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        },
    ))
    .width(Length::Fixed(sizing::ICON_MD))
    .align_x(alignment::Horizontal::Center);

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = toast.title() {
        body = body.push(
            Text::new(title.to_owned())
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
    }
    if let Some(description) = toast.description() {
        body = body.push(
            Text::new(description.to_owned())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::TEXT_MUTED,
                        ..theme.palette().text
                    }),
                }),
        );
    }

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(label) = toast.action_label() {
        content = content.push(
            button(Text::new(label.to_owned()).size(typography::CAPTION))
                .on_press(Message::Action(id))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| action_button_style(theme, status, accent_color)),
        );
    }

    // Dismiss button (always visible, uses main text color for good contrast)
    let dismiss_button = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    Container::new(content.push(dismiss_button))
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, variant))
        .into()
}

/// Renders every live toast of `toaster`, stacked at its anchor.
pub fn view_overlay<'a>(toaster: &Toaster) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = stack_order(toaster).into_iter().map(view).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let position = toaster.position();
    let horizontal = match position.alignment() {
        Alignment::Start => alignment::Horizontal::Left,
        Alignment::Center => alignment::Horizontal::Center,
        Alignment::End => alignment::Horizontal::Right,
    };
    let vertical = match position.edge() {
        Edge::Top => alignment::Vertical::Top,
        Edge::Bottom => alignment::Vertical::Bottom,
    };

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Returns the toasts in top-to-bottom screen order.
///
/// Bottom stacks store the newest first and top stacks store it last, so
/// reading either one backwards puts the newest toast against its edge.
pub fn stack_order(toaster: &Toaster) -> Vec<&Toast> {
    toaster.toasts().rev().collect()
}

/// Accent border width; alerts stand out more than status toasts.
fn accent_border_width(variant: Variant) -> f32 {
    match variant.role() {
        "alert" => border::WIDTH_LG,
        _ => border::WIDTH_MD,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, variant: Variant) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: variant.color(),
            width: accent_border_width(variant),
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status, accent_color: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let fill = match status {
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color {
            a: fill,
            ..accent_color
        })),
        text_color: base.text,
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Active => None,
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => {
            return button::Style {
                background: None,
                text_color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..base.text
                },
                border: iced::Border::default(),
                shadow: shadow::NONE,
                snap: true,
            }
        }
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
