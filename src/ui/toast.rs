// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, a bold title, an
//! optional description and a dismiss button. The overlay stacks the
//! visible set in the bottom-right corner, oldest on top.

use crate::i18n::fluent::I18n;
use crate::notifications::{Kind, Message, Notification};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};

/// Glyph shown on the dismiss button.
const DISMISS_GLYPH: &str = "×";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = accent_color(notification.kind());

        let marker = Container::new(Space::new())
            .width(Length::Fixed(sizing::KIND_MARKER))
            .height(Length::Fixed(typography::BODY_LG + spacing::XXS))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(accent)),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut body = Column::new().spacing(spacing::XXS).push(
            Text::new(notification.title())
                .size(typography::BODY_LG)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        );
        if let Some(description) = notification.description() {
            body = body.push(
                Text::new(description)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            );
        }

        let dismiss_button = button(Text::new(DISMISS_GLYPH).size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);
        let dismiss = tooltip(
            dismiss_button,
            Container::new(Text::new(i18n.tr("notification-dismiss")).size(typography::BODY_SM))
                .padding(spacing::XXS)
                .style(container::rounded_box),
            tooltip::Position::Left,
        );

        // Layout: [marker] [title + description] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(marker)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders the toast overlay for the visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically in
    /// the order they were raised.
    pub fn view_overlay<'a>(
        notifications: &'a [Notification],
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        if notifications.is_empty() {
            return Container::new(Space::new())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(
            notifications
                .iter()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Accent color for a notification kind.
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_fill = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, border) = match status {
        button::Status::Active | button::Status::Disabled => (None, iced::Border::default()),
        button::Status::Hovered => (hover_fill(opacity::OVERLAY_SUBTLE), rounded),
        button::Status::Pressed => (hover_fill(opacity::OVERLAY_MEDIUM), rounded),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}
