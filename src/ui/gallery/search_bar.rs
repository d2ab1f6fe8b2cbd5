// SPDX-License-Identifier: MPL-2.0
//! Search field and submit button.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Enter in the field and the button both submit the draft.
pub fn view<'a>(draft: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let placeholder = i18n.tr("search-placeholder");

    let input = text_input(&placeholder, draft)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let submit = button(
        Container::new(Text::new(i18n.tr("search-button")).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::SubmitSearch);

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit);

    Container::new(Container::new(bar).max_width(sizing::SEARCH_BAR_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
