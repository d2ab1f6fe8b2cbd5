// SPDX-License-Identifier: MPL-2.0
//! Photo gallery screen: search bar, result grid, loading indicator and the
//! floating "load more" button.

pub mod component;
pub mod empty_state;
pub mod grid;
pub mod projection;
pub mod search_bar;

pub use component::{Effect, Message, State, GRID_SCROLLABLE_ID};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, scrollable, tooltip, Column, Container, Id, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let projection = projection::project(state.photos(), state.is_loading(), state.downloads());

    let title = Container::new(Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let body: Element<'a, Message> = if projection.show_empty_state {
        empty_state::view(i18n)
    } else {
        let columns = projection::columns_for_width(state.viewport_width());
        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding([0.0, spacing::LG])
            .push(grid::view(
                &projection.tiles,
                columns,
                state.thumbnails(),
                i18n,
            ));

        if projection.show_spinner {
            content = content.push(
                Container::new(
                    AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation())
                        .into_element(),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center),
            );
        }

        // Room below the last row so the floating button never hides a tile.
        content = content.push(Container::new(Text::new("")).height(Length::Fixed(sizing::FAB)));

        scrollable(content)
            .id(Id::new(GRID_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let page = Column::new()
        .spacing(spacing::LG)
        .padding([spacing::LG, 0.0])
        .push(title)
        .push(Container::new(search_bar::view(state.draft(), i18n)).padding([0.0, spacing::LG]))
        .push(body);

    let mut layers = Stack::new().push(page);
    if projection.show_load_more {
        layers = layers.push(load_more_button(i18n));
    }
    layers.into()
}

fn load_more_button(i18n: &I18n) -> Element<'_, Message> {
    let label = Container::new(Text::new("+").size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let fab = button(label)
        .width(Length::Fixed(sizing::FAB))
        .height(Length::Fixed(sizing::FAB))
        .padding(0)
        .style(styles::button::floating)
        .on_press(Message::LoadMore);

    let hint = Container::new(Text::new(i18n.tr("load-more-tooltip")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tooltip);
    let fab = tooltip(fab, hint, tooltip::Position::Left).gap(spacing::XS);

    Container::new(fab)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}
