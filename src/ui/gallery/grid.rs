// SPDX-License-Identifier: MPL-2.0
//! Photo grid and its tiles.

use super::component::Message;
use super::projection::Tile;
use crate::i18n::fluent::I18n;
use crate::media::{Thumbnail, ThumbnailCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Lays `tiles` out in rows of `columns` equally wide cells.
pub fn view<'a>(
    tiles: &[Tile<'a>],
    columns: usize,
    thumbnails: &'a ThumbnailCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::MD);

    for chunk in tiles.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);
        for tile in chunk {
            row = row.push(tile_view(*tile, thumbnails, i18n));
        }
        // Pad the last row so its tiles keep the grid's cell width.
        for _ in chunk.len()..columns {
            row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn tile_view<'a>(
    tile: Tile<'a>,
    thumbnails: &'a ThumbnailCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let photo = tile.photo;

    let image_area: Element<'a, Message> = match thumbnails.get(photo.id()) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(i18n.tr("tile-image-unavailable")),
        Some(Thumbnail::Loading) | None => placeholder(photo.alt().to_string()),
    };

    let credit = Text::new(photo.photographer())
        .size(typography::CAPTION)
        .width(Length::Fill);

    let label = if tile.downloading {
        i18n.tr("tile-downloading")
    } else {
        i18n.tr("tile-download")
    };
    let download = button(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .on_press_maybe((!tile.downloading).then_some(Message::DownloadRequested(photo.id())));

    let footer = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(credit)
        .push(download);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(image_area)
            .push(footer),
    )
    .padding(spacing::SM)
    .width(Length::FillPortion(1))
    .style(styles::container::tile)
    .into()
}

fn placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(Text::new(caption).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
