// SPDX-License-Identifier: MPL-2.0
//! Turns gallery effects into runtime tasks.
//!
//! The gallery component decides *what* should happen; this module owns the
//! services and decides *how*: network requests become [`Task::perform`]
//! futures whose results are routed back as gallery messages.

use super::{Message, Services};
use crate::media;
use crate::ui::gallery::{self, Effect, GRID_SCROLLABLE_ID};
use crate::ui::notifications;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable slices of [`App`](super::App) needed while handling a message.
pub(super) struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub services: &'a Services,
}

pub(super) fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effects = ctx.gallery.update(message);
    run_effects(ctx, effects)
}

pub(super) fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| run_effect(ctx, effect)))
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::Search(ticket) => {
            let request = ticket.id;
            Task::perform(ctx.services.search.search(ticket.request), move |result| {
                Message::Gallery(gallery::Message::SearchCompleted { request, result })
            })
        }
        Effect::LoadThumbnails(requests) => {
            let images = &ctx.services.images;
            Task::batch(requests.into_iter().map(|thumbnail| {
                let photo = thumbnail.photo;
                Task::perform(images.fetch_image(&thumbnail.url), move |result| {
                    Message::Gallery(gallery::Message::ThumbnailLoaded { photo, result })
                })
            }))
        }
        Effect::Download(ticket) => {
            let photo = ticket.photo;
            Task::perform(
                media::download_photo(
                    ctx.services.images.clone(),
                    ctx.services.saver.clone(),
                    ticket.url,
                    ticket.photographer,
                ),
                move |result| Message::Gallery(gallery::Message::DownloadCompleted { photo, result }),
            )
        }
        Effect::ScrollToTop => {
            operation::snap_to(Id::new(GRID_SCROLLABLE_ID), RelativeOffset::START)
        }
        Effect::ScrollToEnd => operation::snap_to(Id::new(GRID_SCROLLABLE_ID), RelativeOffset::END),
        Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}
