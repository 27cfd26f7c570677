use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jiff::civil::Date;
use maud::{Markup, html};

use crate::feed::Feed;
use crate::sunday::{self, Sundays};

/// How long the fragment waits for the feed proxy before giving up.
const FEED_TIMEOUT: Duration = Duration::from_secs(5);

/// Render the upcoming and last service with their date slots. The last sermon title is loaded
/// after the page through [`latest_video`].
pub(crate) fn events(today: Date) -> Markup {
    let (next, last) = match Sundays::around(today) {
        Ok(sundays) => (
            sunday::format_us(sundays.next),
            sunday::format_us(sundays.last),
        ),
        Err(err) => {
            tracing::warn!(%err, %today, "failed to compute service dates");
            (String::new(), String::new())
        }
    };

    html! {
        section class="events" {
            div class="container" {
                div class="event" {
                    h4 class="event__label" { "Próximo servicio" }
                    p class="event__date" id="nextEvent" { (next) }
                    p class="event__time" { "Domingo 10:00 AM" }
                }

                div class="event" {
                    h4 class="event__label" { "Último servicio" }
                    p class="event__date" id="lastEvent" { (last) }
                    p class="event__title" id="lastEvent-title"
                        hx-get="/f/latest-video"
                        hx-trigger="load"
                        hx-swap="innerHTML" {
                        "Mira el último sermón en YouTube"
                    }
                }
            }
        }
    }
}

/// Return the title of the latest uploaded video as a text fragment. On failure nothing is
/// swapped so the slot keeps its placeholder.
#[tracing::instrument(skip(feed))]
pub(crate) async fn latest_video(State(feed): State<Feed>) -> Response {
    match tokio::time::timeout(FEED_TIMEOUT, feed.latest_title()).await {
        Ok(Ok(title)) => {
            tracing::debug!(%title, "latest video");
            html! { (title) }.into_response()
        }
        Ok(Err(err)) => {
            tracing::warn!(%err, "failed to load latest video");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(_) => {
            tracing::warn!("timed out loading latest video");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
