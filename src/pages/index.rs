use axum::extract::State;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use maud::{Markup, html};

use crate::extract::Menu;
use crate::partials;
use crate::site::SitePage;

pub(crate) async fn index(State(tz): State<TimeZone>, Menu(menu): Menu) -> Markup {
    let today = Timestamp::now().to_zoned(tz).date();

    let content = html! {
        section class="hero" id="first-slide" {
            div class="container" {
                h1 class="hero__title" { "Bienvenidos a Greater Love Church" }
                p class="hero__text" { "Una familia unida por el amor de Dios." }
                a href=(SitePage::Conocenos.href()) class="button" { "Conocenos" }
            }
        }

        (partials::events::events(today))

        section class="welcome" {
            div class="container" {
                h2 { "Nuestra iglesia" }
                p {
                    "Te invitamos a adorar con nosotros cada domingo. "
                    "Hay un lugar para ti y tu familia."
                }
            }
        }
    };

    partials::layout::layout(Some(SitePage::Home), menu, "Home", content)
}
