use maud::{Markup, html};

use crate::extract::Menu;
use crate::feed::CHANNEL_ID;
use crate::partials;
use crate::partials::layout::banner;
use crate::site::SitePage;

pub(crate) async fn sermons(Menu(menu): Menu) -> Markup {
    let content = html! {
        (banner("Sermones"))

        section class="sermons" {
            div class="container" {
                p { "Todos nuestros servicios se transmiten y quedan disponibles en YouTube." }
                a class="button"
                    href={ "https://www.youtube.com/channel/" (CHANNEL_ID) }
                    target="_blank"
                    rel="noopener" {
                    "Ver sermones"
                }
            }
        }
    };

    partials::layout::layout(Some(SitePage::Sermones), menu, "Sermones", content)
}
