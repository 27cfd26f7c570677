use maud::{Markup, html};

use crate::extract::Menu;
use crate::partials;
use crate::partials::layout::banner;
use crate::site::SitePage;

pub(crate) async fn about(Menu(menu): Menu) -> Markup {
    let content = html! {
        (banner("Conocenos"))

        section class="about" {
            div class="container" {
                h2 { "Quiénes somos" }
                p { "Somos una comunidad de fe que busca amar a Dios y servir a nuestro prójimo." }

                h2 { "Nuestra visión" }
                p { "Formar discípulos que vivan el evangelio en su familia, su trabajo y su ciudad." }
            }
        }
    };

    partials::layout::layout(Some(SitePage::Conocenos), menu, "Conocenos", content)
}
