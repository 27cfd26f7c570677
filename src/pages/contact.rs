use maud::{Markup, html};

use crate::extract::Menu;
use crate::partials;
use crate::partials::layout::banner;
use crate::site::SitePage;

pub(crate) async fn contact(Menu(menu): Menu) -> Markup {
    let content = html! {
        (banner("Contacto"))

        section class="contact" {
            div class="container" {
                h2 { "Visítanos" }
                p { "Servicio dominical a las 10:00 AM." }
                p {
                    "Escríbenos a "
                    a href="mailto:info@greaterlovechurch.org" { "info@greaterlovechurch.org" }
                }
            }
        }
    };

    partials::layout::layout(Some(SitePage::Contacto), menu, "Contacto", content)
}
