use maud::{Markup, html};

use crate::extract::Menu;
use crate::partials;
use crate::partials::layout::banner;
use crate::site::SitePage;

const MINISTRIES: [(&str, &str); 4] = [
    ("Niños", "Enseñanza bíblica para los más pequeños durante el servicio."),
    ("Jóvenes", "Reuniones semanales, retiros y actividades para adolescentes y jóvenes."),
    ("Matrimonios", "Acompañamiento y consejería para parejas y familias."),
    ("Alabanza", "Músicos y cantantes que sirven en la adoración de cada domingo."),
];

pub(crate) async fn ministries(Menu(menu): Menu) -> Markup {
    let content = html! {
        (banner("Ministerios"))

        section class="ministries" {
            div class="container" {
                @for (name, description) in MINISTRIES {
                    article class="ministry" {
                        h3 { (name) }
                        p { (description) }
                    }
                }
            }
        }
    };

    partials::layout::layout(Some(SitePage::Ministerios), menu, "Ministerios", content)
}
