use maud::{Markup, html};

use crate::extract::Menu;
use crate::partials;
use crate::partials::layout::banner;

pub(crate) async fn donations(Menu(menu): Menu) -> Markup {
    let content = html! {
        (banner("Donación"))

        section class="donations" {
            div class="container" {
                p { "Gracias por sostener la obra con tu generosidad." }
                p { "Puedes dar durante el servicio o por transferencia bancaria." }
                img src="images/payments/Bac_credomatic_logo.svg" alt="BAC Credomatic";
            }
        }
    };

    // Donations are reachable from the call to action, not from a nav entry.
    partials::layout::layout(None, menu, "Donación", content)
}
