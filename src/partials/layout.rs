use maud::{DOCTYPE, Markup, html};

use crate::partials;
use crate::site::SitePage;
use crate::ui::{HeaderTheme, MenuState};

/// Render the full page around `content`: head, header with navigation, banner and footer.
pub(crate) fn layout(
    page: Option<SitePage>,
    menu: MenuState,
    title: &str,
    content: Markup,
) -> Markup {
    // Pages are always rendered scrolled to the top.
    let theme = HeaderTheme::for_offset(0.0);

    html! {
        (DOCTYPE)
        html lang="es" {
            (partials::head::head(title))
            body class=[menu.body_class()] {
                div class="navbar" {
                    (partials::header::header(page, theme, menu))
                }

                main {
                    (content)
                }

                footer class="footer" {
                    div class="container" {
                        p { "Greater Love Church" }
                        p class="footer__links" {
                            @for entry in SitePage::ALL {
                                a href=(entry.href()) { (entry.label()) }
                                " "
                            }
                        }
                    }
                }

                script src="https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
            }
        }
    }
}

/// Render a page banner with its heading.
pub(crate) fn banner(heading: &str) -> Markup {
    html! {
        section class="banner" {
            div class="container" {
                h1 class="title-cr" { (heading) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_menu_locks_body_scroll() {
        let html = layout(None, MenuState::Open, "Home", html! {}).into_string();
        assert!(html.contains(r#"<body class="overflow-hidden">"#), "{html}");
    }

    #[test]
    fn closed_menu_leaves_body_alone() {
        let html = layout(None, MenuState::Closed, "Home", html! {}).into_string();
        assert!(html.contains("<body>"), "{html}");
    }

    #[test]
    fn header_inside_navbar_container() {
        let html = layout(Some(SitePage::Home), MenuState::Closed, "Home", html! {}).into_string();
        assert!(html.contains(r#"<div class="navbar"><header"#), "{html}");
        assert!(html.contains(r#"class="header__list active""#), "{html}");
    }
}
