use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::extract::Menu;
use crate::site::SitePage;
use crate::ui::{HeaderTheme, MenuState, SCROLL_THRESHOLD};

/// Render the page header with logo, navigation and mobile menu toggle. The entry of `active`,
/// if any, is highlighted.
pub(crate) fn header(active: Option<SitePage>, theme: HeaderTheme, menu: MenuState) -> Markup {
    html! {
        header class=(theme.class_name())
            data-classes=(HeaderTheme::Transparent.class_name())
            data-onscroll-classes=(HeaderTheme::scrolled_classes())
            data-logo=(HeaderTheme::Transparent.logo())
            data-onscroll-logo=(HeaderTheme::Solid.logo())
            data-scroll-threshold=(SCROLL_THRESHOLD) {
            div class="container" {
                nav class="header__nav bottom-nav" {
                    div class="header__logo brand--logo" {
                        br;
                        a href="index.html" {
                            img src=(theme.logo()) alt="Greater Love Church";
                        }
                    }

                    div class="header__mobile--opener hide-on-lg" {
                        // Without the script the toggle reloads the page with the other menu state.
                        form method="get" {
                            button class=(menu.icon_class())
                                type="submit"
                                name="menu"
                                value=(menu.toggled().as_query())
                                aria-expanded=(menu.aria_expanded())
                                aria-controls=(MenuState::PANEL_ID)
                                data-toggle=(MenuState::PANEL_ID)
                                data-panel-class=(MenuState::PANEL_OPEN_CLASS)
                                data-icon-class=(MenuState::ICON_OPEN_CLASS)
                                data-body-class=(MenuState::BODY_OPEN_CLASS) {
                                span class="line" {}
                                span class="line" {}
                                span class="line" {}
                            }
                        }
                    }

                    ul class=(menu.panel_class()) id=(MenuState::PANEL_ID) {
                        li class="header__extra" {
                            div class="cta" {
                                a href="donations.html" class="button button-block-sm" { "Donación" }
                            }
                        }

                        @for page in SitePage::ALL {
                            li.header__list.active[Some(page) == active] {
                                a href=(page.href()) { (page.label()) }
                            }
                        }
                    }

                    div class="header__extra desktop-version" {
                        div class="cta hide-on-sm show-on-lg" {
                            a href="donations.html" class="button" { "Donación" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct NavQuery {
    page: Option<String>,
}

/// Return the header fragment for static pages that load their navigation dynamically.
#[tracing::instrument]
pub(crate) async fn nav(Query(query): Query<NavQuery>, Menu(menu): Menu) -> Markup {
    let active = query.page.as_deref().and_then(|identity| {
        identity
            .parse::<SitePage>()
            .inspect_err(|err| tracing::debug!(%err, "no nav entry highlighted"))
            .ok()
    });

    header(active, HeaderTheme::for_offset(0.0), menu)
}
