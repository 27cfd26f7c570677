//! Pages of the site that appear in the navigation.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SitePage {
    Home,
    Conocenos,
    Sermones,
    Ministerios,
    Contacto,
}

#[derive(thiserror::Error, Debug)]
#[error("unknown page identity {0:?}")]
pub struct UnknownPage(String);

impl SitePage {
    /// Navigation order.
    pub(crate) const ALL: [SitePage; 5] = [
        Self::Home,
        Self::Conocenos,
        Self::Sermones,
        Self::Ministerios,
        Self::Contacto,
    ];

    /// Identity string a page declares to get its nav entry highlighted.
    pub(crate) fn identity(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Conocenos => "CONOCENOS",
            Self::Sermones => "SERMONES",
            Self::Ministerios => "MINISTERIOS",
            Self::Contacto => "CONTACTO",
        }
    }

    pub(crate) fn href(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Conocenos => "about.html",
            Self::Sermones => "sermons.html",
            Self::Ministerios => "ministries.html",
            Self::Contacto => "contact.html",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Conocenos => "Conocenos",
            Self::Sermones => "Sermones",
            Self::Ministerios => "Ministerios",
            Self::Contacto => "Contacto",
        }
    }
}

impl FromStr for SitePage {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.identity() == s)
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}
