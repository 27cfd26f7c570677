//! View state of the page header: scroll theme and mobile menu.
//!
//! Markup is rendered only from these values, and the browser script reads the same class names
//! and assets back out of `data-*` attributes, so both sides agree on what each state looks like.

/// Scroll offset in pixels above which the header switches to [`HeaderTheme::Solid`].
pub(crate) const SCROLL_THRESHOLD: f64 = 200.0;

const HEADER_BASE_CLASSES: &str = "header transparent fixed light-text";
const HEADER_SCROLLED_CLASSES: &str = "dark-text white-bg";

pub(crate) const LOGO_LIGHT: &str = "images/logo-light-cr.svg";
pub(crate) const LOGO_DARK: &str = "images/logo-dark-cr.svg";

/// Visual theme of every header on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum HeaderTheme {
    /// Transparent header with light text over the hero image.
    #[default]
    Transparent,
    /// Opaque white header with dark text once the page is scrolled.
    Solid,
}

impl HeaderTheme {
    pub(crate) fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    /// Complete class list of a header element in this theme.
    pub(crate) fn class_name(self) -> String {
        match self {
            Self::Transparent => HEADER_BASE_CLASSES.to_owned(),
            Self::Solid => format!("{HEADER_BASE_CLASSES} {HEADER_SCROLLED_CLASSES}"),
        }
    }

    /// Classes appended to the base list when scrolled.
    pub(crate) fn scrolled_classes() -> &'static str {
        HEADER_SCROLLED_CLASSES
    }

    pub(crate) fn logo(self) -> &'static str {
        match self {
            Self::Transparent => LOGO_LIGHT,
            Self::Solid => LOGO_DARK,
        }
    }
}

/// Whether the mobile menu panel is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub(crate) const PANEL_ID: &'static str = "mobile-menu";
    pub(crate) const PANEL_OPEN_CLASS: &'static str = "active";
    pub(crate) const ICON_OPEN_CLASS: &'static str = "rotate";
    pub(crate) const BODY_OPEN_CLASS: &'static str = "overflow-hidden";

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub(crate) fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    pub(crate) fn panel_class(self) -> &'static str {
        if self.is_open() {
            "header__navitems show-on-lg active"
        } else {
            "header__navitems show-on-lg"
        }
    }

    pub(crate) fn icon_class(self) -> &'static str {
        if self.is_open() {
            "header__mobile--icon rotate"
        } else {
            "header__mobile--icon"
        }
    }

    pub(crate) fn body_class(self) -> Option<&'static str> {
        self.is_open().then_some(Self::BODY_OPEN_CLASS)
    }

    /// Query value understood by [`MenuState::from_query`].
    pub(crate) fn as_query(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    /// Parse the `menu` query value, anything unknown means closed.
    pub(crate) fn from_query(value: &str) -> Self {
        if value.eq_ignore_ascii_case("open") {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(HeaderTheme::for_offset(0.0), HeaderTheme::Transparent);
        assert_eq!(HeaderTheme::for_offset(200.0), HeaderTheme::Transparent);
        assert_eq!(HeaderTheme::for_offset(200.5), HeaderTheme::Solid);
    }

    /// Replay scroll offsets through [`HeaderTheme::for_offset`] and collect the themes the
    /// header passes through. This models `syncHeaders` in `app.js`, which applies the same
    /// `offset > threshold` rule on every scroll event; `script_applies_the_same_rule` keeps the
    /// two in step.
    fn transitions(offsets: &[f64]) -> Vec<HeaderTheme> {
        let mut current = HeaderTheme::default();
        let mut changes = Vec::new();
        for &offset in offsets {
            let next = HeaderTheme::for_offset(offset);
            if next != current {
                changes.push(next);
                current = next;
            }
        }
        changes
    }

    #[test]
    fn crossing_the_threshold_changes_once() {
        assert_eq!(transitions(&[150.0, 250.0]), vec![HeaderTheme::Solid]);
        assert_eq!(
            transitions(&[150.0, 250.0, 300.0, 250.0, 150.0, 100.0]),
            vec![HeaderTheme::Solid, HeaderTheme::Transparent]
        );
        assert!(transitions(&[0.0, 100.0, 200.0]).is_empty());
    }

    #[test]
    fn page_loaded_already_scrolled() {
        assert_eq!(transitions(&[900.0]), vec![HeaderTheme::Solid]);
    }

    #[test]
    fn script_applies_the_same_rule() {
        let script = crate::assets::APP_JS;
        assert!(
            script.contains("offset > Number(header.dataset.scrollThreshold)"),
            "app.js must switch strictly above the rendered threshold"
        );
        assert!(script.contains("window.addEventListener('scroll', syncHeaders)"));
        assert_eq!(SCROLL_THRESHOLD.to_string(), "200");
    }

    #[test]
    fn themes_overwrite_the_whole_class_list() {
        assert_eq!(
            HeaderTheme::Transparent.class_name(),
            "header transparent fixed light-text"
        );
        assert_eq!(
            HeaderTheme::Solid.class_name(),
            "header transparent fixed light-text dark-text white-bg"
        );
        assert_eq!(HeaderTheme::Transparent.logo(), LOGO_LIGHT);
        assert_eq!(HeaderTheme::Solid.logo(), LOGO_DARK);
    }

    #[test]
    fn menu_alternates() {
        let closed = MenuState::default();
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.body_class(), None);

        let open = closed.toggled();
        assert_eq!(open.aria_expanded(), "true");
        assert!(open.panel_class().ends_with(MenuState::PANEL_OPEN_CLASS));
        assert!(open.icon_class().ends_with(MenuState::ICON_OPEN_CLASS));
        assert_eq!(open.body_class(), Some(MenuState::BODY_OPEN_CLASS));

        let state = (0..4).fold(closed, |state, _| state.toggled());
        assert_eq!(state, closed);
        let state = (0..3).fold(closed, |state, _| state.toggled());
        assert_eq!(state, open);
    }

    #[test]
    fn menu_query() {
        assert_eq!(MenuState::from_query("open"), MenuState::Open);
        assert_eq!(MenuState::from_query("OPEN"), MenuState::Open);
        assert_eq!(MenuState::from_query("closed"), MenuState::Closed);
        assert_eq!(MenuState::from_query("sideways"), MenuState::Closed);
        assert_eq!(MenuState::Open.as_query(), "open");
    }
}
