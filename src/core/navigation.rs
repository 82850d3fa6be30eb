//! Navigation state: mobile menu, fragment links and scroll-based highlighting

/// Open/closed state of the mobile menu.
///
/// The menu, its toggle control and the hamburger icon are always rendered from this one
/// flag so they can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A page section as seen by the scroll handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Option<String>,
    /// Distance from the top of the document
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: Some(id.into()),
            top,
        }
    }

    pub fn anonymous(top: f64) -> Self {
        Self { id: None, top }
    }
}

/// In-page link target parsed from an `href`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// The bare `#` link
    Root,
    /// `#id`
    Target(&'a str),
}

/// Parse an in-page fragment reference. Returns `None` for anything not starting with `#`.
pub fn parse_fragment(href: &str) -> Option<Fragment<'_>> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        Some(Fragment::Root)
    } else {
        Some(Fragment::Target(id))
    }
}

/// Id of the section the reader is currently in.
///
/// Walks sections in document order; every section whose `top - activation_offset` has been
/// passed replaces the previous match. Above all thresholds nothing is current.
pub fn current_section(scroll_y: f64, sections: &[Section], activation_offset: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - activation_offset {
            current = Some(section.id.as_deref());
        }
    }
    current.flatten()
}

/// Whether a nav link with `href` should be highlighted for `current`.
pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
