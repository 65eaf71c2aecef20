//! Page-level view models consumed by the shell renderer.

/// One navigation control, desktop and mobile menus alike.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavItemView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl Default for NavItemView {
    fn default() -> Self {
        Self {
            id: "",
            label: "",
            active: false,
        }
    }
}

/// Reveal state of one registered section's region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionStateView {
    pub id: &'static str,
    pub revealed: bool,
}

impl Default for SectionStateView {
    fn default() -> Self {
        Self {
            id: "",
            revealed: false,
        }
    }
}

/// Snapshot of everything the shell needs to paint the chrome around the
/// static page content.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageView<'a> {
    pub nav_items: &'a [NavItemView],
    pub sections: &'a [SectionStateView],
    pub menu_open: bool,
    pub email_copied: bool,
}
