//! Page state machine for navigation highlighting and section reveal.

use log::debug;

use crate::{
    render::{NavItemView, PageView, SectionStateView},
    sections::{MAX_SECTIONS, Section, SectionRegistry},
    viewport::{ScrollSurface, ViewportProvider, VisibilityCrossing},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Tunables for the tracker. Threshold is handed to the platform observer
/// at setup; the copied-flag duration is consumed by the tick loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackerConfig {
    /// Fraction of a region's own area, in percent, that must be inside the
    /// viewport for the region to count as visible.
    pub reveal_threshold_pct: u8,
    /// How long the contact panel's "copied" flag stays raised.
    pub copied_flash_ms: u16,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reveal_threshold_pct: 15,
            copied_flash_ms: 1_500,
        }
    }
}

/// State owned by one mounted page: which section is active, which sections
/// have ever been revealed, and the two cosmetic flags (mobile menu, copied
/// notice). Dropping the app tears everything down; nothing is persisted.
pub struct PageApp<VP, SC>
where
    VP: ViewportProvider,
    SC: ScrollSurface,
{
    registry: SectionRegistry,
    viewport: VP,
    scroll: SC,
    config: TrackerConfig,
    active: u16,
    revealed: RevealedSet,
    menu_open: bool,
    copied_since_ms: Option<u64>,
    pending_redraw: bool,
}

include!("view.rs");
include!("runtime.rs");
include!("commands.rs");
include!("reveal.rs");

#[cfg(test)]
mod tests;
