//! Viewport abstraction layer.

/// One threshold crossing reported for a registered section's region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisibilityCrossing {
    /// Registry index of the section whose region crossed the threshold.
    pub section: u16,
    /// `true` when the region became sufficiently visible, `false` when it
    /// stopped being so.
    pub entered: bool,
}

impl VisibilityCrossing {
    pub const fn entered(section: u16) -> Self {
        Self {
            section,
            entered: true,
        }
    }

    pub const fn left(section: u16) -> Self {
        Self {
            section,
            entered: false,
        }
    }
}

/// Polled source of visibility crossings. The platform adapter queues
/// crossings as they are delivered; the app drains the queue each tick, so
/// one drain sees exactly one delivery batch in delivery order.
pub trait ViewportProvider {
    type Error;

    fn poll_crossing(&mut self) -> Result<Option<VisibilityCrossing>, Self::Error>;
}

/// Scroll commands executed by the platform. Completion is never observed.
pub trait ScrollSurface {
    type Error;

    /// Smoothly scroll the region backing `section` to the top of the
    /// viewport. Returns `Ok(true)` when a backing region was found and the
    /// scroll was issued, `Ok(false)` when no region exists.
    fn scroll_to_section(&mut self, section: u16) -> Result<bool, Self::Error>;

    /// Smoothly scroll the viewport back to the top of the page.
    fn scroll_to_top(&mut self) -> Result<(), Self::Error>;
}

pub mod mock;
