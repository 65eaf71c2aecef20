use super::{ScrollSurface, ViewportProvider, VisibilityCrossing};

/// No-browser visibility source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockViewport;

impl MockViewport {
    pub const fn new() -> Self {
        Self
    }
}

impl ViewportProvider for MockViewport {
    type Error = core::convert::Infallible;

    fn poll_crossing(&mut self) -> Result<Option<VisibilityCrossing>, Self::Error> {
        Ok(None)
    }
}

/// Scroll surface that resolves no regions and moves nothing.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullScroll;

impl NullScroll {
    pub const fn new() -> Self {
        Self
    }
}

impl ScrollSurface for NullScroll {
    type Error = core::convert::Infallible;

    fn scroll_to_section(&mut self, _section: u16) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn scroll_to_top(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
