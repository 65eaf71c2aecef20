//! DOM smooth-scroll surface.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use portico_core::sections::SectionRegistry;
use portico_core::viewport::ScrollSurface;

pub struct DomScroll {
    window: Window,
    document: Document,
    ids: Vec<&'static str>,
}

impl DomScroll {
    pub fn new(window: Window, document: Document, registry: &SectionRegistry) -> Self {
        let ids = registry.iter().map(|section| section.id).collect();

        Self {
            window,
            document,
            ids,
        }
    }
}

impl ScrollSurface for DomScroll {
    type Error = core::convert::Infallible;

    fn scroll_to_section(&mut self, section: u16) -> Result<bool, Self::Error> {
        let Some(id) = self.ids.get(section as usize) else {
            return Ok(false);
        };
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        Ok(true)
    }

    fn scroll_to_top(&mut self) -> Result<(), Self::Error> {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);

        Ok(())
    }
}
