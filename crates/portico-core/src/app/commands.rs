impl<VP, SC> PageApp<VP, SC>
where
    VP: ViewportProvider,
    SC: ScrollSurface,
{
    /// Navigation selection: scroll the viewport to `id`'s region. Unknown
    /// ids and absent regions are complete no-ops; a confirmed scroll also
    /// closes the mobile menu.
    pub fn scroll_to(&mut self, id: &str) {
        let Some(index) = self.registry.index_of(id) else {
            debug!("nav: scroll target not registered id={id}");
            return;
        };

        match self.scroll.scroll_to_section(index) {
            Ok(true) => {
                debug!("nav: scrolled to id={id}");
                if self.menu_open {
                    self.menu_open = false;
                    self.pending_redraw = true;
                }
            }
            Ok(false) => debug!("nav: region missing id={id}"),
            Err(_) => debug!("nav: scroll command failed id={id}"),
        }
    }

    /// Home affordance: scroll back to the very top. Leaves tracker state
    /// and the menu flag alone.
    pub fn scroll_to_top(&mut self) {
        if self.scroll.scroll_to_top().is_err() {
            debug!("nav: scroll-to-top command failed");
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.pending_redraw = true;
    }

    /// Raised by the shell once the platform clipboard confirms the write.
    /// The flag clears itself on the first tick past the configured flash
    /// duration.
    pub fn mark_email_copied(&mut self, now_ms: u64) {
        self.copied_since_ms = Some(now_ms);
        self.pending_redraw = true;
    }
}
