impl<VP, SC> PageApp<VP, SC>
where
    VP: ViewportProvider,
    SC: ScrollSurface,
{
    /// Drain the current observation batch and expire timed flags. Crossings
    /// are applied in delivery order, so the last section entering within a
    /// batch ends up active.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let mut changed = self.drain_crossings();

        if self.expire_copied_flag(now_ms) {
            changed = true;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            changed = true;
        }

        if changed {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn drain_crossings(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.viewport.poll_crossing() {
                Ok(Some(crossing)) => {
                    if self.apply_crossing(crossing) {
                        changed = true;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    debug!("viewport: provider poll failed, abandoning batch");
                    break;
                }
            }
        }

        changed
    }

    fn apply_crossing(&mut self, crossing: VisibilityCrossing) -> bool {
        // Leaving the viewport demotes nothing; only entries matter.
        if !crossing.entered {
            return false;
        }

        let Some(section) = self.registry.get(crossing.section) else {
            debug!(
                "viewport: crossing for unregistered index={}",
                crossing.section
            );
            return false;
        };

        let newly_revealed = self.revealed.insert(crossing.section);
        let activated = self.active != crossing.section;
        self.active = crossing.section;

        if newly_revealed || activated {
            debug!(
                "viewport: section entered id={} active={} revealed_count={}",
                section.id, activated, self.revealed.len()
            );
        }

        newly_revealed || activated
    }

    fn expire_copied_flag(&mut self, now_ms: u64) -> bool {
        let Some(since_ms) = self.copied_since_ms else {
            return false;
        };

        if now_ms.saturating_sub(since_ms) >= u64::from(self.config.copied_flash_ms) {
            self.copied_since_ms = None;
            return true;
        }

        false
    }
}
