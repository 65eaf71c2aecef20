impl<VP, SC> PageApp<VP, SC>
where
    VP: ViewportProvider,
    SC: ScrollSurface,
{
    pub fn new(registry: SectionRegistry, viewport: VP, scroll: SC, config: TrackerConfig) -> Self {
        let mut config = config;
        config.reveal_threshold_pct = config.reveal_threshold_pct.clamp(1, 100);

        Self {
            registry,
            viewport,
            scroll,
            config,
            active: 0,
            revealed: RevealedSet::new(),
            menu_open: false,
            copied_since_ms: None,
            pending_redraw: true,
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Section currently highlighted in the navigation. Before the first
    /// crossing this is the first registered section; `None` only for an
    /// empty registry.
    pub fn active_section(&self) -> Option<&Section> {
        self.registry.get(self.active)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.registry
            .index_of(id)
            .is_some_and(|index| self.revealed.contains(index))
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn email_copied(&self) -> bool {
        self.copied_since_ms.is_some()
    }

    pub fn with_page<F>(&self, f: F)
    where
        F: FnOnce(PageView<'_>),
    {
        let mut nav_items = [NavItemView::default(); MAX_SECTIONS];
        let mut sections = [SectionStateView::default(); MAX_SECTIONS];
        let mut count = 0usize;

        for (index, section) in self.registry.iter().enumerate() {
            nav_items[count] = NavItemView {
                id: section.id,
                label: section.label,
                active: index as u16 == self.active,
            };
            sections[count] = SectionStateView {
                id: section.id,
                revealed: self.revealed.contains(index as u16),
            };
            count += 1;
        }

        f(PageView {
            nav_items: &nav_items[..count],
            sections: &sections[..count],
            menu_open: self.menu_open,
            email_copied: self.copied_since_ms.is_some(),
        });
    }
}
