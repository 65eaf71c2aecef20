use std::collections::VecDeque;
use std::vec::Vec;

use super::*;
use crate::{
    sections::{Section, SectionRegistry},
    viewport::{ScrollSurface, ViewportProvider, VisibilityCrossing},
};

/// Test double fed by pushing crossings between ticks; one drain sees one
/// batch in push order.
#[derive(Default)]
struct QueueViewport {
    queue: VecDeque<VisibilityCrossing>,
}

impl ViewportProvider for QueueViewport {
    type Error = ();

    fn poll_crossing(&mut self) -> Result<Option<VisibilityCrossing>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}

struct FailingViewport;

impl ViewportProvider for FailingViewport {
    type Error = ();

    fn poll_crossing(&mut self) -> Result<Option<VisibilityCrossing>, Self::Error> {
        Err(())
    }
}

/// Records confirmed scrolls; indices listed in `missing_regions` behave
/// like sections whose document region does not exist.
#[derive(Default)]
struct RecordingScroll {
    scrolled: Vec<u16>,
    top_scrolls: usize,
    missing_regions: Vec<u16>,
}

impl ScrollSurface for RecordingScroll {
    type Error = ();

    fn scroll_to_section(&mut self, section: u16) -> Result<bool, Self::Error> {
        if self.missing_regions.contains(&section) {
            return Ok(false);
        }
        self.scrolled.push(section);
        Ok(true)
    }

    fn scroll_to_top(&mut self) -> Result<(), Self::Error> {
        self.top_scrolls += 1;
        Ok(())
    }
}

fn portfolio_registry() -> SectionRegistry {
    SectionRegistry::from_sections(&[
        Section::new("about", "About"),
        Section::new("skills", "Skills"),
        Section::new("projects", "Projects"),
    ])
    .unwrap()
}

fn make_app() -> PageApp<QueueViewport, RecordingScroll> {
    PageApp::new(
        portfolio_registry(),
        QueueViewport::default(),
        RecordingScroll::default(),
        TrackerConfig::default(),
    )
}

#[test]
fn first_section_is_active_before_any_crossing() {
    let app = make_app();

    assert_eq!(app.active_section().unwrap().id, "about");
    assert!(!app.is_revealed("about"));
    assert!(!app.is_revealed("skills"));
}

#[test]
fn empty_registry_has_no_active_section() {
    let app = PageApp::new(
        SectionRegistry::from_sections(&[]).unwrap(),
        QueueViewport::default(),
        RecordingScroll::default(),
        TrackerConfig::default(),
    );

    assert!(app.active_section().is_none());
}

#[test]
fn last_entry_in_batch_wins() {
    let mut app = make_app();
    app.viewport.queue.push_back(VisibilityCrossing::entered(0));
    app.viewport.queue.push_back(VisibilityCrossing::entered(2));
    app.viewport.queue.push_back(VisibilityCrossing::entered(1));

    assert_eq!(app.tick(0), TickResult::RenderRequested);

    assert_eq!(app.active_section().unwrap().id, "skills");
    assert!(app.is_revealed("about"));
    assert!(app.is_revealed("skills"));
    assert!(app.is_revealed("projects"));
}

#[test]
fn exit_crossings_change_nothing() {
    let mut app = make_app();

    app.viewport.queue.push_back(VisibilityCrossing::entered(0));
    let _ = app.tick(0);
    assert_eq!(app.active_section().unwrap().id, "about");

    app.viewport.queue.push_back(VisibilityCrossing::entered(1));
    let _ = app.tick(1);
    assert_eq!(app.active_section().unwrap().id, "skills");
    assert!(app.is_revealed("about"));
    assert!(app.is_revealed("skills"));
    assert!(!app.is_revealed("projects"));

    app.viewport.queue.push_back(VisibilityCrossing::left(0));
    assert_eq!(app.tick(2), TickResult::NoRender);
    assert_eq!(app.active_section().unwrap().id, "skills");
    assert!(app.is_revealed("about"));
    assert!(app.is_revealed("skills"));
}

#[test]
fn reveal_is_monotonic_across_batches() {
    let mut app = make_app();

    app.viewport.queue.push_back(VisibilityCrossing::entered(0));
    app.viewport.queue.push_back(VisibilityCrossing::left(0));
    let _ = app.tick(0);
    assert_eq!(app.revealed.len(), 1);

    app.viewport.queue.push_back(VisibilityCrossing::entered(2));
    app.viewport.queue.push_back(VisibilityCrossing::left(2));
    app.viewport.queue.push_back(VisibilityCrossing::entered(0));
    let _ = app.tick(1);
    assert_eq!(app.revealed.len(), 2);
    assert!(app.is_revealed("about"));
    assert!(app.is_revealed("projects"));
}

#[test]
fn unregistered_index_crossing_is_ignored() {
    let mut app = make_app();
    app.viewport.queue.push_back(VisibilityCrossing::entered(9));

    assert_eq!(app.tick(0), TickResult::NoRender);
    assert_eq!(app.active_section().unwrap().id, "about");
    assert_eq!(app.revealed.len(), 0);
}

#[test]
fn poll_failure_abandons_batch_without_state_change() {
    let mut app = PageApp::new(
        portfolio_registry(),
        FailingViewport,
        RecordingScroll::default(),
        TrackerConfig::default(),
    );

    let _ = app.tick(0);
    assert_eq!(app.tick(1), TickResult::NoRender);
    assert_eq!(app.active_section().unwrap().id, "about");
}

#[test]
fn scroll_to_unknown_id_is_a_no_op() {
    let mut app = make_app();
    app.toggle_menu();
    let _ = app.tick(0);

    app.scroll_to("missing-id");

    assert!(app.scroll.scrolled.is_empty());
    assert!(app.menu_open());
    assert_eq!(app.tick(1), TickResult::NoRender);
}

#[test]
fn scroll_to_missing_region_leaves_menu_open() {
    let mut app = make_app();
    app.scroll.missing_regions.push(2);
    app.toggle_menu();
    let _ = app.tick(0);

    app.scroll_to("projects");

    assert!(app.scroll.scrolled.is_empty());
    assert!(app.menu_open());
}

#[test]
fn scroll_to_closes_menu_and_issues_one_command() {
    let mut app = make_app();
    app.toggle_menu();
    let _ = app.tick(0);
    assert!(app.menu_open());

    app.scroll_to("projects");

    assert_eq!(app.scroll.scrolled, [2]);
    assert!(!app.menu_open());
    assert_eq!(app.tick(1), TickResult::RenderRequested);
}

#[test]
fn scroll_to_top_leaves_menu_and_tracker_alone() {
    let mut app = make_app();
    app.toggle_menu();
    let _ = app.tick(0);

    app.scroll_to_top();

    assert_eq!(app.scroll.top_scrolls, 1);
    assert!(app.menu_open());
    assert_eq!(app.active_section().unwrap().id, "about");
}

#[test]
fn copied_flag_clears_after_flash_window() {
    let mut app = make_app();
    let _ = app.tick(0);

    app.mark_email_copied(1_000);
    assert_eq!(app.tick(1_000), TickResult::RenderRequested);
    assert!(app.email_copied());

    assert_eq!(app.tick(2_400), TickResult::NoRender);
    assert!(app.email_copied());

    assert_eq!(app.tick(2_500), TickResult::RenderRequested);
    assert!(!app.email_copied());
}

#[test]
fn menu_toggle_is_independent_of_tracker_state() {
    let mut app = make_app();
    app.viewport.queue.push_back(VisibilityCrossing::entered(1));
    let _ = app.tick(0);

    app.toggle_menu();
    assert!(app.menu_open());
    assert_eq!(app.active_section().unwrap().id, "skills");

    app.toggle_menu();
    assert!(!app.menu_open());
    assert_eq!(app.active_section().unwrap().id, "skills");
}

#[test]
fn initial_tick_paints_then_goes_idle() {
    let mut app = make_app();

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(16), TickResult::NoRender);
}

#[test]
fn mock_providers_drive_an_inert_page() {
    use crate::viewport::mock::{MockViewport, NullScroll};

    let mut app = PageApp::new(
        portfolio_registry(),
        MockViewport::new(),
        NullScroll::new(),
        TrackerConfig::default(),
    );

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(16), TickResult::NoRender);

    app.toggle_menu();
    let _ = app.tick(32);
    app.scroll_to("about");
    assert!(app.menu_open());
}

#[test]
fn view_reflects_active_and_revealed_state() {
    let mut app = make_app();
    app.viewport.queue.push_back(VisibilityCrossing::entered(1));
    let _ = app.tick(0);

    let mut seen = false;
    app.with_page(|page| {
        assert_eq!(page.nav_items.len(), 3);
        assert!(!page.nav_items[0].active);
        assert!(page.nav_items[1].active);
        assert_eq!(page.nav_items[1].label, "Skills");
        assert!(!page.sections[0].revealed);
        assert!(page.sections[1].revealed);
        assert!(!page.menu_open);
        assert!(!page.email_copied);
        seen = true;
    });

    assert!(seen);
}
