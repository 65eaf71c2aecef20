//! Wires the page core to the browser adapter and runs the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Performance, Window};

use portico_core::app::{PageApp, TickResult, TrackerConfig};
use portico_hal_web::clipboard;
use portico_hal_web::dom::{self, PageDom};
use portico_hal_web::observer::IntersectionViewport;
use portico_hal_web::scroll::DomScroll;

use crate::site;

type App = PageApp<IntersectionViewport, DomScroll>;

pub struct Shell {
    app: App,
    dom: PageDom,
    window: Window,
    performance: Option<Performance>,
    frame_callback: Option<Closure<dyn FnMut()>>,
    _click_handlers: Vec<Closure<dyn FnMut()>>,
}

/// Build the tracker for the portfolio page and start the frame loop. The
/// shell (and with it every subscription) lives for the page's lifetime,
/// held by the closures registered on the document.
pub fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    let registry = site::registry().map_err(|error| {
        JsValue::from_str(&format!("shell: invalid section registry: {error:?}"))
    })?;
    let config = TrackerConfig::default();

    let viewport =
        IntersectionViewport::observe_registry(&document, &registry, config.reveal_threshold_pct)?;
    info!(
        "shell: observing {} of {} sections",
        viewport.observed_count(),
        registry.len()
    );

    let scroll = DomScroll::new(window.clone(), document.clone(), &registry);
    let page_dom = PageDom::bind(document.clone())?;
    let app = PageApp::new(registry, viewport, scroll, config);

    let performance = window.performance();
    let shell = Rc::new(RefCell::new(Shell {
        app,
        dom: page_dom,
        window,
        performance,
        frame_callback: None,
        _click_handlers: Vec::new(),
    }));

    bind_controls(&shell, &document)?;
    install_frame_loop(&shell);

    Ok(())
}

impl Shell {
    fn now_ms(&self) -> u64 {
        self.performance
            .as_ref()
            .map(|performance| performance.now() as u64)
            .unwrap_or(0)
    }

    fn frame(&mut self) {
        let now_ms = self.now_ms();
        if self.app.tick(now_ms) == TickResult::RenderRequested {
            self.app.with_page(|page| self.dom.apply(&page));
        }
    }

    fn schedule_frame(&self) {
        let Some(callback) = &self.frame_callback else {
            return;
        };

        if self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("shell: failed to schedule next frame");
        }
    }
}

fn bind_controls(shell: &Rc<RefCell<Shell>>, document: &Document) -> Result<(), JsValue> {
    let nav_controls: Vec<_> = shell
        .borrow()
        .dom
        .nav_controls()
        .iter()
        .cloned()
        .collect();

    for (id, element) in nav_controls {
        let handler_shell = Rc::clone(shell);
        let handler = Closure::wrap(Box::new(move || {
            handler_shell.borrow_mut().app.scroll_to(&id);
        }) as Box<dyn FnMut()>);
        dom::on_click(&element, &handler)?;
        shell.borrow_mut()._click_handlers.push(handler);
    }

    if let Some(home) = document.get_element_by_id(dom::HOME_LINK_ID) {
        let handler_shell = Rc::clone(shell);
        let handler = Closure::wrap(Box::new(move || {
            handler_shell.borrow_mut().app.scroll_to_top();
        }) as Box<dyn FnMut()>);
        dom::on_click(&home, &handler)?;
        shell.borrow_mut()._click_handlers.push(handler);
    }

    if let Some(toggle) = document.get_element_by_id(dom::MENU_TOGGLE_ID) {
        let handler_shell = Rc::clone(shell);
        let handler = Closure::wrap(Box::new(move || {
            handler_shell.borrow_mut().app.toggle_menu();
        }) as Box<dyn FnMut()>);
        dom::on_click(&toggle, &handler)?;
        shell.borrow_mut()._click_handlers.push(handler);
    }

    if let Some(copy) = document.get_element_by_id(dom::COPY_BUTTON_ID) {
        let handler_shell = Rc::clone(shell);
        let handler = Closure::wrap(Box::new(move || {
            let window = handler_shell.borrow().window.clone();
            let copied_shell = Rc::clone(&handler_shell);
            clipboard::copy_text(&window, site::EMAIL, move || {
                let now_ms = copied_shell.borrow().now_ms();
                copied_shell.borrow_mut().app.mark_email_copied(now_ms);
            });
        }) as Box<dyn FnMut()>);
        dom::on_click(&copy, &handler)?;
        shell.borrow_mut()._click_handlers.push(handler);
    }

    Ok(())
}

fn install_frame_loop(shell: &Rc<RefCell<Shell>>) {
    let loop_shell = Rc::clone(shell);
    let callback = Closure::wrap(Box::new(move || {
        let mut shell_ref = loop_shell.borrow_mut();
        shell_ref.frame();
        shell_ref.schedule_frame();
    }) as Box<dyn FnMut()>);

    let mut shell_ref = shell.borrow_mut();
    shell_ref.frame_callback = Some(callback);
    shell_ref.schedule_frame();
}
