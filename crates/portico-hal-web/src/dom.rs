//! DOM binding for the page chrome.
//!
//! The static markup ships in `site/index.html`; this module only flips the
//! classes and labels the core's view models drive.

use js_sys::Function;
use log::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, EventTarget};

use portico_core::render::PageView;

/// Attribute carried by every navigation control, holding its section id.
pub const NAV_SECTION_ATTR: &str = "data-section";

pub const HOME_LINK_ID: &str = "home-link";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const COPY_BUTTON_ID: &str = "copy-email";
pub const COPY_LABEL_ID: &str = "copy-email-label";

const ACTIVE_CLASS: &str = "active";
const REVEALED_CLASS: &str = "revealed";
const MENU_OPEN_CLASS: &str = "open";

/// Resolved handles to the chrome elements the renderer touches. Elements
/// missing from the markup are simply never updated.
pub struct PageDom {
    document: Document,
    nav_controls: Vec<(String, Element)>,
    mobile_menu: Option<Element>,
    copy_label: Option<Element>,
}

impl PageDom {
    pub fn bind(document: Document) -> Result<Self, JsValue> {
        let mut nav_controls = Vec::new();

        let controls = document.query_selector_all(&format!("[{NAV_SECTION_ATTR}]"))?;
        for index in 0..controls.length() {
            let Some(node) = controls.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            match element.get_attribute(NAV_SECTION_ATTR) {
                Some(id) => nav_controls.push((id, element)),
                None => continue,
            }
        }

        let mobile_menu = document.get_element_by_id(MOBILE_MENU_ID);
        let copy_label = document.get_element_by_id(COPY_LABEL_ID);
        if mobile_menu.is_none() {
            debug!("dom: no mobile menu in markup");
        }

        Ok(Self {
            document,
            nav_controls,
            mobile_menu,
            copy_label,
        })
    }

    /// Section ids of the bound navigation controls, one per control, in
    /// document order. Used by the shell to attach click handlers.
    pub fn nav_controls(&self) -> &[(String, Element)] {
        &self.nav_controls
    }

    /// Push a view snapshot into the document. Reveal classes are only ever
    /// added; the set they mirror is monotonic.
    pub fn apply(&self, page: &PageView<'_>) {
        for (id, element) in &self.nav_controls {
            let active = page
                .nav_items
                .iter()
                .any(|item| item.active && item.id == id.as_str());
            set_class(element, ACTIVE_CLASS, active);
        }

        for state in page.sections {
            if !state.revealed {
                continue;
            }
            if let Some(element) = self.document.get_element_by_id(state.id) {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
        }

        if let Some(menu) = &self.mobile_menu {
            set_class(menu, MENU_OPEN_CLASS, page.menu_open);
        }

        if let Some(label) = &self.copy_label {
            let text = if page.email_copied { "Copied" } else { "Copy" };
            label.set_text_content(Some(text));
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let _ = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

/// Attach a zero-argument click handler. The caller must keep the closure
/// alive for as long as the handler may fire.
pub fn on_click(target: &EventTarget, closure: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref::<Function>())
}
