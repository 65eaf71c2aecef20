//! `IntersectionObserver`-backed visibility provider.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use js_sys::Array;
use log::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use portico_core::sections::SectionRegistry;
use portico_core::viewport::{ViewportProvider, VisibilityCrossing};

/// Observes every registered section's region and queues threshold
/// crossings in delivery order. The app drains the queue each frame, so a
/// drain corresponds to the batches delivered since the previous one.
///
/// Dropping the provider unobserves every region and disconnects the
/// observer, so no callback can fire into torn-down state.
pub struct IntersectionViewport {
    observer: IntersectionObserver,
    observed: Vec<Element>,
    queue: Rc<RefCell<VecDeque<VisibilityCrossing>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionViewport {
    /// Subscribe to every section in `registry` whose backing element
    /// exists. Sections without one are skipped.
    pub fn observe_registry(
        document: &Document,
        registry: &SectionRegistry,
        threshold_pct: u8,
    ) -> Result<Self, JsValue> {
        let queue: Rc<RefCell<VecDeque<VisibilityCrossing>>> =
            Rc::new(RefCell::new(VecDeque::new()));

        let ids: Vec<String> = registry
            .iter()
            .map(|section| String::from(section.id))
            .collect();

        let callback_queue = Rc::clone(&queue);
        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };

                    let target_id = entry.target().id();
                    let Some(index) = ids.iter().position(|id| *id == target_id) else {
                        continue;
                    };

                    let crossing = if entry.is_intersecting() {
                        VisibilityCrossing::entered(index as u16)
                    } else {
                        VisibilityCrossing::left(index as u16)
                    };
                    callback_queue.borrow_mut().push_back(crossing);
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        let threshold = f64::from(threshold_pct.clamp(1, 100)) / 100.0;
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mut observed = Vec::new();
        for section in registry.iter() {
            match document.get_element_by_id(section.id) {
                Some(element) => {
                    observer.observe(&element);
                    observed.push(element);
                }
                None => debug!("observer: no region for section id={}", section.id),
            }
        }

        Ok(Self {
            observer,
            observed,
            queue,
            _callback: callback,
        })
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

impl ViewportProvider for IntersectionViewport {
    type Error = core::convert::Infallible;

    fn poll_crossing(&mut self) -> Result<Option<VisibilityCrossing>, Self::Error> {
        Ok(self.queue.borrow_mut().pop_front())
    }
}

impl Drop for IntersectionViewport {
    fn drop(&mut self) {
        for element in &self.observed {
            self.observer.unobserve(element);
        }
        self.observer.disconnect();
    }
}
