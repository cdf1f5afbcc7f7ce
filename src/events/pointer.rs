use crate::input::{ElementProbe, PointerSample};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

impl ElementProbe for web::Element {
    fn tag_name(&self) -> String {
        web::Element::tag_name(self)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// Subscribe to `pointermove` on the window. The handler receives the pointer
/// in viewport coordinates and the event target when it is an element.
///
/// Each animator holds its own listener; dropping it unsubscribes.
pub fn on_pointer_move(
    window: &web::Window,
    mut handler: impl FnMut(PointerSample, Option<web::Element>) + 'static,
) -> EventListener {
    EventListener::new(window, "pointermove", move |event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let sample = PointerSample::new(ev.client_x() as f32, ev.client_y() as f32);
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok());
        handler(sample, target);
    })
}
