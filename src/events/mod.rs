pub mod pointer;

pub use pointer::on_pointer_move;

use gloo::events::EventListener;
use web_sys as web;

/// Subscribe to window resizes. The subscription ends when the returned
/// listener is dropped.
pub fn on_resize(window: &web::Window, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(window, "resize", move |_| handler())
}
