use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Tick = Rc<RefCell<dyn FnMut(f64)>>;

struct LoopState {
    pending: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

/// A `requestAnimationFrame` loop that re-requests itself after every tick
/// until cancelled. Dropping the loop cancels it.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            pending: RefCell::new(None),
            running: Cell::new(true),
        });
        let tick: Tick = Rc::new(RefCell::new(on_frame));
        schedule(Rc::downgrade(&state), &state, tick);
        Self { state }
    }

    /// Stop the loop and cancel the outstanding frame request. Safe to call
    /// any number of times.
    pub fn cancel(&self) {
        self.state.running.set(false);
        self.state.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

// The callback only holds a weak reference so a dropped loop frees its closure.
fn schedule(weak: Weak<LoopState>, state: &LoopState, tick: Tick) {
    let frame = request_animation_frame(move |timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if !state.running.get() {
            return;
        }
        {
            let mut on_frame = tick.borrow_mut();
            (&mut *on_frame)(timestamp);
        }
        if state.running.get() {
            schedule(Rc::downgrade(&state), &state, tick);
        }
    });
    *state.pending.borrow_mut() = Some(frame);
}
