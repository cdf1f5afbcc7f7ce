use glam::Vec2;

/// Latest known pointer coordinates in viewport (CSS pixel) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }
}

// ---------------- Hover detection ----------------

/// Marker class authors put on custom clickable elements.
pub const CLICKABLE_CLASS: &str = "cursor-pointer";

/// The slice of a DOM element that hover detection needs. Implemented for
/// `web_sys::Element` in the browser glue and by fakes in tests.
pub trait ElementProbe: Sized {
    fn tag_name(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

/// True when `target` or any of its ancestors is a link, a button or is
/// marked clickable. A missing (non-element) target is never interactive.
pub fn is_interactive<E: ElementProbe>(target: Option<E>) -> bool {
    let mut cursor = target;
    while let Some(el) = cursor {
        let tag = el.tag_name();
        if tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button") {
            return true;
        }
        if el.has_class(CLICKABLE_CLASS) {
            return true;
        }
        cursor = el.parent();
    }
    false
}
