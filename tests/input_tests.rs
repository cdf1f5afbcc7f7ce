// Host-side tests for pointer input helpers, hover detection and easing.
// A small fake element tree stands in for the DOM.

use glam::Vec2;
use portfolio_fx::ease::*;
use portfolio_fx::input::*;
use std::rc::Rc;

#[derive(Clone)]
struct FakeElement(Rc<Node>);

struct Node {
    tag: &'static str,
    classes: Vec<&'static str>,
    parent: Option<FakeElement>,
}

impl FakeElement {
    fn new(tag: &'static str, classes: &[&'static str], parent: Option<&FakeElement>) -> Self {
        FakeElement(Rc::new(Node {
            tag,
            classes: classes.to_vec(),
            parent: parent.cloned(),
        }))
    }
}

impl ElementProbe for FakeElement {
    fn tag_name(&self) -> String {
        self.0.tag.to_string()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.iter().any(|c| *c == class)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}

#[test]
fn links_and_buttons_are_interactive() {
    assert!(is_interactive(Some(FakeElement::new("A", &[], None))));
    assert!(is_interactive(Some(FakeElement::new("BUTTON", &[], None))));
    assert!(is_interactive(Some(FakeElement::new("button", &[], None))));
}

#[test]
fn clickable_class_marks_custom_elements() {
    let card = FakeElement::new("DIV", &["card", CLICKABLE_CLASS], None);
    assert!(is_interactive(Some(card)));
}

#[test]
fn descendants_of_interactive_elements_count() {
    let link = FakeElement::new("A", &[], None);
    let span = FakeElement::new("SPAN", &[], Some(&link));
    let icon = FakeElement::new("svg", &[], Some(&span));
    assert!(is_interactive(Some(icon)));

    let tile = FakeElement::new("DIV", &[CLICKABLE_CLASS], None);
    let label = FakeElement::new("P", &[], Some(&tile));
    assert!(is_interactive(Some(label)));
}

#[test]
fn plain_content_is_not_interactive() {
    let body = FakeElement::new("BODY", &[], None);
    let section = FakeElement::new("SECTION", &["hero"], Some(&body));
    let p = FakeElement::new("P", &["text-slate-200"], Some(&section));
    assert!(!is_interactive(Some(p)));
}

#[test]
fn missing_target_fails_closed() {
    assert!(!is_interactive::<FakeElement>(None));
}

#[test]
fn viewport_area_and_clamping() {
    assert_eq!(Viewport::new(1500.0, 1000.0).area(), 1_500_000.0);
    assert_eq!(Viewport::new(-5.0, 10.0).area(), 0.0);
}

#[test]
fn pointer_sample_round_trips_through_vec2() {
    let s = PointerSample::from(Vec2::new(3.0, 4.0));
    assert_eq!(s, PointerSample::new(3.0, 4.0));
    assert_eq!(s.position(), Vec2::new(3.0, 4.0));
}

// ---------------- Easing ----------------

#[test]
fn ease_toward_covers_fixed_fraction() {
    assert!((ease_toward(0.0, 100.0, 0.12) - 12.0).abs() < 1e-5);
    let v = ease_toward_vec(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.1);
    assert!((v - Vec2::new(10.0, -5.0)).length() < 1e-5);
}

#[test]
fn saturating_is_monotonic_and_capped() {
    let mut prev = 0.0;
    for i in 0..200 {
        let v = saturating(i as f32, 1.0, 0.15, 6.0);
        assert!(v >= prev);
        assert!(v <= 6.0);
        prev = v;
    }
    assert_eq!(saturating(1000.0, 1.0, 0.15, 6.0), 6.0);
    assert_eq!(saturating(-3.0, 1.0, 0.15, 6.0), 0.0);
    // sub-linear exponent reacts faster to small motion
    assert!(saturating(4.0, 0.5, 1.0, 6.0) > saturating(4.0, 1.0, 0.15, 6.0));
}

#[test]
fn wrap_reenters_from_the_opposite_side() {
    assert_eq!(wrap(-0.1, 800.0), 800.0);
    assert_eq!(wrap(800.1, 800.0), 0.0);
    assert_eq!(wrap(400.0, 800.0), 400.0);
    assert_eq!(wrap(800.0, 800.0), 800.0);
}

#[test]
fn clamp_symmetric_limits_both_sides() {
    assert_eq!(clamp_symmetric(90.0, 25.0), 25.0);
    assert_eq!(clamp_symmetric(-90.0, 25.0), -25.0);
    assert_eq!(clamp_symmetric(3.0, 25.0), 3.0);
}
