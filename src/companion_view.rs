use crate::companion::{BodyPose, CompanionPose, Mouth};
use anyhow::anyhow;
use web_sys as web;

const BODY_DEFAULT: &str = "M10,50 Q10,10 50,10 T90,50 V80 Q90,95 75,95 Q65,95 65,85 Q65,95 50,95 Q35,95 35,85 Q35,95 25,95 Q10,95 10,80 Z";
// Taller body, tail pulled up
const BODY_STARTLED: &str = "M12,44 Q12,2 50,2 T88,44 V72 Q88,82 74,82 Q62,86 50,84 Q38,86 26,82 Q12,82 12,72 Z";

const MARKUP: &str = r#"<svg viewBox="0 0 100 100" width="48" height="48" style="overflow:visible">
  <g data-part="bob">
    <path data-part="body"/>
    <g data-part="face">
      <ellipse data-part="eye-l" cx="-16" cy="0"/>
      <circle data-part="pupil-l" cx="-16" cy="0"/>
      <ellipse data-part="eye-r" cx="16" cy="0"/>
      <circle data-part="pupil-r" cx="16" cy="0"/>
      <circle data-part="cheek-l" cx="-20" cy="14" r="5"/>
      <circle data-part="cheek-r" cx="20" cy="14" r="5"/>
      <path data-part="smile" d="M-5,8 Q0,12 5,8" stroke-width="2" fill="none"/>
      <circle data-part="mouth-o" cx="0" cy="10"/>
    </g>
  </g>
</svg>"#;

/// The companion's SVG, built once inside its container and updated from a
/// `CompanionPose` every frame.
pub struct CompanionView {
    container: web::HtmlElement,
    svg: web::Element,
    bob: web::Element,
    body: web::Element,
    face: web::Element,
    eyes: [web::Element; 2],
    pupils: [web::Element; 2],
    cheeks: [web::Element; 2],
    smile: web::Element,
    mouth_o: web::Element,
}

fn part(root: &web::Element, name: &str) -> anyhow::Result<web::Element> {
    root.query_selector(&format!("[data-part=\"{}\"]", name))
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("companion markup lost part {}", name))
}

fn set(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}

impl CompanionView {
    pub fn build(document: &web::Document, container_id: &str) -> anyhow::Result<Self> {
        let container: web::HtmlElement = crate::dom::element_by_id(document, container_id)?;
        container.set_inner_html(MARKUP);
        let style = container.style();
        _ = style.set_property("position", "fixed");
        _ = style.set_property("left", "0");
        _ = style.set_property("top", "0");
        _ = style.set_property("pointer-events", "none");
        _ = style.set_property("z-index", "100");
        _ = style.set_property("will-change", "transform");

        let root: &web::Element = &container;
        let svg = root
            .query_selector("svg")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("companion markup has no svg"))?;
        Ok(Self {
            bob: part(root, "bob")?,
            body: part(root, "body")?,
            face: part(root, "face")?,
            eyes: [part(root, "eye-l")?, part(root, "eye-r")?],
            pupils: [part(root, "pupil-l")?, part(root, "pupil-r")?],
            cheeks: [part(root, "cheek-l")?, part(root, "cheek-r")?],
            smile: part(root, "smile")?,
            mouth_o: part(root, "mouth-o")?,
            svg,
            container,
        })
    }

    pub fn apply(&self, pose: &CompanionPose, visible: bool) {
        let style = self.container.style();
        if !visible {
            _ = style.set_property("display", "none");
            return;
        }
        _ = style.set_property("display", "block");
        _ = style.set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.2}deg)",
                pose.position.x, pose.position.y, pose.rotation_deg
            ),
        );

        let p = &pose.palette;
        set(
            &self.svg,
            "style",
            &format!("overflow:visible;filter:drop-shadow(0 0 15px {})", p.glow),
        );
        set(
            &self.bob,
            "transform",
            &format!(
                "translate(0 {:.2}) translate(50 50) scale({:.3}) translate(-50 -50)",
                pose.vertical_offset, pose.scale
            ),
        );

        let d = match pose.body {
            BodyPose::Default => BODY_DEFAULT,
            BodyPose::Startled => BODY_STARTLED,
        };
        set(&self.body, "d", d);
        set(&self.body, "fill", &p.body.to_hex());
        set(&self.body, "fill-opacity", &p.body.a.to_string());

        set(
            &self.face,
            "transform",
            &format!(
                "translate({:.2} {:.2})",
                50.0 + pose.eye_offset.x,
                45.0 + pose.eye_offset.y
            ),
        );
        for eye in &self.eyes {
            set(eye, "rx", &pose.eyes.rx.to_string());
            set(eye, "ry", &pose.eyes.ry.to_string());
            set(eye, "fill", &p.eye.to_css());
        }
        for pupil in &self.pupils {
            set(pupil, "r", &pose.eyes.pupil_radius.to_string());
            set(pupil, "fill", &p.pupil.to_css());
        }
        for cheek in &self.cheeks {
            set(cheek, "fill", &p.cheek.to_css());
        }

        match pose.mouth {
            Mouth::Relaxed => {
                set(&self.smile, "display", "inline");
                set(&self.smile, "stroke", &p.mouth.to_css());
                set(&self.mouth_o, "display", "none");
            }
            Mouth::ExcitedO { radius } | Mouth::AlarmedO { radius } => {
                set(&self.smile, "display", "none");
                set(&self.mouth_o, "display", "inline");
                set(&self.mouth_o, "r", &radius.to_string());
                set(&self.mouth_o, "fill", &p.mouth.to_css());
            }
        }
    }

    /// Remove the SVG from the page.
    pub fn clear(&self) {
        self.container.set_inner_html("");
    }
}
