use crate::canvas::CanvasSurface;
use crate::companion::{Companion, CompanionConfig};
use crate::companion_view::CompanionView;
use crate::constants::COMPANION_MIN_VIEWPORT_WIDTH;
use crate::dom;
use crate::events;
use crate::field::{FieldConfig, ParticleField};
use crate::frame::FrameLoop;
use crate::input::is_interactive;
use crate::theme::Theme;
use gloo::events::EventListener;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

// ---------------- Cursor companion ----------------

struct CompanionEffect {
    companion: Rc<RefCell<Companion>>,
    view: Rc<CompanionView>,
    pointer: Option<EventListener>,
    frames: Option<FrameLoop>,
}

impl CompanionEffect {
    fn mount(
        window: &web::Window,
        document: &web::Document,
        container_id: &str,
        theme: Rc<Cell<Theme>>,
    ) -> anyhow::Result<Self> {
        let view = Rc::new(CompanionView::build(document, container_id)?);
        let companion = Rc::new(RefCell::new(Companion::new(
            CompanionConfig::default(),
            StdRng::from_entropy(),
            instant::now(),
        )));

        let pointer = {
            let companion = companion.clone();
            events::on_pointer_move(window, move |sample, target| {
                let hovering = is_interactive(target);
                companion
                    .borrow_mut()
                    .pointer_move(sample, hovering, instant::now());
            })
        };

        let frames = {
            let companion = companion.clone();
            let view = view.clone();
            let window = window.clone();
            FrameLoop::start(move |_| {
                let now = instant::now();
                let mut c = companion.borrow_mut();
                c.frame(now);
                let visible = dom::viewport(&window).width >= COMPANION_MIN_VIEWPORT_WIDTH;
                view.apply(&c.pose(theme.get(), now), visible);
            })
        };

        log::info!("[companion] mounted in #{}", container_id);
        Ok(Self {
            companion,
            view,
            pointer: Some(pointer),
            frames: Some(frames),
        })
    }

    fn unmount(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.pointer.take();
        self.companion.borrow_mut().teardown();
        self.view.clear();
    }
}

// ---------------- Ambient particle field ----------------

struct FieldRuntime {
    field: ParticleField,
    surface: CanvasSurface,
    rng: StdRng,
}

struct FieldEffect {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    runtime: Rc<RefCell<FieldRuntime>>,
    listeners: Vec<EventListener>,
    frames: Option<FrameLoop>,
}

impl FieldEffect {
    fn mount(
        window: &web::Window,
        document: &web::Document,
        canvas_id: &str,
        theme: Theme,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, canvas_id)?;
        let viewport = dom::viewport(window);
        dom::sync_canvas_backing_size(&canvas, viewport);
        let surface = CanvasSurface::new(dom::context_2d(&canvas)?);

        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(FieldConfig::default(), theme, viewport, &mut rng);
        log::info!(
            "[field] mounted on #{} {}x{} blobs={} particles={}",
            canvas_id,
            viewport.width,
            viewport.height,
            field.blobs.len(),
            field.particles.len()
        );

        let mut effect = Self {
            window: window.clone(),
            canvas,
            runtime: Rc::new(RefCell::new(FieldRuntime {
                field,
                surface,
                rng,
            })),
            listeners: Vec::new(),
            frames: None,
        };
        effect.start();
        Ok(effect)
    }

    fn start(&mut self) {
        let pointer = {
            let runtime = self.runtime.clone();
            events::on_pointer_move(&self.window, move |sample, _| {
                runtime.borrow_mut().field.set_pointer(sample);
            })
        };
        let resize = {
            let runtime = self.runtime.clone();
            let window = self.window.clone();
            let canvas = self.canvas.clone();
            events::on_resize(&self.window, move || {
                let viewport = dom::viewport(&window);
                dom::sync_canvas_backing_size(&canvas, viewport);
                runtime.borrow_mut().field.resize(viewport);
            })
        };
        self.listeners = vec![pointer, resize];

        let runtime = self.runtime.clone();
        self.frames = Some(FrameLoop::start(move |_| {
            let rt = &mut *runtime.borrow_mut();
            rt.field.frame(&mut rt.surface);
        }));
    }

    fn stop(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.listeners.clear();
    }

    /// Tear the effect down and bring it back with fresh entities in the new
    /// palette. Counts survive the rebuild.
    fn rebuild(&mut self, theme: Theme) {
        self.stop();
        {
            let rt = &mut *self.runtime.borrow_mut();
            let pointer = rt.field.pointer();
            rt.field = rt.field.reinitialize(theme, &mut rt.rng);
            rt.field.set_pointer(pointer.into());
        }
        log::info!("[field] rebuilt for {:?} theme", theme);
        self.start();
    }

    fn unmount(&mut self) {
        self.stop();
        let rt = &mut *self.runtime.borrow_mut();
        let viewport = rt.field.viewport();
        crate::field::Surface::clear(&mut rt.surface, viewport);
    }
}

// ---------------- Page-facing handle ----------------

/// Both animators mounted over the page. Created from JS with the canvas and
/// companion container ids and the current theme flag.
#[wasm_bindgen]
pub struct PortfolioFx {
    theme: Rc<Cell<Theme>>,
    companion: Option<CompanionEffect>,
    field: Option<FieldEffect>,
}

#[wasm_bindgen]
impl PortfolioFx {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, companion_id: &str, dark: bool) -> Result<PortfolioFx, JsValue> {
        mount(canvas_id, companion_id, dark).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    /// Switch palettes. The companion picks it up on its next frame; the
    /// particle field is rebuilt.
    pub fn set_dark_mode(&mut self, dark: bool) {
        let theme = Theme::from_dark_flag(dark);
        if self.theme.get() == theme {
            return;
        }
        self.theme.set(theme);
        if let Some(field) = &mut self.field {
            field.rebuild(theme);
        }
    }

    /// Stop every frame loop, timer and listener. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        let had_any = self.companion.is_some() || self.field.is_some();
        if let Some(mut companion) = self.companion.take() {
            companion.unmount();
        }
        if let Some(mut field) = self.field.take() {
            field.unmount();
        }
        if had_any {
            log::info!("[fx] unmounted");
        }
    }
}

impl Drop for PortfolioFx {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount(canvas_id: &str, companion_id: &str, dark: bool) -> anyhow::Result<PortfolioFx> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let theme = Rc::new(Cell::new(Theme::from_dark_flag(dark)));

    let field = match FieldEffect::mount(&window, &document, canvas_id, theme.get()) {
        Ok(f) => Some(f),
        Err(e) => {
            log::error!("[field] mount error: {:?}", e);
            None
        }
    };
    let companion = match CompanionEffect::mount(&window, &document, companion_id, theme.clone()) {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("[companion] mount error: {:?}", e);
            None
        }
    };
    if field.is_none() && companion.is_none() {
        anyhow::bail!("nothing to mount: #{} and #{} both failed", canvas_id, companion_id);
    }

    Ok(PortfolioFx {
        theme,
        companion,
        field,
    })
}
