use crate::core::scene::{Camera, PointerState, WireframeScene};
use crate::core::MAX_PIXEL_RATIO;
use crate::dom;
use crate::frame;
use crate::render::GpuState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const CONTAINER_ID: &str = "signal-canvas-container";

struct SignalScene {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    scene: WireframeScene,
    camera: Camera,
    gpu: Option<GpuState>,
}

impl SignalScene {
    fn container_size(&self) -> (f64, f64) {
        (
            self.container.client_width() as f64,
            self.container.client_height() as f64,
        )
    }

    /// Match camera aspect and drawing-buffer size to the container.
    fn resize(&mut self) {
        let (w, h) = self.container_size();
        self.camera.set_viewport(w as f32, h as f32);
        let (pw, ph) = size_canvas(&self.canvas, w, h);
        if let Some(g) = &mut self.gpu {
            g.resize(pw, ph);
        }
    }

    fn frame(&mut self, t_sec: f32, pointer: PointerState) {
        self.scene.update(t_sec, pointer);
        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&self.scene, &self.camera) {
                log::error!("[signal] render error: {:?}", e);
            }
        }
    }
}

// CSS size = container size; backing store scaled by the capped pixel ratio.
fn size_canvas(canvas: &web::HtmlCanvasElement, w: f64, h: f64) -> (u32, u32) {
    let ratio = dom::device_pixel_ratio().min(MAX_PIXEL_RATIO);
    let pw = ((w * ratio) as u32).max(1);
    let ph = ((h * ratio) as u32).max(1);
    canvas.set_width(pw);
    canvas.set_height(ph);
    let (css_w, css_h) = (format!("{}px", w), format!("{}px", h));
    dom::set_styles(
        canvas.as_ref(),
        &[("width", css_w.as_str()), ("height", css_h.as_str())],
    );
    (pw, ph)
}

/// Build the wireframe scene inside `#signal-canvas-container`.
///
/// Does nothing when the container is missing. The GPU comes up
/// asynchronously; until it does (or if WebGPU is unavailable) frames only
/// advance the scene model.
pub fn start(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(CONTAINER_ID) else {
        log::debug!("[signal] no #{}; skipping", CONTAINER_ID);
        return Ok(());
    };
    let container: web::HtmlElement = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container.append_child(&canvas).map_err(dom::js_err)?;

    let mut rng = StdRng::from_entropy();
    let scene = WireframeScene::new(&mut rng);
    let (w, h) = (
        container.client_width() as f64,
        container.client_height() as f64,
    );
    let camera = Camera::scene_default(w as f32, h as f32);
    size_canvas(&canvas, w, h);

    let state = Rc::new(RefCell::new(SignalScene {
        container,
        canvas: canvas.clone(),
        scene,
        camera,
        gpu: None,
    }));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let state_resize = state.clone();
    dom::listen_window("resize", move |_: web::Event| {
        state_resize.borrow_mut().resize();
    });

    let pointer_move = pointer.clone();
    dom::listen(document.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        let (vw, vh) = dom::viewport_size();
        *pointer_move.borrow_mut() = PointerState::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        );
    });

    let state_gpu = state.clone();
    spawn_local(async move {
        let shells = state_gpu.borrow().scene.shells.clone();
        match GpuState::new(&canvas, &shells).await {
            Ok(g) => {
                let mut s = state_gpu.borrow_mut();
                s.gpu = Some(g);
                // The container may have changed size while the adapter was pending.
                s.resize();
            }
            Err(e) => log::error!("[signal] WebGPU init error: {:?}", e),
        }
    });

    log::info!("[signal] wireframe scene started ({}x{})", w, h);
    frame::start_loop(move |ts_ms| {
        let p = *pointer.borrow();
        state.borrow_mut().frame((ts_ms * 0.001) as f32, p);
    });
    Ok(())
}
