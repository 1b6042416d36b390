use crate::core::particles::{trail_fill_css, Particle, ParticleField};
use crate::dom;
use crate::frame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Hero {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    rng: StdRng,
    trail_fill: String,
    // cached per-particle CSS colors, rebuilt on resize
    colors: Vec<String>,
}

impl Hero {
    fn resize(&mut self) {
        let (w, h) = dom::viewport_size();
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.field.resize(&mut self.rng, w as f32, h as f32);
        self.colors = self.field.particles().iter().map(|p| p.color.css()).collect();
    }

    fn frame(&mut self) {
        let (w, h) = self.field.size();
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&self.trail_fill);
        _ = ctx.set_global_composite_operation("source-over");
        ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        self.field.step();
        // Overlapping blobs brighten each other instead of occluding.
        _ = ctx.set_global_composite_operation("screen");
        for (p, color) in self.field.particles().iter().zip(&self.colors) {
            if let Err(e) = draw_particle(ctx, p, color) {
                log::debug!("[hero] draw failed: {:?}", e);
            }
        }
    }
}

fn draw_particle(
    ctx: &web::CanvasRenderingContext2d,
    p: &Particle,
    color: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    let (x, y, r) = (p.x as f64, p.y as f64, p.radius as f64);
    ctx.begin_path();
    let g = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
    g.add_color_stop(0.0, color)?;
    g.add_color_stop(1.0, "rgba(0,0,0,0)")?;
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.arc(x, y, r, 0.0, std::f64::consts::TAU)?;
    ctx.fill();
    Ok(())
}

/// Start the atmospheric particle field on `#hero-canvas`, if the page has one.
pub fn start(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id("hero-canvas") else {
        log::debug!("[hero] no #hero-canvas; skipping");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let hero = Rc::new(RefCell::new(Hero {
        canvas,
        ctx,
        field: ParticleField::new(),
        rng: StdRng::from_entropy(),
        trail_fill: trail_fill_css(),
        colors: Vec::new(),
    }));

    let hero_resize = hero.clone();
    dom::listen_window("resize", move |_: web::Event| {
        hero_resize.borrow_mut().resize();
    });
    hero.borrow_mut().resize();
    log::info!(
        "[hero] particle field started ({} particles)",
        hero.borrow().field.particles().len()
    );

    frame::start_loop(move |_ts| hero.borrow_mut().frame());
    Ok(())
}
