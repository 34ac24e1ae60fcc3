// Binds the particle network to the hero section: canvas sizing, pointer
// tracking, visibility observation and the animation loop.

use crate::animation::AnimationLoop;
use crate::config::NetworkConfig;
use crate::dom_helpers::{self, ObserverOptions, Rect};
use crate::network::ParticleNetwork;
use crate::renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, Window,
};

pub const CANVAS_ID: &str = "heroCanvas";
pub const CONTAINER_ID: &str = "hero";

pub struct Hero {
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    network: ParticleNetwork,
    renderer: Renderer<CanvasRenderingContext2d>,
}

impl Hero {
    pub fn new(
        document: &Document,
        canvas_id: &str,
        container_id: &str,
        config: NetworkConfig,
    ) -> Result<Hero, JsValue> {
        let canvas: HtmlCanvasElement = dom_helpers::element_by_id(document, canvas_id)?;
        let container: HtmlElement = dom_helpers::element_by_id(document, container_id)?;
        let context = canvas
            .get_context("2d")?
            .ok_or("2d canvas context not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = measure(&container);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let renderer = Renderer::new(context, &config);
        let network = ParticleNetwork::new(config, width, height, &mut rand::thread_rng());
        log::info!("hero network ready ({}x{})", width, height);

        Ok(Hero {
            canvas,
            container,
            network,
            renderer,
        })
    }

    pub fn network(&self) -> &ParticleNetwork {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut ParticleNetwork {
        &mut self.network
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    // Re-reads the container size; particles keep their relative placement
    pub fn fit_to_container(&mut self) {
        let (width, height) = measure(&self.container);
        self.resize(width, height);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.network.resize(width, height);
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let [x, y] = Rect::of(&self.container).local(client_x, client_y);
        self.network.set_pointer(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.network.clear_pointer();
    }

    // Picks up color changes made through `network_mut().config_mut()`
    pub fn refresh_style(&mut self) {
        self.renderer.configure(self.network.config());
    }

    pub fn frame(&mut self) -> Result<bool, JsValue> {
        self.network.frame(&self.renderer)
    }
}

fn measure(container: &HtmlElement) -> (f64, f64) {
    (container.offset_width() as f64, container.offset_height() as f64)
}

// Wires resize, pointer and visibility feeds into `hero` and starts its frame loop
pub fn install(window: &Window, hero: Rc<RefCell<Hero>>) -> Result<AnimationLoop, JsValue> {
    {
        let hero = hero.clone();
        dom_helpers::add_listener(window, "resize", move |_| {
            hero.borrow_mut().fit_to_container();
        })?;
    }

    let container = hero.borrow().container().clone();
    {
        let hero = hero.clone();
        dom_helpers::add_listener(&container, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                hero.borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }
        })?;
    }
    {
        let hero = hero.clone();
        dom_helpers::add_listener(&container, "mouseleave", move |_| {
            hero.borrow_mut().pointer_left();
        })?;
    }

    {
        let hero = hero.clone();
        let options = ObserverOptions {
            root_margin: "0px",
            threshold: 0.0,
        };
        let observer = dom_helpers::intersection_observer(&options, move |entries, _| {
            if let Some(entry) = entries.first() {
                hero.borrow_mut()
                    .network_mut()
                    .set_visible(entry.is_intersecting());
            }
        })?;
        observer.observe(&container);
    }

    AnimationLoop::start(window, move || {
        if let Err(err) = hero.borrow_mut().frame() {
            log::error!("hero frame failed: {:?}", err);
        }
    })
}
