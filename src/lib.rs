extern crate nalgebra_glm as glm;

mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod dom_helpers;
pub mod hero;
pub mod network;
pub mod particle;
pub mod renderer;
pub mod ui;

use animation::AnimationLoop;
use config::NetworkConfig;
use hero::Hero;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::console;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logger();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Hero network driven from JavaScript: the page owns the frame loop and
// forwards pointer, resize and visibility events.
#[wasm_bindgen]
pub struct HeroNetwork {
    hero: Hero,
    timed: bool,
}

#[wasm_bindgen]
impl HeroNetwork {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, container_id: &str) -> Result<HeroNetwork, JsValue> {
        let document = dom_helpers::document(&dom_helpers::window()?)?;
        let hero = Hero::new(&document, canvas_id, container_id, NetworkConfig::default())?;
        Ok(HeroNetwork { hero, timed: false })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.hero.resize(width, height);
    }

    pub fn fit_to_container(&mut self) {
        self.hero.fit_to_container();
    }

    // Pointer position relative to the surface
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.hero.network_mut().set_pointer(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.hero.pointer_left();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.hero.network_mut().set_visible(visible);
    }

    // Wraps every `tick` in a console timer while profiling
    pub fn set_timing(&mut self, enabled: bool) {
        self.timed = enabled;
    }

    // Renders one frame, returns false when the surface is hidden
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        let _timer = if self.timed {
            Some(Timer::new("HeroNetwork::tick"))
        } else {
            None
        };
        self.hero.frame()
    }

    pub fn particle_count(&self) -> usize {
        self.hero.network().particles().len()
    }

    pub fn set_connection_distance(&mut self, distance: f64) {
        self.hero.network_mut().config_mut().connection_distance = distance.max(0.0);
    }

    pub fn set_mouse_distance(&mut self, distance: f64) {
        self.hero.network_mut().config_mut().mouse_distance = distance.max(0.0);
    }

    // Takes effect immediately by reseeding the population
    pub fn set_particle_count(&mut self, count: usize) {
        let network = self.hero.network_mut();
        network.config_mut().particle_count = count;
        network.reinitialize(&mut rand::thread_rng());
    }

    // RRGGBBAA, the alpha byte is ignored in favor of the configured opacities
    pub fn set_color(&mut self, rgba: u32) {
        self.hero.network_mut().config_mut().color = color::Color::from_u32(rgba);
        self.hero.refresh_style();
    }
}

// Everything `start_site` installed. Dropping it leaves the page running;
// call `stop` to halt the animation loops.
#[wasm_bindgen]
pub struct SiteHandle {
    hero_loop: AnimationLoop,
    cursor_loop: Option<AnimationLoop>,
}

#[wasm_bindgen]
impl SiteHandle {
    pub fn stop(&self) {
        self.hero_loop.stop();
        if let Some(cursor_loop) = &self.cursor_loop {
            cursor_loop.stop();
        }
        log::info!("site animations stopped");
    }

    pub fn is_running(&self) -> bool {
        self.hero_loop.is_running()
    }
}

// Page behaviors are optional; a failing one is logged and the rest still install
fn install_behavior<T>(name: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(installed) => Some(installed),
        Err(err) => {
            log::warn!("{} not installed: {:?}", name, err);
            None
        }
    }
}

// Installs the hero network and every page behavior against the standard markup.
// Only a hero that cannot come up is an error.
#[wasm_bindgen]
pub fn start_site(first_name: &str, last_name: &str) -> Result<SiteHandle, JsValue> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;

    let hero = Hero::new(
        &document,
        hero::CANVAS_ID,
        hero::CONTAINER_ID,
        NetworkConfig::default(),
    )?;
    let hero_loop = hero::install(&window, Rc::new(RefCell::new(hero)))?;

    install_behavior(
        "kinetic text",
        ui::kinetic_text::install(&document, first_name, last_name),
    );
    let cursor_loop =
        install_behavior("custom cursor", ui::cursor::install(&window, &document)).flatten();
    install_behavior("magnetic hover", ui::magnetic::install(&document));
    install_behavior("header scroll", ui::nav::install_header(&window, &document));
    install_behavior("active nav", ui::nav::install_active_nav(&document));
    install_behavior(
        "smooth scroll",
        ui::nav::install_smooth_scroll(&window, &document),
    );
    install_behavior("scroll reveal", ui::reveal::install(&document));
    install_behavior("mobile menu", ui::mobile_menu::install(&document));
    install_behavior("theme toggle", ui::theme::install(&window, &document));

    log::info!("site behaviors installed");
    Ok(SiteHandle {
        hero_loop,
        cursor_loop,
    })
}
