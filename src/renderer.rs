// Renderer struct that handles 2D canvas calls for the particle network.
// Drawing goes through the `DrawingContext` trait so the network can be rendered
// into a real canvas or into a recorder in tests.

use crate::config::NetworkConfig;
use crate::network;
use crate::particle::Particle;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

// Immediate-mode subset of the canvas 2D API used by the network
pub trait DrawingContext {
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&self);
    fn arc(&self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64)
        -> Result<(), JsValue>;
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn fill(&self);
    fn stroke(&self);
    fn set_fill_style(&self, style: &str);
    fn set_stroke_style(&self, style: &str);
    fn set_line_width(&self, width: f64);
}

impl DrawingContext for CanvasRenderingContext2d {
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle)
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    #[allow(deprecated)]
    fn set_fill_style(&self, style: &str) {
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(style));
    }

    #[allow(deprecated)]
    fn set_stroke_style(&self, style: &str) {
        CanvasRenderingContext2d::set_stroke_style(self, &JsValue::from_str(style));
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }
}

pub struct Renderer<C> {
    pub context: C,
    particle_fill: String,
}

impl<C: DrawingContext> Renderer<C> {
    pub fn new(context: C, config: &NetworkConfig) -> Self {
        Renderer {
            context,
            particle_fill: config.particle_fill(),
        }
    }

    // Picks up color changes made to the config after construction
    pub fn configure(&mut self, config: &NetworkConfig) {
        self.particle_fill = config.particle_fill();
    }

    pub fn clear_screen(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    pub fn render_particle(&self, particle: &Particle) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(particle.pos[0], particle.pos[1], particle.radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style(&self.particle_fill);
        self.context.fill();
        Ok(())
    }

    // Draws a line for every pair closer than the connection distance, returns how many
    pub fn render_connections(&self, particles: &[Particle], config: &NetworkConfig) -> usize {
        let mut drawn = 0;
        for connection in network::connections(particles, config) {
            self.context.begin_path();
            self.context.move_to(connection.from[0], connection.from[1]);
            self.context.line_to(connection.to[0], connection.to[1]);
            self.context
                .set_stroke_style(&config.color.to_css_with_alpha(connection.alpha));
            self.context.set_line_width(config.connection_line_width);
            self.context.stroke();
            drawn += 1;
        }
        drawn
    }
}
