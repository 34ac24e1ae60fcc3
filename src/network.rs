// The hero particle network: a fixed population of drifting points that
// connect to nearby neighbours and shy away from the pointer.
//
// `ParticleNetwork` owns every piece of mutable state the animation needs
// (particles, surface size, pointer, visibility) so that event callbacks and
// the frame callback share one explicit context.

use crate::config::NetworkConfig;
use crate::particle::Particle;
use crate::renderer::{DrawingContext, Renderer};
use rand::Rng;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

// A line to draw between two particles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

// Every unordered pair of `particles` closer than the connection distance.
pub fn connections<'a>(
    particles: &'a [Particle],
    config: &'a NetworkConfig,
) -> impl Iterator<Item = Connection> + 'a {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            let distance = glm::distance(
                &glm::vec2(a.pos[0], a.pos[1]),
                &glm::vec2(b.pos[0], b.pos[1]),
            );
            config.connection_alpha(distance).map(|alpha| Connection {
                from: a.pos,
                to: b.pos,
                alpha,
            })
        })
    })
}

pub struct ParticleNetwork {
    config: NetworkConfig,
    width: f64,
    height: f64,
    // Last size with both sides non-zero, positions are relative to it
    measured: Option<(f64, f64)>,
    particles: Vec<Particle>,
    pointer: Option<Vector2<f64>>,
    visible: bool,
}

impl ParticleNetwork {
    pub fn new<R: Rng + ?Sized>(
        config: NetworkConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let mut network = ParticleNetwork::with_particles(config, width, height, Vec::new());
        network.reinitialize(rng);
        network
    }

    pub fn with_particles(
        config: NetworkConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        let (width, height) = (sanitize_dimension(width), sanitize_dimension(height));
        ParticleNetwork {
            config,
            width,
            height,
            measured: measured_size(width, height),
            particles,
            pointer: None,
            visible: true,
        }
    }

    // Replaces the population with `config.particle_count` fresh particles.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = (self.width, self.height);
        let config = &self.config;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut *rng, width, height, config))
            .collect();
        log::debug!(
            "particle network seeded with {} particles on {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NetworkConfig {
        &mut self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // Updates the bounds and carries the particles along proportionally.
    // An unmeasured container (0 or NaN) is accepted as a zero-sized surface;
    // the next real size rescales from the last real size seen before it.
    pub fn resize(&mut self, new_width: f64, new_height: f64) {
        self.width = sanitize_dimension(new_width);
        self.height = sanitize_dimension(new_height);
        if let Some(new) = measured_size(self.width, self.height) {
            if let Some(old) = self.measured {
                self.rescale_on_resize(old, new);
            }
            self.measured = Some(new);
        }
    }

    // Rescales positions from `old` to `new` dimensions. Does nothing unless
    // all four dimensions are non-zero.
    pub fn rescale_on_resize(&mut self, old: (f64, f64), new: (f64, f64)) {
        let (old_width, old_height) = old;
        let (new_width, new_height) = new;
        if old_width <= 0.0 || old_height <= 0.0 || new_width <= 0.0 || new_height <= 0.0 {
            return;
        }
        let scale_x = new_width / old_width;
        let scale_y = new_height / old_height;
        for particle in &mut self.particles {
            particle.rescale(scale_x, scale_y);
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            log::debug!("particle network visibility changed to {}", visible);
        }
        self.visible = visible;
    }

    // Advances every particle by one step without drawing.
    pub fn step(&mut self) {
        let (width, height, pointer) = (self.width, self.height, self.pointer);
        for particle in &mut self.particles {
            particle.update(width, height, pointer, &self.config);
        }
    }

    // One animation frame. Returns `false` when skipped because the surface is hidden.
    pub fn frame<C: DrawingContext>(&mut self, renderer: &Renderer<C>) -> Result<bool, JsValue> {
        if !self.visible {
            return Ok(false);
        }

        renderer.clear_screen(self.width, self.height);
        let (width, height, pointer) = (self.width, self.height, self.pointer);
        for particle in &mut self.particles {
            particle.update(width, height, pointer, &self.config);
            renderer.render_particle(particle)?;
        }
        renderer.render_connections(&self.particles, &self.config);
        Ok(true)
    }
}

fn measured_size(width: f64, height: f64) -> Option<(f64, f64)> {
    if width > 0.0 && height > 0.0 {
        Some((width, height))
    } else {
        None
    }
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCall, RecordingContext};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 1.0)
    }

    fn seeded_network(width: f64, height: f64) -> ParticleNetwork {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleNetwork::new(NetworkConfig::default(), width, height, &mut rng)
    }

    #[test]
    fn seeds_fixed_population() {
        let network = seeded_network(1280.0, 720.0);
        assert_eq!(network.particles().len(), 90);
        assert!(network.is_visible());
        assert_eq!(network.pointer(), None);
    }

    #[test]
    fn close_pair_connects_on_small_surface() {
        let config = NetworkConfig::default();
        let particles = vec![still(0.0, 0.0), still(10.0, 10.0)];
        let network = ParticleNetwork::with_particles(config, 100.0, 100.0, particles);

        let found: Vec<_> = connections(network.particles(), network.config()).collect();
        assert_eq!(found.len(), 1);
        let expected = (1.0 - 200f64.sqrt() / 160.0) * 0.15;
        assert!((found[0].alpha - expected).abs() < 1e-12);
    }

    #[test]
    fn spread_pair_still_connects_on_large_surface() {
        let config = NetworkConfig::default();
        let particles = vec![still(0.0, 0.0), still(100.0, 100.0)];
        let network = ParticleNetwork::with_particles(config, 1000.0, 1000.0, particles);

        assert_eq!(connections(network.particles(), network.config()).count(), 1);
    }

    #[test]
    fn connection_iff_closer_than_threshold() {
        let config = NetworkConfig::default();
        let particles = vec![
            still(0.0, 0.0),
            still(159.0, 0.0),
            still(0.0, 160.0),
            still(400.0, 400.0),
        ];

        let found: Vec<_> = connections(&particles, &config).collect();
        // only (0,1) qualifies, (0,2) sits exactly on the threshold
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].from, [0.0, 0.0]);
        assert_eq!(found[0].to, [159.0, 0.0]);
    }

    #[test]
    fn counts_every_unordered_pair_once() {
        let config = NetworkConfig::default();
        let particles: Vec<_> = (0..5).map(|i| still(i as f64, 0.0)).collect();
        assert_eq!(connections(&particles, &config).count(), 10);
    }

    #[test]
    fn resize_preserves_relative_positions() {
        let mut network = seeded_network(800.0, 600.0);
        let before: Vec<_> = network
            .particles()
            .iter()
            .map(|p| (p.pos[0] / 800.0, p.pos[1] / 600.0))
            .collect();

        network.resize(1920.0, 1080.0);

        assert_eq!(network.dimensions(), (1920.0, 1080.0));
        for (p, (rx, ry)) in network.particles().iter().zip(before) {
            assert!((p.pos[0] / 1920.0 - rx).abs() < 1e-12);
            assert!((p.pos[1] / 1080.0 - ry).abs() < 1e-12);
        }
    }

    #[test]
    fn resize_from_unmeasured_surface_keeps_positions() {
        let particles = vec![still(5.0, 5.0)];
        let mut network =
            ParticleNetwork::with_particles(NetworkConfig::default(), 0.0, 0.0, particles);
        network.resize(500.0, 500.0);
        assert_eq!(network.particles()[0].pos, [5.0, 5.0]);

        network.resize(f64::NAN, 300.0);
        assert_eq!(network.dimensions(), (0.0, 300.0));
        assert_eq!(network.particles()[0].pos, [5.0, 5.0]);
    }

    #[test]
    fn resize_through_zero_rescales_from_last_real_size() {
        let particles = vec![Particle::new(900.0, 500.0, 0.2, 0.0, 1.0)];
        let mut network =
            ParticleNetwork::with_particles(NetworkConfig::default(), 1000.0, 1000.0, particles);

        network.resize(0.0, 0.0);
        assert_eq!(network.particles()[0].pos, [900.0, 500.0]);
        network.resize(500.0, 500.0);
        assert_eq!(network.particles()[0].pos, [450.0, 250.0]);

        for _ in 0..10_000 {
            network.step();
            let p = &network.particles()[0];
            let slack = p.speed() + 1e-9;
            assert!(p.pos[0] >= -slack && p.pos[0] <= 500.0 + slack);
            assert!(p.pos[1] >= -slack && p.pos[1] <= 500.0 + slack);
        }
    }

    #[test]
    fn half_measured_resize_keeps_reference_size() {
        let particles = vec![still(800.0, 600.0)];
        let mut network =
            ParticleNetwork::with_particles(NetworkConfig::default(), 1000.0, 1000.0, particles);

        network.resize(0.0, 300.0);
        network.resize(2000.0, 500.0);
        assert_eq!(network.particles()[0].pos, [1600.0, 300.0]);
    }

    #[test]
    fn zero_sized_surface_stays_stable() {
        let mut network = seeded_network(0.0, 0.0);
        for _ in 0..1000 {
            network.step();
        }
        for p in network.particles() {
            assert!(p.pos[0].abs() <= 0.5 && p.pos[1].abs() <= 0.5);
        }
    }

    #[test]
    fn particles_never_escape_beyond_one_step() {
        let mut network = seeded_network(320.0, 240.0);
        for _ in 0..5000 {
            let before: Vec<f64> = network
                .particles()
                .iter()
                .map(|p| p.speed() + 1e-9)
                .collect();
            network.step();
            for (p, slack) in network.particles().iter().zip(before) {
                assert!(p.pos[0] >= -slack && p.pos[0] <= 320.0 + slack);
                assert!(p.pos[1] >= -slack && p.pos[1] <= 240.0 + slack);
            }
        }
    }

    #[test]
    fn distant_pointer_does_not_repel() {
        let mut network = ParticleNetwork::with_particles(
            NetworkConfig::default(),
            1000.0,
            1000.0,
            vec![Particle::new(300.0, 300.0, 0.0, 0.0, 1.0)],
        );
        network.set_pointer(0.0, 0.0);
        network.step();
        assert_eq!(network.particles()[0].vel, [0.0, 0.0]);

        network.set_pointer(250.0, 300.0);
        network.step();
        assert!(network.particles()[0].vel[0] > 0.0);

        network.clear_pointer();
        assert_eq!(network.pointer(), None);
    }

    #[test]
    fn frame_draws_particles_then_connections() {
        let config = NetworkConfig::default();
        let renderer = Renderer::new(RecordingContext::default(), &config);
        let mut network = ParticleNetwork::with_particles(
            config,
            100.0,
            100.0,
            vec![still(0.0, 0.0), still(10.0, 10.0)],
        );

        assert!(network.frame(&renderer).unwrap());

        let calls = renderer.context.calls.borrow();
        assert_eq!(calls[0], DrawCall::ClearRect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(renderer.context.count(|c| *c == DrawCall::Fill), 2);
        assert_eq!(renderer.context.count(|c| *c == DrawCall::Stroke), 1);
        assert_eq!(calls.last(), Some(&DrawCall::Stroke));
    }

    #[test]
    fn hidden_frame_does_no_work() {
        let config = NetworkConfig::default();
        let renderer = Renderer::new(RecordingContext::default(), &config);
        let mut network = ParticleNetwork::with_particles(
            config,
            100.0,
            100.0,
            vec![Particle::new(50.0, 50.0, 1.0, 0.0, 1.0)],
        );

        network.set_visible(false);
        assert!(!network.frame(&renderer).unwrap());
        assert!(renderer.context.calls.borrow().is_empty());
        assert_eq!(network.particles()[0].pos, [50.0, 50.0]);

        network.set_visible(true);
        renderer.context.clear();
        assert!(network.frame(&renderer).unwrap());
        assert_eq!(network.particles()[0].pos, [51.0, 50.0]);
    }

    #[test]
    fn reinitialize_uses_configured_count() {
        let mut network = seeded_network(400.0, 400.0);
        network.config_mut().particle_count = 12;
        network.reinitialize(&mut StdRng::seed_from_u64(1));
        assert_eq!(network.particles().len(), 12);
    }
}
