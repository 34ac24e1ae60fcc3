// Tunables for the hero particle network. Defaults reproduce the site's look.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub particle_count: usize,
    // Pairs closer than this get a connecting line.
    pub connection_distance: f64,
    // Stroke alpha of a connection at zero distance.
    pub connection_opacity: f64,
    pub connection_line_width: f64,
    // Pointer repulsion radius.
    pub mouse_distance: f64,
    pub repulsion_strength: f64,
    // Speed above which damping kicks in.
    pub max_speed: f64,
    pub damping: f64,
    // Width of the range each initial velocity component is drawn from, centered on 0.
    pub initial_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub color: Color,
    pub particle_alpha: f64,
}

impl NetworkConfig {
    pub const PARTICLE_COUNT: usize = 90;
    pub const CONNECTION_DIST: f64 = 160.0;
    pub const MOUSE_DIST: f64 = 200.0;

    pub fn particle_fill(&self) -> String {
        self.color.to_css_with_alpha(self.particle_alpha)
    }

    // Stroke alpha for a pair `distance` apart, None when they are too far to connect
    pub fn connection_alpha(&self, distance: f64) -> Option<f64> {
        if distance < self.connection_distance {
            Some((1.0 - distance / self.connection_distance) * self.connection_opacity)
        } else {
            None
        }
    }

    // Scalar repulsion factor applied to the pointer-to-particle vector
    pub fn repulsion_force(&self, distance: f64) -> f64 {
        if distance < self.mouse_distance {
            (self.mouse_distance - distance) / self.mouse_distance * self.repulsion_strength
        } else {
            0.0
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            particle_count: NetworkConfig::PARTICLE_COUNT,
            connection_distance: NetworkConfig::CONNECTION_DIST,
            connection_opacity: 0.15,
            connection_line_width: 0.5,
            mouse_distance: NetworkConfig::MOUSE_DIST,
            repulsion_strength: 0.008,
            max_speed: 1.5,
            damping: 0.98,
            initial_speed: 0.5,
            min_radius: 0.5,
            max_radius: 2.0,
            color: Color::AMBER,
            particle_alpha: 0.6,
        }
    }
}
