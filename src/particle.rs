// Simple particle struct to keep track of individual position, velocity, and radius

use crate::config::NetworkConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &NetworkConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.initial_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.initial_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    // Advance one step inside a `width` x `height` surface, pushed away from `pointer`
    pub fn update(
        &mut self,
        width: f64,
        height: f64,
        pointer: Option<Vector2<f64>>,
        config: &NetworkConfig,
    ) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        // Reflect without clamping, the overshoot is undone by the next step
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }

        if let Some(pointer) = pointer {
            let away = vecmath::vec2_sub(self.pos, pointer);
            let force = config.repulsion_force(vecmath::vec2_len(away));
            if force > 0.0 {
                self.vel = vecmath::vec2_add(self.vel, vecmath::vec2_scale(away, force));
            }
        }

        if self.speed() > config.max_speed {
            self.vel = vecmath::vec2_scale(self.vel, config.damping);
        }
    }

    pub fn rescale(&mut self, scale_x: f64, scale_y: f64) {
        self.pos[0] *= scale_x;
        self.pos[1] *= scale_y;
    }
}
