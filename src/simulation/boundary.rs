// simulation/boundary.rs
// Wall reflection for the rectangular simulation domain

use ultraviolet::Vec2;

/// Reflect a particle off the domain walls: per axis, clamp the position so
/// the particle's edge sits on the wall and invert that axis's velocity
/// component. Both axes may reflect in the same call.
pub fn reflect_at_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, width: f32, height: f32) {
    if pos.x - radius <= 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
    } else if pos.x + radius >= width {
        pos.x = width - radius;
        vel.x = -vel.x;
    }

    if pos.y - radius <= 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
    } else if pos.y + radius >= height {
        pos.y = height - radius;
        vel.y = -vel.y;
    }
}
