// simulation/collision.rs
// Pairwise elastic collision detection and resolution

use ultraviolet::Vec2;

use crate::body::Particle;

/// Equal-mass normal-impulse exchange for a pair separated by `d`
/// (pointing from b toward a) with relative velocity `rel_vel`
/// (`vel_a - vel_b`).
///
/// Returns the impulse to subtract from a's velocity and add to b's, or
/// `None` when the centers are exactly coincident or the pair is already
/// separating (`vn > 0`); resolving a separating pair again would stick
/// the particles together.
pub fn elastic_impulse(d: Vec2, rel_vel: Vec2) -> Option<Vec2> {
    let dist_sq = d.mag_sq();
    if dist_sq == 0.0 {
        return None;
    }
    let normal = d / dist_sq.sqrt();
    let vn = rel_vel.dot(normal);
    if vn > 0.0 {
        return None;
    }
    Some(normal * vn)
}

/// Resolve every colliding solvent pair, ascending i then ascending j > i.
/// Contact is declared when center distance < 2 * radius. Resolution is
/// frame-sequential: a particle may be resolved against several partners in
/// one sweep, and the sweep order is part of the reproducible behavior
/// under a fixed seed. No positional de-overlap is applied.
pub fn collide_pairs(particles: &mut [Particle], radius: f32) {
    let contact = 2.0 * radius;
    let contact_sq = contact * contact;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let d = particles[i].pos - particles[j].pos;
            if d.mag_sq() >= contact_sq {
                continue;
            }
            if let Some(impulse) = elastic_impulse(d, particles[i].vel - particles[j].vel) {
                particles[i].vel -= impulse;
                particles[j].vel += impulse;
            }
        }
    }
}
