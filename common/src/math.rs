use bevy::prelude::*;
use rand::{thread_rng, Rng};

pub fn truncate_vec2(vec2: Vec2, max: f32) -> Vec2 {
    if vec2.length() > max {
        let vec2 = vec2.normalize_or_zero();
        return vec2 * max;
    }

    vec2
}

pub fn rng_f32(min: f32, max: f32) -> f32 {
    thread_rng().gen_range(min..max)
}
