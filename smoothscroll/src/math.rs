//! Small numeric helpers shared by the tween and the engine.

/// Clamps `input` into `[min, max]`. When `min > max`, `min` wins.
pub fn clamp(min: f64, input: f64, max: f64) -> f64 {
    input.min(max).max(min)
}

pub fn lerp(x: f64, y: f64, t: f64) -> f64 {
    (1.0 - t) * x + t * y
}

/// Frame-rate independent exponential approach of `current` towards `target`.
///
/// `rate` is in 1/s; `dt` in seconds.
pub fn ease(current: f64, target: f64, rate: f64, dt: f64) -> f64 {
    lerp(current, target, 1.0 - (-rate * dt).exp())
}

/// Floored modulo: the result always has the sign of `d` (non-negative for `d > 0`).
pub fn safe_index(n: f64, d: f64) -> f64 {
    ((n % d) + d) % d
}

/// Shortest signed distance from `from` to `to` on a circle of circumference `period`.
///
/// The result lies in `(-period / 2, period / 2]`.
pub fn wrapped_distance(from: f64, to: f64, period: f64) -> f64 {
    let forward = safe_index(to - from, period);
    if forward > period / 2.0 {
        forward - period
    } else {
        forward
    }
}
