use crate::math::{clamp, ease};

/// Easing curves for duration-mode tweens. Input and output are in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseOutExpo,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutExpo => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }
}

/// How a tween moves towards its target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Exponential decay with no fixed end time. `rate` is in 1/s; a non-positive rate finishes
    /// on the first step.
    Decay { rate: f64 },
    /// Fixed-length interpolation. `duration` is in seconds.
    Timed { duration: f64, easing: Easing },
}

impl Motion {
    /// Decay motion from a per-frame lerp factor at 60fps.
    pub fn from_lerp(lerp: f64) -> Self {
        Self::Decay { rate: lerp * 60.0 }
    }
}

/// Result of one [`ScrollTween::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    pub value: f64,
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TweenRun {
    from: f64,
    to: f64,
    value: f64,
    elapsed: f64,
    motion: Motion,
}

/// A single replaceable scalar animation.
///
/// Starting a new run drops the previous one; nothing is queued.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTween {
    run: Option<TweenRun>,
}

impl ScrollTween {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Target of the active run.
    pub fn target(&self) -> Option<f64> {
        self.run.map(|r| r.to)
    }

    /// Current value of the active run.
    pub fn value(&self) -> Option<f64> {
        self.run.map(|r| r.value)
    }

    pub fn motion(&self) -> Option<Motion> {
        self.run.map(|r| r.motion)
    }

    pub fn from_to(&mut self, from: f64, to: f64, motion: Motion) {
        self.run = Some(TweenRun {
            from,
            to,
            value: from,
            elapsed: 0.0,
            motion,
        });
    }

    /// Moves the target of an active decay run without restarting it.
    ///
    /// Returns `false` (and changes nothing) when no decay run is active.
    pub fn retarget(&mut self, to: f64) -> bool {
        match self.run.as_mut() {
            Some(run) if matches!(run.motion, Motion::Decay { .. }) => {
                run.to = to;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.run = None;
    }

    /// Advances the active run by `dt` seconds. Returns `None` when inactive.
    ///
    /// The final step is snapped exactly to the target and deactivates the tween.
    pub fn advance(&mut self, dt: f64) -> Option<TweenStep> {
        let run = self.run.as_mut()?;

        let done = match run.motion {
            Motion::Decay { rate } if rate.is_nan() || rate <= 0.0 => true,
            Motion::Decay { rate } => {
                run.value = ease(run.value, run.to, rate, dt);
                (run.value - run.to).abs() < 0.01 || run.value.round() == run.to
            }
            Motion::Timed { duration, easing } => {
                run.elapsed += dt;
                let progress = if duration > 0.0 {
                    clamp(0.0, run.elapsed / duration, 1.0)
                } else {
                    1.0
                };
                let eased = if progress >= 1.0 {
                    1.0
                } else {
                    easing.sample(progress)
                };
                run.value = run.from + (run.to - run.from) * eased;
                progress >= 1.0
            }
        };

        if done {
            let to = run.to;
            self.run = None;
            return Some(TweenStep {
                value: to,
                done: true,
            });
        }
        Some(TweenStep {
            value: run.value,
            done: false,
        })
    }
}
