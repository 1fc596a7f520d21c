//! Easing functions
//!
//! The standard preset curves, applied to a normalized progress value in
//! the 0.0 to 1.0 range. Every preset maps 0.0 to 0.0 and 1.0 to 1.0;
//! Back and Elastic overshoot in between.

use std::f32::consts::PI;

/// Easing function presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-rate interpolation
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    /// Pulls back before accelerating forward
    BackIn,
    /// Overshoots the target before settling
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Apply the curve to a progress value
    ///
    /// `t` is clamped to the 0.0 to 1.0 domain before evaluation.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => in_out(t, |t| t * t, |t| t * (2.0 - t)),

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::CubicInOut => in_out(t, Easing::CubicIn.f(), Easing::CubicOut.f()),

            Easing::QuartIn => t * t * t * t,
            Easing::QuartOut => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Easing::QuartInOut => in_out(t, Easing::QuartIn.f(), Easing::QuartOut.f()),

            Easing::QuintIn => t * t * t * t * t,
            Easing::QuintOut => {
                let u = t - 1.0;
                u * u * u * u * u + 1.0
            }
            Easing::QuintInOut => in_out(t, Easing::QuintIn.f(), Easing::QuintOut.f()),

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => 0.5 * (1.0 - (t * PI).cos()),

            Easing::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Easing::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::ExpoInOut => in_out(t, Easing::ExpoIn.f(), Easing::ExpoOut.f()),

            Easing::CircIn => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Easing::CircOut => {
                let u = t - 1.0;
                (1.0 - u * u).max(0.0).sqrt()
            }
            Easing::CircInOut => in_out(t, Easing::CircIn.f(), Easing::CircOut.f()),

            Easing::BackIn => {
                const S: f32 = 1.70158;
                t * t * ((S + 1.0) * t - S)
            }
            Easing::BackOut => {
                const S: f32 = 1.70158;
                let u = t - 1.0;
                u * u * ((S + 1.0) * u + S) + 1.0
            }
            Easing::BackInOut => in_out(t, Easing::BackIn.f(), Easing::BackOut.f()),

            Easing::ElasticIn => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let u = t - 1.0;
                    -(2.0_f32.powf(10.0 * u)) * ((u - 0.075) * (2.0 * PI) / 0.3).sin()
                }
            }
            Easing::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t - 0.075) * (2.0 * PI) / 0.3).sin() + 1.0
                }
            }
            Easing::ElasticInOut => in_out(t, Easing::ElasticIn.f(), Easing::ElasticOut.f()),

            Easing::BounceIn => 1.0 - bounce_out(1.0 - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => in_out(t, Easing::BounceIn.f(), Easing::BounceOut.f()),
        }
    }

    fn f(self) -> impl Fn(f32) -> f32 {
        move |t| self.apply(t)
    }
}

/// Compose an in-half and an out-half into an in-out curve
fn in_out(t: f32, ease_in: impl Fn(f32) -> f32, ease_out: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        ease_out(t * 2.0 - 1.0) / 2.0 + 0.5
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984375
    }
}
