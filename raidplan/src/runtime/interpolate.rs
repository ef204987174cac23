use crate::{Easing, Frame};

/// Linear interpolation. `t` is not clamped; callers keep it in `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Easing {
    /// Maps linear progress `t ∈ [0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv / 2.0
                }
            }
        }
    }
}

/// Fraction of `length` frames elapsed at `frame`, starting at `start`, clamped to `[0, 1]`.
///
/// A zero-length span is complete as soon as it starts.
pub(crate) fn progress(frame: Frame, start: Frame, length: Frame) -> f32 {
    if frame < start {
        return 0.0;
    }
    if length == 0 {
        return 1.0;
    }
    let elapsed = frame - start;
    if elapsed >= length {
        return 1.0;
    }
    elapsed as f32 / length as f32
}

/// Fade-in / steady / fade-out envelope.
///
/// Returns `0.0` before `start` and from `end` onward (`end = None` never ends). The value ramps
/// `0 → peak` over `fade_in` frames from `start` and `peak → 0` over the `fade_out` frames that
/// end at `end`. Where the two ramps overlap their factors multiply. A zero-length fade is an
/// instantaneous step, so `fade_in == 0` gives `peak` at exactly `start`.
pub fn resolve_envelope(
    frame: Frame,
    start: Frame,
    fade_in: Frame,
    end: Option<Frame>,
    fade_out: Frame,
    peak: f32,
) -> f32 {
    if frame < start {
        return 0.0;
    }

    let fade_in_factor = progress(frame, start, fade_in);

    let fade_out_factor = match end {
        None => 1.0,
        Some(end) if frame >= end => return 0.0,
        Some(end) => {
            let fade_start = end.saturating_sub(fade_out);
            if frame < fade_start {
                1.0
            } else {
                (end - frame) as f32 / fade_out as f32
            }
        }
    };

    if fade_in_factor >= 1.0 && fade_out_factor >= 1.0 {
        return peak;
    }
    peak * fade_in_factor * fade_out_factor
}
