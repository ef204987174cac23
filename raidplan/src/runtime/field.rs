use crate::runtime::interpolate::progress;
use crate::{Field, FieldAppearance, FieldChangeEvent, FieldOverride, FieldRevertEvent, Frame, lerp};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldChangeAt<'a> {
    pub frame: Frame,
    pub event: &'a FieldChangeEvent,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldRevertAt<'a> {
    pub frame: Frame,
    pub event: &'a FieldRevertEvent,
}

impl FieldRevertAt<'_> {
    fn end_frame(&self) -> Frame {
        self.frame.saturating_add(self.event.fade_out_duration)
    }
}

/// Background at `frame`.
///
/// Overrides stack by recency: only the newest change that is not fully reverted applies. While it
/// fades in, `background_opacity` blends linearly from the base and color/image switch over at 50%
/// progress. A revert mirrors that back toward the base, starting from however far the fade-in got.
/// Reverts without a matching earlier change are ignored.
pub fn resolve_field(
    base: &Field,
    changes: &[FieldChangeAt<'_>],
    reverts: &[FieldRevertAt<'_>],
    frame: Frame,
) -> FieldAppearance {
    let base = base.appearance();

    let revert_for = |change: &FieldChangeAt<'_>| {
        reverts.iter().find(|r| {
            r.frame <= frame
                && r.frame >= change.frame
                && r.event.field_change_id == change.event.field_change_id
        })
    };

    let active = changes
        .iter()
        .filter(|c| c.frame <= frame)
        .rev()
        .map(|c| (c, revert_for(c)))
        .find(|(_, revert)| revert.is_none_or(|r| frame < r.end_frame()));

    let Some((change, revert)) = active else {
        return base;
    };

    let fade_in = change.event.fade_in_duration;
    let overrides = &change.event.field_override;

    match revert {
        None => {
            let p = progress(frame, change.frame, fade_in);
            blend(&base, overrides, p, p >= 0.5)
        }
        Some(revert) => {
            let reached = progress(revert.frame, change.frame, fade_in);
            let p = progress(frame, revert.frame, revert.event.fade_out_duration);
            blend(&base, overrides, reached * (1.0 - p), reached >= 0.5 && p < 0.5)
        }
    }
}

fn blend(
    base: &FieldAppearance,
    overrides: &FieldOverride,
    weight: f32,
    switched: bool,
) -> FieldAppearance {
    let background_opacity = match overrides.background_opacity {
        Some(target) if weight >= 1.0 => target,
        Some(target) => lerp(base.background_opacity, target, weight),
        None => base.background_opacity,
    };

    if !switched {
        return FieldAppearance {
            background_opacity,
            ..base.clone()
        };
    }

    FieldAppearance {
        background_color: overrides
            .background_color
            .clone()
            .unwrap_or_else(|| base.background_color.clone()),
        background_image: overrides
            .background_image
            .clone()
            .or_else(|| base.background_image.clone()),
        background_opacity,
    }
}
