use crate::{Frame, resolve_envelope};

/// Start of a show/hide lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ShowWindow {
    pub frame: Frame,
    pub fade_in: Frame,
}

/// End of a show/hide lifecycle. The entity disappears at `frame + fade_out`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HideWindow {
    pub frame: Frame,
    pub fade_out: Frame,
}

impl HideWindow {
    pub fn end_frame(&self) -> Frame {
        self.frame.saturating_add(self.fade_out)
    }
}

/// Opacity of a shown entity at `frame`, or `None` when it is not shown.
///
/// Shared by AoEs, objects and texts. The fade-in factor (anchored at `show.frame`) and, once the
/// hide has happened, the fade-out factor multiply `base_opacity`, so hiding during a fade-in never
/// jumps to full opacity.
pub fn resolve_visibility(
    show: ShowWindow,
    hide: Option<HideWindow>,
    base_opacity: f32,
    frame: Frame,
) -> Option<f32> {
    if frame < show.frame {
        return None;
    }
    if let Some(hide) = hide {
        if frame >= hide.end_frame() {
            return None;
        }
    }

    let end = hide.map(|h| h.end_frame());
    let fade_out = hide.map_or(0, |h| h.fade_out);
    Some(resolve_envelope(
        frame,
        show.frame,
        show.fade_in,
        end,
        fade_out,
        base_opacity,
    ))
}
