use crate::{
    AoeShowEvent, CastEvent, DebuffChange, DebuffOp, EventKind, FieldChangeAt, FieldRevertAt,
    Frame, HideWindow, MechanicData, Motion, ObjectShowEvent, ShowWindow, TextEvent,
    TextShowEvent, resolve_visibility,
};
use std::collections::HashMap;

/// An event payload together with the frame and id of the event carrying it.
#[derive(Debug, PartialEq)]
pub struct Timed<'a, T> {
    pub id: &'a str,
    pub frame: Frame,
    pub event: &'a T,
}

impl<T> Clone for Timed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Timed<'_, T> {}

/// One show → hide span of an AoE, object or text, paired by its show/hide key.
#[derive(Debug, PartialEq)]
pub struct Lifecycle<'a, T> {
    pub key: &'a str,
    pub show: Timed<'a, T>,
    pub fade_in: Frame,
    pub hide: Option<HideWindow>,
}

impl<'a, T> Lifecycle<'a, T> {
    fn new(key: &'a str, show: Timed<'a, T>, fade_in: Frame) -> Self {
        Self {
            key,
            show,
            fade_in,
            hide: None,
        }
    }

    pub fn show_window(&self) -> ShowWindow {
        ShowWindow {
            frame: self.show.frame,
            fade_in: self.fade_in,
        }
    }

    /// The paired hide, if it has already happened at `frame`.
    pub fn hide_at(&self, frame: Frame) -> Option<HideWindow> {
        self.hide.filter(|h| h.frame <= frame)
    }

    pub fn opacity(&self, base_opacity: f32, frame: Frame) -> Option<f32> {
        resolve_visibility(self.show_window(), self.hide_at(frame), base_opacity, frame)
    }
}

struct HideAt<'a> {
    order: usize,
    key: &'a str,
    window: HideWindow,
}

enum Step {
    Show(usize),
    Hide(usize),
}

/// Read-only partition of a mechanic's timeline, grouped by event type (and by target for
/// movement), every group sorted by frame with input order kept for ties.
///
/// Built once per mechanic and queried per frame; holds no per-frame state, so one index can be
/// shared by any number of threads resolving different frames.
#[derive(Debug)]
pub struct TimelineIndex<'a> {
    pub(crate) mechanic: &'a MechanicData,
    pub(crate) motions: HashMap<&'a str, Vec<Motion>>,
    pub(crate) aoes: Vec<Lifecycle<'a, AoeShowEvent>>,
    pub(crate) objects: Vec<Lifecycle<'a, ObjectShowEvent>>,
    pub(crate) texts: Vec<Lifecycle<'a, TextShowEvent>>,
    pub(crate) legacy_texts: Vec<Timed<'a, TextEvent>>,
    pub(crate) casts: Vec<Timed<'a, CastEvent>>,
    pub(crate) debuff_changes: Vec<DebuffChange<'a>>,
    pub(crate) field_changes: Vec<FieldChangeAt<'a>>,
    pub(crate) field_reverts: Vec<FieldRevertAt<'a>>,
}

impl<'a> TimelineIndex<'a> {
    pub fn new(mechanic: &'a MechanicData) -> Self {
        let mut motions = HashMap::<&'a str, Vec<Motion>>::new();
        let mut aoes = Vec::new();
        let mut aoe_hides = Vec::new();
        let mut objects = Vec::new();
        let mut object_hides = Vec::new();
        let mut texts = Vec::new();
        let mut text_hides = Vec::new();
        let mut legacy_texts = Vec::new();
        let mut casts = Vec::new();
        let mut debuff_changes = Vec::new();
        let mut field_changes = Vec::new();
        let mut field_reverts = Vec::new();

        for (order, event) in mechanic.timeline.iter().enumerate() {
            let frame = event.frame;
            let id = event.id.as_str();
            match &event.kind {
                EventKind::Move(e) => motions
                    .entry(e.target_id.as_str())
                    .or_default()
                    .push(Motion::from_move(frame, e)),
                EventKind::BossMove(e) => motions
                    .entry(e.target_id.as_str())
                    .or_default()
                    .push(Motion::from_boss_move(frame, e)),
                EventKind::AoeShow(e) => aoes.push((
                    order,
                    Lifecycle::new(
                        &e.aoe_id,
                        Timed { id, frame, event: e },
                        e.fade_in_duration,
                    ),
                )),
                EventKind::AoeHide(e) => aoe_hides.push(HideAt {
                    order,
                    key: &e.aoe_id,
                    window: HideWindow {
                        frame,
                        fade_out: e.fade_out_duration,
                    },
                }),
                EventKind::ObjectShow(e) => objects.push((
                    order,
                    Lifecycle::new(
                        &e.object_id,
                        Timed { id, frame, event: e },
                        e.fade_in_duration,
                    ),
                )),
                EventKind::ObjectHide(e) => object_hides.push(HideAt {
                    order,
                    key: &e.object_id,
                    window: HideWindow {
                        frame,
                        fade_out: e.fade_out_duration,
                    },
                }),
                EventKind::TextShow(e) => texts.push((
                    order,
                    Lifecycle::new(
                        &e.text_id,
                        Timed { id, frame, event: e },
                        e.fade_in_duration,
                    ),
                )),
                EventKind::TextHide(e) => text_hides.push(HideAt {
                    order,
                    key: &e.text_id,
                    window: HideWindow {
                        frame,
                        fade_out: e.fade_out_duration,
                    },
                }),
                EventKind::Text(e) => legacy_texts.push(Timed { id, frame, event: e }),
                EventKind::Cast(e) => casts.push(Timed { id, frame, event: e }),
                EventKind::DebuffAdd(e) => debuff_changes.push(DebuffChange {
                    frame,
                    op: DebuffOp::Add {
                        target: &e.target_id,
                        debuff: &e.debuff,
                    },
                }),
                EventKind::DebuffRemove(e) => debuff_changes.push(DebuffChange {
                    frame,
                    op: DebuffOp::Remove {
                        target: &e.target_id,
                        debuff_id: &e.debuff_id,
                    },
                }),
                EventKind::FieldChange(e) => field_changes.push(FieldChangeAt { frame, event: e }),
                EventKind::FieldRevert(e) => field_reverts.push(FieldRevertAt { frame, event: e }),
            }
        }

        // Stable sorts: equal frames keep authoring order.
        for list in motions.values_mut() {
            list.sort_by_key(|m| m.frame);
        }
        legacy_texts.sort_by_key(|t| t.frame);
        casts.sort_by_key(|c| c.frame);
        debuff_changes.sort_by_key(|c| (c.frame, c.op.order_key()));
        field_changes.sort_by_key(|c| c.frame);
        field_reverts.sort_by_key(|r| r.frame);

        let aoes = pair_lifecycles(aoes, aoe_hides);
        let objects = pair_lifecycles(objects, object_hides);
        let texts = pair_lifecycles(texts, text_hides);

        log::debug!(
            "indexed mechanic '{}': {} events, {} movers, {} aoes, {} objects, {} texts",
            mechanic.name,
            mechanic.timeline.len(),
            motions.len(),
            aoes.len(),
            objects.len(),
            texts.len() + legacy_texts.len(),
        );

        Self {
            mechanic,
            motions,
            aoes,
            objects,
            texts,
            legacy_texts,
            casts,
            debuff_changes,
            field_changes,
            field_reverts,
        }
    }

    pub fn mechanic(&self) -> &'a MechanicData {
        self.mechanic
    }

    /// Movement segments of `target_id` that have started at or before `frame`.
    pub fn motions_until(&self, target_id: &str, frame: Frame) -> &[Motion] {
        self.motions
            .get(target_id)
            .map(|list| until(list, frame, |m| m.frame))
            .unwrap_or(&[])
    }
}

/// Leading part of a frame-sorted slice whose frames are `<= frame`.
pub(crate) fn until<T>(items: &[T], frame: Frame, frame_of: impl Fn(&T) -> Frame) -> &[T] {
    let end = items.partition_point(|item| frame_of(item) <= frame);
    &items[..end]
}

/// Pairs shows and hides of the same key, walking both in `(frame, input order)` sequence.
///
/// A hide binds to the latest show of its key seen so far, so a hide authored ahead of a
/// same-frame re-show still ends the earlier instance. A hide whose show is already paired, or
/// that precedes every show of its key, is dropped. A show that is never hidden but whose key is
/// shown again ends instantly at the re-show.
fn pair_lifecycles<'a, T>(
    mut shows: Vec<(usize, Lifecycle<'a, T>)>,
    hides: Vec<HideAt<'a>>,
) -> Vec<Lifecycle<'a, T>> {
    shows.sort_by_key(|(order, lc)| (lc.show.frame, *order));

    let mut steps: Vec<(Frame, usize, Step)> = shows
        .iter()
        .enumerate()
        .map(|(i, (order, lc))| (lc.show.frame, *order, Step::Show(i)))
        .chain(
            hides
                .iter()
                .enumerate()
                .map(|(i, h)| (h.window.frame, h.order, Step::Hide(i))),
        )
        .collect();
    steps.sort_by_key(|(frame, order, _)| (*frame, *order));

    let mut shows: Vec<Lifecycle<'a, T>> = shows.into_iter().map(|(_, lc)| lc).collect();
    let mut latest = HashMap::<&'a str, usize>::new();

    for (frame, _, step) in steps {
        match step {
            Step::Show(i) => {
                if let Some(prev) = latest.insert(shows[i].key, i) {
                    let earlier = &mut shows[prev];
                    if earlier.hide.is_none() {
                        earlier.hide = Some(HideWindow { frame, fade_out: 0 });
                    }
                }
            }
            Step::Hide(i) => {
                let hide = &hides[i];
                match latest.get(hide.key) {
                    Some(&owner) if shows[owner].hide.is_none() => {
                        shows[owner].hide = Some(hide.window);
                    }
                    Some(_) => log::debug!("ignoring repeated hide of '{}'", hide.key),
                    None => log::debug!("ignoring hide of never-shown '{}'", hide.key),
                }
            }
        }
    }

    shows
}
