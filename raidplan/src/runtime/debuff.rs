use crate::{Debuff, DebuffTarget, Frame, Player};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebuffOp<'a> {
    Add {
        target: &'a DebuffTarget,
        debuff: &'a Debuff,
    },
    Remove {
        target: &'a DebuffTarget,
        debuff_id: &'a str,
    },
}

impl DebuffOp<'_> {
    /// Adds sort ahead of removes that share a frame.
    pub(crate) fn order_key(&self) -> u8 {
        match self {
            Self::Add { .. } => 0,
            Self::Remove { .. } => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebuffChange<'a> {
    pub frame: Frame,
    pub op: DebuffOp<'a>,
}

/// A debuff a player carries, with the frame it was (last) applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AppliedDebuff<'a> {
    pub debuff: &'a Debuff,
    pub start_frame: Frame,
}

impl AppliedDebuff<'_> {
    /// Seconds left at `frame`, clamped at zero. `None` for debuffs without a duration.
    pub fn remaining(&self, frame: Frame, fps: f32) -> Option<f32> {
        let duration = self.debuff.duration?;
        let elapsed = frame.saturating_sub(self.start_frame) as f32 / fps;
        Some((duration - elapsed).max(0.0))
    }
}

/// Debuff badge as it appears in a snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ActiveDebuff {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    pub start_frame: Frame,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub remaining: Option<f32>,
}

/// Per-player debuff sets at one frame, keyed by player id, each set in application order.
#[derive(Clone, Debug, Default)]
pub struct DebuffSets<'a> {
    sets: HashMap<&'a str, Vec<AppliedDebuff<'a>>>,
}

impl<'a> DebuffSets<'a> {
    pub fn get(&self, player_id: &str) -> &[AppliedDebuff<'a>] {
        self.sets.get(player_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active(&self, player_id: &str, frame: Frame, fps: f32) -> Vec<ActiveDebuff> {
        self.get(player_id)
            .iter()
            .map(|applied| ActiveDebuff {
                id: applied.debuff.id.clone(),
                name: applied.debuff.name.clone(),
                color: applied.debuff.color.clone(),
                start_frame: applied.start_frame,
                remaining: applied.remaining(frame, fps),
            })
            .collect()
    }

    /// Reverse index debuff id → carrying player, built in one pass.
    ///
    /// When several players carry the same debuff, the first in `players` order wins.
    pub fn holders(&self, players: &'a [Player]) -> HashMap<&'a str, &'a str> {
        let mut out = HashMap::new();
        for player in players {
            for applied in self.get(&player.id) {
                out.entry(applied.debuff.id.as_str())
                    .or_insert(player.id.as_str());
            }
        }
        out
    }

    fn apply(&mut self, player_id: &'a str, applied: AppliedDebuff<'a>) {
        let set = self.sets.entry(player_id).or_default();
        match set.iter_mut().find(|d| d.debuff.id == applied.debuff.id) {
            Some(existing) => *existing = applied,
            None => set.push(applied),
        }
    }

    fn remove(&mut self, player_id: &str, debuff_id: &str) {
        if let Some(set) = self.sets.get_mut(player_id) {
            set.retain(|d| d.debuff.id != debuff_id);
        }
    }
}

/// Folds `changes` (sorted by frame, adds before removes) up to and including `frame`.
///
/// Re-adding an active debuff id overwrites it in place and restarts its countdown. `all` targets
/// every player in `players`; ids outside `players` and removing a debuff nobody carries are
/// no-ops.
pub fn resolve_debuffs<'a>(
    players: &'a [Player],
    changes: &[DebuffChange<'a>],
    frame: Frame,
) -> DebuffSets<'a> {
    let mut sets = DebuffSets::default();

    for change in changes {
        if change.frame > frame {
            break;
        }
        match change.op {
            DebuffOp::Add { target, debuff } => {
                let applied = AppliedDebuff {
                    debuff,
                    start_frame: change.frame,
                };
                for player in players.iter().filter(|p| target.applies_to(&p.id)) {
                    sets.apply(&player.id, applied);
                }
            }
            DebuffOp::Remove { target, debuff_id } => {
                for player in players.iter().filter(|p| target.applies_to(&p.id)) {
                    sets.remove(&player.id, debuff_id);
                }
            }
        }
    }

    sets
}
