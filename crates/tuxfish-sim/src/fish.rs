// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fish species, wild-bite rarity tiers and the catch log.

use core::fmt;

use tuxfish_math::Prng;

use crate::constants::{ModelId, SPECIES_COUNT};

/// A catchable species, identified by its model index (`7..=59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FishId(u32);

impl FishId {
    /// First species id.
    pub const FIRST: u32 = ModelId::FIRST_FISH.0;
    /// Last species id.
    pub const LAST: u32 = ModelId::LAST_FISH.0;

    /// Returns the species for a model index, or `None` outside `7..=59`.
    pub fn new(id: u32) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&id).then_some(Self(id))
    }

    /// Raw model index.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Model to draw for this species.
    pub fn model(self) -> ModelId {
        ModelId(self.0)
    }

    /// Zero-based slot in the species table.
    pub fn species_index(self) -> usize {
        (self.0 - Self::FIRST) as usize
    }

    /// Draws `range(min, max)` and rounds half away from zero.
    ///
    /// Callers keep `min..=max` inside `7..=59`, so the result is always a
    /// valid species.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn roll_between(rng: &mut Prng, min: f32, max: f32) -> Self {
        let id = rng.next_range(min, max).round() as u32;
        Self(id.clamp(Self::FIRST, Self::LAST))
    }
}

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fish #{}", self.0)
    }
}

/// Picks the species for a wild bite.
///
/// One roll in `[0, 100)` selects a rarity tier, then a second roll picks a
/// species inside it:
///
/// | roll | species |
/// |---|---|
/// | `< 50` | 7..=21 |
/// | `< 80` | 22..=34 |
/// | `< 90` | 35..=46 |
/// | `< 97` | 47..=58 |
/// | else | 59 |
pub fn roll_wild_fish(rng: &mut Prng) -> FishId {
    let rc = rng.next_range(0.0, 100.0);
    if rc < 50.0 {
        FishId::roll_between(rng, 7.0, 21.0)
    } else if rc < 80.0 {
        FishId::roll_between(rng, 22.0, 34.0)
    } else if rc < 90.0 {
        FishId::roll_between(rng, 35.0, 46.0)
    } else if rc < 97.0 {
        FishId::roll_between(rng, 47.0, 58.0)
    } else {
        FishId(ModelId::LAST_FISH.0)
    }
}

/// Which species have been landed, and how many fish in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchLog {
    caught: [bool; SPECIES_COUNT],
    total: u32,
}

impl Default for CatchLog {
    fn default() -> Self {
        Self {
            caught: [false; SPECIES_COUNT],
            total: 0,
        }
    }
}

impl CatchLog {
    /// Records one landed fish.
    pub fn record(&mut self, fish: FishId) {
        self.caught[fish.species_index()] = true;
        self.total += 1;
    }

    /// Fish landed, repeats included.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Distinct species landed (out of [`SPECIES_COUNT`]).
    pub fn distinct(&self) -> usize {
        self.caught.iter().filter(|c| **c).count()
    }

    /// True once `fish` has been landed at least once.
    pub fn has_caught(&self, fish: FishId) -> bool {
        self.caught[fish.species_index()]
    }

    /// Forgets every catch.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_outside_fish_models_are_rejected() {
        assert!(FishId::new(6).is_none());
        assert!(FishId::new(60).is_none());
        assert_eq!(FishId::new(7).map(FishId::species_index), Some(0));
        assert_eq!(FishId::new(59).map(FishId::species_index), Some(52));
    }

    #[test]
    fn wild_rolls_stay_inside_the_species_table() {
        let mut rng = Prng::from_seed(1);
        for _ in 0..2000 {
            let id = roll_wild_fish(&mut rng).get();
            assert!((7..=59).contains(&id), "{id}");
        }
    }

    #[test]
    fn catch_log_counts_repeats_once_per_species() {
        let mut log = CatchLog::default();
        let a = FishId::new(7).expect("fish");
        let b = FishId::new(59).expect("fish");
        log.record(a);
        log.record(a);
        log.record(b);
        assert_eq!(log.total(), 3);
        assert_eq!(log.distinct(), 2);
        assert!(log.has_caught(b));
        log.clear();
        assert_eq!((log.total(), log.distinct()), (0, 0));
    }
}
