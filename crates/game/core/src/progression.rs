//! Experience, levels and the queue of pending upgrade picks.
//!
//! Every level gained adds one pending pick. Picks are resolved strictly one
//! at a time: the run takes a pick, offers, applies, and only then takes the
//! next.

/// Experience required to advance from `level` to `level + 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExperienceCurve;

impl ExperienceCurve {
    /// `15 + 5L` below 20, `105 + 8(L - 20)` below 40, `265 + 12(L - 40)` beyond.
    pub const fn threshold(level: u32) -> u32 {
        if level < 20 {
            15 + 5 * level
        } else if level < 40 {
            105 + 8 * (level - 20)
        } else {
            265 + 12 * (level - 40)
        }
    }
}

/// Level and experience of the player in the current run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub experience: u32,
    pub pending_picks: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            pending_picks: 0,
        }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds experience and returns how many levels were gained.
    pub fn gain(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut gained = 0;
        loop {
            let needed = ExperienceCurve::threshold(self.level);
            if self.experience < needed {
                break;
            }
            self.experience -= needed;
            self.level += 1;
            gained += 1;
        }
        self.pending_picks += gained;
        gained
    }

    /// Experience still missing for the next level.
    pub fn remaining(&self) -> u32 {
        ExperienceCurve::threshold(self.level).saturating_sub(self.experience)
    }

    /// Consumes one pending pick, `false` if none were queued.
    pub fn take_pick(&mut self) -> bool {
        if self.pending_picks == 0 {
            return false;
        }
        self.pending_picks -= 1;
        true
    }

    pub fn has_pending_pick(&self) -> bool {
        self.pending_picks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_segments() {
        assert_eq!(ExperienceCurve::threshold(1), 20);
        assert_eq!(ExperienceCurve::threshold(19), 110);
        assert_eq!(ExperienceCurve::threshold(20), 105);
        assert_eq!(ExperienceCurve::threshold(40), 265);
        assert_eq!(ExperienceCurve::threshold(41), 277);
    }

    #[test]
    fn gain_queues_one_pick_per_level() {
        let mut progression = Progression::new();
        assert_eq!(progression.gain(19), 0);
        assert_eq!(progression.remaining(), 1);

        // 47 total = 20 (level 1) + 25 (level 2) + 2 carried over.
        assert_eq!(progression.gain(1 + 25 + 2), 2);
        assert_eq!(progression.level, 3);
        assert_eq!(progression.experience, 2);
        assert_eq!(progression.pending_picks, 2);

        assert!(progression.take_pick());
        assert!(progression.take_pick());
        assert!(!progression.take_pick());
    }
}
