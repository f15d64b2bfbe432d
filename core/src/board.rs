use core::ops::Index;
use rand::Rng;

use crate::*;

/// Outcome of whacking a hole.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WhackOutcome {
    Miss,
    Hit,
}

impl WhackOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Miss => false,
            Self::Hit => true,
        }
    }
}

/// The fixed set of holes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [Slot; HOLE_COUNT],
}

impl Board {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            slots: core::array::from_fn(|position| Slot::hidden(position, Face::random(rng))),
        }
    }

    /// Hides every mole and gives each hole a fresh face.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        for slot in &mut self.slots {
            *slot = Slot::hidden(slot.position, Face::random(rng));
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn validate_position(&self, position: usize) -> Result<usize> {
        if position < self.slots.len() {
            Ok(position)
        } else {
            Err(GameError::InvalidSlot)
        }
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.visible).count()
    }

    /// Each visible mole ducks with even odds. Returns how many went down.
    pub fn hide_some<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut hidden = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.visible) {
            if rng.random_bool(0.5) {
                slot.visible = false;
                hidden += 1;
            }
        }
        hidden
    }

    /// Pops a mole with a new face out of one hidden hole, picked uniformly.
    pub fn reveal_one<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        let free = HOLE_COUNT - self.visible_count();
        if free == 0 {
            return None;
        }
        let pick = rng.random_range(0..free);
        let slot = self.slots.iter_mut().filter(|slot| !slot.visible).nth(pick)?;
        slot.visible = true;
        slot.face = Face::random(rng);
        Some(slot.position)
    }

    pub fn whack(&mut self, position: usize) -> Result<WhackOutcome> {
        let position = self.validate_position(position)?;
        let slot = &mut self.slots[position];
        Ok(if slot.visible {
            slot.visible = false;
            WhackOutcome::Hit
        } else {
            WhackOutcome::Miss
        })
    }

    #[cfg(test)]
    pub(crate) fn set_visible(&mut self, position: usize, visible: bool) {
        self.slots[position].visible = visible;
    }
}

impl Index<usize> for Board {
    type Output = Slot;

    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn new_board_is_all_hidden_with_fixed_positions() {
        let board = Board::new(&mut rng());
        assert_eq!(board.visible_count(), 0);
        for (i, slot) in board.slots().iter().enumerate() {
            assert_eq!(slot.position, i);
        }
    }

    #[test]
    fn reveal_one_only_picks_hidden_holes() {
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        for expected in 1..=HOLE_COUNT {
            let position = board.reveal_one(&mut rng).unwrap();
            assert!(board[position].visible);
            assert_eq!(board.visible_count(), expected);
        }
        assert_eq!(board.reveal_one(&mut rng), None);
        assert_eq!(board.visible_count(), HOLE_COUNT);
    }

    #[test]
    fn hide_some_leaves_hidden_holes_alone() {
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        board.set_visible(2, true);
        board.set_visible(7, true);
        for _ in 0..20 {
            let before = board.visible_count();
            let hidden = board.hide_some(&mut rng);
            assert_eq!(board.visible_count(), before - hidden);
            assert!(board.slots().iter().enumerate().all(|(i, s)| !s.visible || i == 2 || i == 7));
        }
    }

    #[test]
    fn hide_some_eventually_clears_the_board() {
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        for i in 0..HOLE_COUNT {
            board.set_visible(i, true);
        }
        for _ in 0..64 {
            board.hide_some(&mut rng);
        }
        assert_eq!(board.visible_count(), 0);
    }

    #[test]
    fn hide_some_ducks_about_half_the_moles() {
        const TRIALS: usize = 20_000;
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        let mut hidden = 0;
        for _ in 0..TRIALS {
            for i in 0..HOLE_COUNT {
                board.set_visible(i, true);
            }
            hidden += board.hide_some(&mut rng);
        }
        let rate = hidden as f64 / (TRIALS * HOLE_COUNT) as f64;
        assert!((0.48..0.52).contains(&rate), "hide rate {rate}");
    }

    #[test]
    fn reveal_one_picks_holes_uniformly() {
        const TRIALS: usize = 18_000;
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        let mut counts = [0usize; HOLE_COUNT];
        for _ in 0..TRIALS {
            let position = board.reveal_one(&mut rng).unwrap();
            counts[position] += 1;
            board.set_visible(position, false);
        }
        let expected = TRIALS / HOLE_COUNT;
        for count in counts {
            assert!(count.abs_diff(expected) < expected / 10, "{counts:?}");
        }
    }

    #[test]
    fn reveal_one_is_uniform_over_the_hidden_holes_only() {
        const TRIALS: usize = 12_000;
        let occupied = [0, 4, 8];
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        for &i in &occupied {
            board.set_visible(i, true);
        }
        let mut counts = [0usize; HOLE_COUNT];
        for _ in 0..TRIALS {
            let position = board.reveal_one(&mut rng).unwrap();
            counts[position] += 1;
            board.set_visible(position, false);
        }
        let expected = TRIALS / (HOLE_COUNT - occupied.len());
        for (i, &count) in counts.iter().enumerate() {
            if occupied.contains(&i) {
                assert_eq!(count, 0, "{counts:?}");
            } else {
                assert!(count.abs_diff(expected) < expected / 10, "{counts:?}");
            }
        }
    }

    #[test]
    fn whack_hits_visible_and_misses_hidden() {
        let mut board = Board::new(&mut rng());
        board.set_visible(4, true);
        assert_eq!(board.whack(4), Ok(WhackOutcome::Hit));
        assert!(!board[4].visible);
        assert_eq!(board.whack(4), Ok(WhackOutcome::Miss));
        assert_eq!(board.whack(0), Ok(WhackOutcome::Miss));
    }

    #[test]
    fn whack_out_of_range_is_rejected() {
        let mut board = Board::new(&mut rng());
        assert_eq!(board.whack(HOLE_COUNT), Err(GameError::InvalidSlot));
    }

    #[test]
    fn reset_hides_everything() {
        let mut rng = rng();
        let mut board = Board::new(&mut rng);
        board.reveal_one(&mut rng);
        board.reveal_one(&mut rng);
        board.reset(&mut rng);
        assert_eq!(board.visible_count(), 0);
    }
}
