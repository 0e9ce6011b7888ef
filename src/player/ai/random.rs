use crate::core::CellSet;
use crate::logic::empty_cells;
use crate::player::MoveStrategy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

pub struct RandomAI {
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new() -> Self {
        RandomAI {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// 再現可能な乱数列で生成
    pub fn with_seed(seed: u64) -> Self {
        RandomAI {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform pick from `cells`.
    pub fn pick(&self, cells: CellSet) -> Option<usize> {
        let candidates: Vec<usize> = cells.iter().collect();
        candidates.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomAI {
    fn select_move(&self, own: CellSet, opponent: CellSet) -> Option<usize> {
        self.pick(empty_cells(own, opponent))
    }

    fn level(&self) -> &str {
        "easy"
    }
}
