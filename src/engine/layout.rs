use rand::Rng;

use super::commands::Side;

/// Which original choice index sits on which screen side. Always a
/// permutation of {0, 1}; redrawn every time a question lands on a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerLayout {
    pub left: u8,
    pub right: u8,
}

impl AnswerLayout {
    pub fn choice_for(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_permutation(&self) -> bool {
        (self.left == 0 && self.right == 1) || (self.left == 1 && self.right == 0)
    }
}

/// Place the correct choice on the left or right with equal probability,
/// independent of `correct` itself and of any previous draw.
pub fn randomize_layout<R: Rng>(rng: &mut R, correct: u8) -> AnswerLayout {
    let other = 1 - correct;
    if rng.random_bool(0.5) {
        AnswerLayout { left: correct, right: other }
    } else {
        AnswerLayout { left: other, right: correct }
    }
}
