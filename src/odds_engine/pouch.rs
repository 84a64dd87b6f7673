use rand::Rng;
use crate::odds_engine::models::TOTAL_BALLS;

/// The 90-ball pouch, shuffled up front and drawn from in order.
pub struct Pouch {
    balls: Vec<u8>,
    cursor: usize,
}

impl Pouch {
    /// Fill the pouch with 1..=90 and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut balls: Vec<u8> = (1..=TOTAL_BALLS).collect();

        // Fisher-Yates shuffle
        for i in (1..balls.len()).rev() {
            let j = rng.gen_range(0..=i);
            balls.swap(i, j);
        }

        Pouch { balls, cursor: 0 }
    }

    /// Draw the next ball, or `None` once the pouch is empty.
    pub fn draw(&mut self) -> Option<u8> {
        let ball = self.balls.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(ball)
    }

    /// Draw up to `n` balls at once.
    pub fn draw_n(&mut self, n: usize) -> Vec<u8> {
        (0..n).map_while(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.balls.len() - self.cursor
    }

    /// Every ball called so far, in call order.
    pub fn called(&self) -> &[u8] {
        &self.balls[..self.cursor]
    }

    /// Most recently called ball.
    pub fn last_called(&self) -> Option<u8> {
        self.called().last().copied()
    }
}
