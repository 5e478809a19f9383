use std::collections::VecDeque;

use codepulse::traits::random_source::RandomSource;

/// Replays a fixed draw sequence, in order. Panics when asked for more
/// draws than were scripted.
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws: draws.into(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}
