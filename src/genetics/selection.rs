use super::{ConfigError, Individual};
use rand::{rngs::StdRng, Rng};

pub trait Selection {
    fn select(
        &self,
        rng: &mut StdRng,
        parents: &[Individual],
        offsprings: &mut Vec<Individual>,
        count: usize,
    );
}

/// Repeatedly samples `size` parents with replacement and keeps the best of
/// each sample. Ties go to the first-encountered contender. Size 1 degrades
/// to uniform random selection.
pub struct TournamentSelection {
    size: usize,
}

impl TournamentSelection {
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::TournamentSize);
        }
        Ok(Self { size })
    }
}

impl Selection for TournamentSelection {
    fn select(
        &self,
        rng: &mut StdRng,
        parents: &[Individual],
        offsprings: &mut Vec<Individual>,
        count: usize,
    ) {
        for _ in 0..count {
            let mut best = &parents[rng.gen_range(0..parents.len())];
            for _ in 1..self.size {
                let contender = &parents[rng.gen_range(0..parents.len())];
                if contender.fitness < best.fitness {
                    best = contender;
                }
            }
            offsprings.push(best.clone());
        }
    }
}
