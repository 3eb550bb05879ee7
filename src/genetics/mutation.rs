use super::{Chromosome, ConfigError};
use rand::{rngs::StdRng, Rng};

pub trait Mutation {
    /// Mutates the chromosome in place. Returns whether any genes moved so
    /// the caller knows to re-evaluate.
    fn mutate(&self, rng: &mut StdRng, chromosome: &mut Chromosome) -> bool;
}

/// For each gene, with the configured per-gene probability, swaps it with
/// another uniformly chosen position. Keeps the professor multiset of the
/// individual intact, unlike resampling.
pub struct ShuffleMutation {
    probability: f64,
}

impl ShuffleMutation {
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::Probability("mutation", probability));
        }
        Ok(Self { probability })
    }
}

impl Mutation for ShuffleMutation {
    fn mutate(&self, rng: &mut StdRng, chromosome: &mut Chromosome) -> bool {
        let length = chromosome.len();
        if length < 2 {
            return false;
        }
        let mut changed = false;
        for i in 0..length {
            if rng.gen_bool(self.probability) {
                let mut other = rng.gen_range(0..length - 1);
                if other >= i {
                    other += 1;
                }
                chromosome.swap(i, other);
                changed = true;
            }
        }
        changed
    }
}
