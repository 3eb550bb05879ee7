use super::{Chromosome, ConfigError};
use rand::{rngs::StdRng, Rng};
use std::mem;

pub trait Crossover {
    /// Recombines the pair in place. Returns whether any genes moved so the
    /// caller knows to re-evaluate.
    fn cross(&self, rng: &mut StdRng, chromosome1: &mut Chromosome, chromosome2: &mut Chromosome)
        -> bool;
}

/// With the configured probability, swaps the gene range between two
/// uniformly chosen cut points of the pair.
pub struct TwoPointCrossover {
    probability: f64,
}

impl TwoPointCrossover {
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::Probability("crossover", probability));
        }
        Ok(Self { probability })
    }
}

impl Crossover for TwoPointCrossover {
    fn cross(
        &self,
        rng: &mut StdRng,
        chromosome1: &mut Chromosome,
        chromosome2: &mut Chromosome,
    ) -> bool {
        debug_assert_eq!(chromosome1.len(), chromosome2.len());
        let length = chromosome1.len();
        if length < 2 || !rng.gen_bool(self.probability) {
            return false;
        }

        let mut lo = rng.gen_range(0..length);
        let mut hi = rng.gen_range(0..length);
        if lo > hi {
            mem::swap(&mut lo, &mut hi);
        }
        for i in lo..=hi {
            mem::swap(&mut chromosome1[i], &mut chromosome2[i]);
        }
        true
    }
}
