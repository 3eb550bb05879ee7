use super::Individual;

pub trait Reinsertion {
    /// Folds the elite archive back into the next generation. Offsprings are
    /// assumed to be ordered by fitness asc.
    fn reinsert(&self, elites: &[Individual], offsprings: &mut Vec<Individual>);
}

/// Clones the archive members over the worst offsprings, so the best-known
/// score never regresses between generations.
pub struct EliteReinsertion;

impl Reinsertion for EliteReinsertion {
    fn reinsert(&self, elites: &[Individual], offsprings: &mut Vec<Individual>) {
        let keep = offsprings.len().saturating_sub(elites.len());
        offsprings.truncate(keep);
        offsprings.extend_from_slice(elites);
        offsprings.sort_by(Individual::fitness_asc);
    }
}
