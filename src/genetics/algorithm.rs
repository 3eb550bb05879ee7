use super::{
    ConfigError, Crossover, Evaluation, EvolveParams, HallOfFame, Individual, Initialization,
    Mutation, Reinsertion, Selection, UNEVALUATED,
};
use rand::{rngs::StdRng, SeedableRng};
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of a run. The archive holds the best individuals seen anywhere
/// in the run; `best_history` tracks the archive's best score after each
/// completed generation.
#[derive(Clone, Debug)]
pub struct Evolution {
    pub hall_of_fame: HallOfFame,
    pub best_history: Vec<u32>,
}

impl Evolution {
    /// The archive is seeded before the first generation, so it is never
    /// empty here.
    pub fn best(&self) -> &Individual {
        &self.hall_of_fame.members()[0]
    }
}

pub struct GeneticAlgorithm<TE, TI, TS, TC, TM, TR>
where
    TE: Evaluation,
    TI: Initialization,
    TS: Selection,
    TC: Crossover,
    TM: Mutation,
    TR: Reinsertion,
{
    evaluation: TE,
    initialization: TI,
    selection: TS,
    crossover: TC,
    mutation: TM,
    reinsertion: TR,
}

impl<TE, TI, TS, TC, TM, TR> GeneticAlgorithm<TE, TI, TS, TC, TM, TR>
where
    TE: Evaluation,
    TI: Initialization,
    TS: Selection,
    TC: Crossover,
    TM: Mutation,
    TR: Reinsertion,
{
    pub fn new(
        evaluation: TE,
        initialization: TI,
        selection: TS,
        crossover: TC,
        mutation: TM,
        reinsertion: TR,
    ) -> Self {
        Self {
            evaluation,
            initialization,
            selection,
            crossover,
            mutation,
            reinsertion,
        }
    }

    /// Runs the generational loop and returns the best-effort result, even
    /// when cancelled or stopped early at a conflict-free score.
    pub fn evolve(
        &self,
        params: &EvolveParams,
        cancel: Option<&AtomicBool>,
    ) -> Result<Evolution, ConfigError> {
        params.validate()?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut parents: Vec<Individual> = (0..params.population_size)
            .map(|_| self.initialization.generate(&mut rng))
            .collect();
        self.evaluation.evaluate(&mut parents);
        parents.sort_by(Individual::fitness_asc);

        let mut hall_of_fame = HallOfFame::new(params.elite_count);
        hall_of_fame.update(&parents);

        let mut best_history = Vec::with_capacity(params.generations);
        let mut offsprings = Vec::with_capacity(params.population_size);

        for _ in 0..params.generations {
            if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
                break;
            }
            if hall_of_fame.members()[0].fitness == 0 {
                break;
            }

            self.run_generation(&mut rng, &parents, &mut offsprings, &mut hall_of_fame);
            mem::swap(&mut parents, &mut offsprings);
            best_history.push(hall_of_fame.members()[0].fitness);
        }

        Ok(Evolution {
            hall_of_fame,
            best_history,
        })
    }

    fn run_generation(
        &self,
        rng: &mut StdRng,
        parents: &[Individual],
        offsprings: &mut Vec<Individual>,
        hall_of_fame: &mut HallOfFame,
    ) {
        offsprings.clear();
        self.selection.select(rng, parents, offsprings, parents.len());

        // Consecutive candidates pair up; an odd trailing one passes through
        // crossover untouched but still mutates.
        for pair in offsprings.chunks_mut(2) {
            if let [ind1, ind2] = pair {
                if self
                    .crossover
                    .cross(rng, &mut ind1.chromosome, &mut ind2.chromosome)
                {
                    ind1.fitness = UNEVALUATED;
                    ind2.fitness = UNEVALUATED;
                }
            }
        }
        for ind in offsprings.iter_mut() {
            if self.mutation.mutate(rng, &mut ind.chromosome) {
                ind.fitness = UNEVALUATED;
            }
        }

        self.evaluation.evaluate(offsprings);
        offsprings.sort_by(Individual::fitness_asc);
        self.reinsertion.reinsert(hall_of_fame.members(), offsprings);
        hall_of_fame.update(offsprings);
    }
}
