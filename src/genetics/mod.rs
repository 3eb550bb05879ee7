mod algorithm;
mod crossover;
mod evaluation;
mod mutation;
mod reinsertion;
mod selection;

pub use algorithm::{Evolution, GeneticAlgorithm};
pub use crossover::{Crossover, TwoPointCrossover};
pub use evaluation::{Evaluation, TimetableEvaluation};
pub use mutation::{Mutation, ShuffleMutation};
pub use reinsertion::{EliteReinsertion, Reinsertion};
pub use selection::{Selection, TournamentSelection};

use crate::{
    catalog::{Catalog, ProfId},
    schedule::Dimensions,
};
use rand::rngs::StdRng;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationSize(usize),
    #[error("generation budget must be positive")]
    GenerationBudget,
    #[error("elite count must be between 1 and the population size, got {0}")]
    EliteCount(usize),
    #[error("tournament size must be positive")]
    TournamentSize,
    #[error("{0} probability must be within [0, 1], got {1}")]
    Probability(&'static str, f64),
    #[error("day count must be positive")]
    DayCount,
}

/// Flat professor assignment, one gene per (day, slot, panel, subject) cell.
pub type Chromosome = Vec<ProfId>;

/// Sentinel for a fitness that must be recomputed before it is compared.
pub const UNEVALUATED: u32 = u32::MAX;

#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: u32,
}

impl Individual {
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: UNEVALUATED,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness != UNEVALUATED
    }

    pub fn fitness_asc(ind1: &Individual, ind2: &Individual) -> Ordering {
        ind1.fitness.cmp(&ind2.fitness)
    }
}

pub trait Initialization {
    fn generate(&self, rng: &mut StdRng) -> Individual;
}

/// Samples every gene uniformly from the full roster. Unqualified picks are
/// steered out by penalty pressure alone.
pub struct UniformInitialization {
    dims: Dimensions,
    catalog: Catalog,
}

impl UniformInitialization {
    pub fn new(dims: Dimensions, catalog: &Catalog) -> Self {
        Self {
            dims,
            catalog: catalog.clone(),
        }
    }
}

impl Initialization for UniformInitialization {
    fn generate(&self, rng: &mut StdRng) -> Individual {
        Individual::new(
            (0..self.dims.gene_count())
                .map(|_| self.catalog.random_professor(rng))
                .collect(),
        )
    }
}

/// Samples every gene from its subject's qualified set. Scores under the
/// same fitness, converges faster than the uniform factory.
pub struct QualifiedInitialization {
    dims: Dimensions,
    catalog: Catalog,
}

impl QualifiedInitialization {
    pub fn new(dims: Dimensions, catalog: &Catalog) -> Self {
        Self {
            dims,
            catalog: catalog.clone(),
        }
    }
}

impl Initialization for QualifiedInitialization {
    fn generate(&self, rng: &mut StdRng) -> Individual {
        let subjects = self.dims.subjects;
        Individual::new(
            (0..self.dims.gene_count())
                .map(|position| self.catalog.random_qualified(position % subjects, rng))
                .collect(),
        )
    }
}

/// Fixed-capacity archive of the best individuals seen across a run,
/// ordered by fitness ascending and deduplicated by chromosome.
#[derive(Clone, Debug)]
pub struct HallOfFame {
    capacity: usize,
    members: Vec<Individual>,
}

impl HallOfFame {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn update(&mut self, population: &[Individual]) {
        for ind in population {
            debug_assert!(ind.is_evaluated());
            if self.members.len() == self.capacity
                && ind.fitness >= self.members[self.members.len() - 1].fitness
            {
                continue;
            }
            if self
                .members
                .iter()
                .any(|member| member.chromosome == ind.chromosome)
            {
                continue;
            }
            let at = self
                .members
                .partition_point(|member| member.fitness <= ind.fitness);
            self.members.insert(at, ind.clone());
            self.members.truncate(self.capacity);
        }
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn best(&self) -> Option<&Individual> {
        self.members.first()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EvolveParams {
    pub population_size: usize,
    pub generations: usize,
    pub elite_count: usize,
    pub seed: Option<u64>,
}

impl EvolveParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationSize(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::GenerationBudget);
        }
        if self.elite_count == 0 || self.elite_count > self.population_size {
            return Err(ConfigError::EliteCount(self.elite_count));
        }
        Ok(())
    }
}
