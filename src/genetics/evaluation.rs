use super::{ConfigError, Individual};
use crate::{
    calendar::Calendar,
    catalog::{Catalog, ProfId},
    schedule::{self, DimensionError, Dimensions},
};
use rayon::prelude::*;

pub trait Evaluation {
    /// Recomputes the fitness of every individual whose genes changed since
    /// it was last scored.
    fn evaluate(&self, population: &mut [Individual]);
}

const DOUBLE_BOOKING_PENALTY: u32 = 1;
const EXPERTISE_MISMATCH_PENALTY: u32 = 2;

/// Counts constraint violations over all non-break cells of the decoded
/// timetable. Lower is better, zero is conflict-free.
pub struct TimetableEvaluation {
    dims: Dimensions,
    break_slots: Vec<bool>,
    qualified: Vec<bool>,
    roster_len: usize,
}

impl TimetableEvaluation {
    pub fn new(catalog: &Catalog, calendar: &Calendar, days: usize) -> Result<Self, ConfigError> {
        if days == 0 {
            return Err(ConfigError::DayCount);
        }
        let dims = Dimensions {
            days,
            slots: calendar.slots_per_day(),
            panels: catalog.panel_count(),
            subjects: catalog.subject_count(),
        };

        let roster_len = catalog.roster_len();
        let mut qualified = vec![false; dims.subjects * roster_len];
        for (subject, entry) in catalog.subjects().iter().enumerate() {
            for &ProfId(professor) in &entry.qualified {
                qualified[subject * roster_len + professor as usize] = true;
            }
        }

        Ok(Self {
            dims,
            break_slots: calendar.slots().iter().map(|slot| slot.is_break).collect(),
            qualified,
            roster_len,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Pure scoring of a single chromosome. Callable concurrently.
    pub fn evaluate_chromosome(&self, chromosome: &[ProfId]) -> Result<u32, DimensionError> {
        let view = schedule::decode(&self.dims, chromosome)?;
        let mut score = 0;
        let mut seen = vec![false; self.roster_len];

        for day in 0..self.dims.days {
            for slot in 0..self.dims.slots {
                if self.break_slots[slot] {
                    continue;
                }
                // One seen-set per slot, shared across panels: a professor
                // cannot be in two panels at the same time.
                seen.fill(false);
                for panel in 0..self.dims.panels {
                    for subject in 0..self.dims.subjects {
                        let ProfId(professor) = view[[day, slot, panel, subject]];
                        let professor = professor as usize;
                        if seen[professor] {
                            score += DOUBLE_BOOKING_PENALTY;
                        } else {
                            seen[professor] = true;
                        }
                        if !self.qualified[subject * self.roster_len + professor] {
                            score += EXPERTISE_MISMATCH_PENALTY;
                        }
                    }
                }
            }
        }
        Ok(score)
    }

    fn evaluate_individual(&self, ind: &mut Individual) {
        ind.fitness = self
            .evaluate_chromosome(&ind.chromosome)
            .expect("population individuals match the timetable dimensions");
    }
}

impl Evaluation for TimetableEvaluation {
    fn evaluate(&self, population: &mut [Individual]) {
        population
            .par_iter_mut()
            .filter(|ind| !ind.is_evaluated())
            .for_each(|ind| self.evaluate_individual(ind));
    }
}
