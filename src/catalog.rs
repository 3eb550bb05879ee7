use rand::{rngs::StdRng, Rng};
use serde::Deserialize;
use std::convert::TryFrom;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("(de)serialization error")]
    Serde(#[from] serde_json::Error),
    #[error("no subjects defined")]
    NoSubjects,
    #[error("no panels defined")]
    NoPanels,
    #[error("subject {0} has no qualified professors")]
    NoQualifiedProfessors(String),
    #[error("roster of {0} professors does not fit the gene encoding")]
    RosterTooLarge(usize),
}

/// Index into the catalog roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfId(pub u16);

#[derive(Clone, Debug)]
pub struct Subject {
    pub name: String,
    pub qualified: Vec<ProfId>,
}

/// Static teaching data: ordered subjects and panels plus the roster of
/// professors interned from the per-subject qualification lists.
#[derive(Clone, Debug)]
pub struct Catalog {
    subjects: Vec<Subject>,
    panels: Vec<String>,
    roster: Vec<String>,
}

#[derive(Deserialize)]
struct RawSubject {
    name: String,
    professors: Vec<String>,
}

#[derive(Deserialize)]
struct RawCatalog {
    panels: Vec<String>,
    subjects: Vec<RawSubject>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Catalog> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Catalog::new(
            raw.panels,
            raw.subjects
                .into_iter()
                .map(|subject| (subject.name, subject.professors))
                .collect(),
        )
    }

    pub fn new(panels: Vec<String>, subjects: Vec<(String, Vec<String>)>) -> Result<Catalog> {
        if subjects.is_empty() {
            return Err(Error::NoSubjects);
        }
        if panels.is_empty() {
            return Err(Error::NoPanels);
        }

        let mut roster: Vec<String> = Vec::new();
        let mut interned = Vec::with_capacity(subjects.len());
        for (name, professors) in subjects {
            if professors.is_empty() {
                return Err(Error::NoQualifiedProfessors(name));
            }
            let mut qualified = Vec::with_capacity(professors.len());
            for professor in professors {
                let index = match roster.iter().position(|known| *known == professor) {
                    Some(index) => index,
                    None => {
                        roster.push(professor);
                        roster.len() - 1
                    }
                };
                let id = ProfId(
                    u16::try_from(index).map_err(|_| Error::RosterTooLarge(roster.len()))?,
                );
                if !qualified.contains(&id) {
                    qualified.push(id);
                }
            }
            interned.push(Subject { name, qualified });
        }

        Ok(Catalog {
            subjects: interned,
            panels,
            roster,
        })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    pub fn professor_name(&self, id: ProfId) -> &str {
        &self.roster[id.0 as usize]
    }

    pub fn is_qualified(&self, subject: usize, professor: ProfId) -> bool {
        self.subjects[subject].qualified.contains(&professor)
    }

    /// Uniform sample over the whole roster, regardless of subject.
    pub fn random_professor(&self, rng: &mut StdRng) -> ProfId {
        ProfId(rng.gen_range(0..self.roster.len()) as u16)
    }

    /// Uniform sample over the professors qualified for `subject`.
    pub fn random_qualified(&self, subject: usize, rng: &mut StdRng) -> ProfId {
        let qualified = &self.subjects[subject].qualified;
        qualified[rng.gen_range(0..qualified.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Error, ProfId};
    use rand::{rngs::StdRng, SeedableRng};

    fn sample() -> Catalog {
        Catalog::new(
            vec!["A".into(), "B".into()],
            vec![
                ("Alg".into(), vec!["Ada".into(), "Grace".into()]),
                ("Os".into(), vec!["Grace".into(), "Linus".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_interning_dedupes_across_subjects() {
        let catalog = sample();
        assert_eq!(catalog.roster_len(), 3);
        assert_eq!(catalog.professor_name(ProfId(0)), "Ada");
        assert_eq!(catalog.professor_name(ProfId(1)), "Grace");
        // Grace keeps the same id in both subjects.
        assert_eq!(catalog.subjects()[0].qualified, vec![ProfId(0), ProfId(1)]);
        assert_eq!(catalog.subjects()[1].qualified, vec![ProfId(1), ProfId(2)]);
    }

    #[test]
    fn test_is_qualified() {
        let catalog = sample();
        assert!(catalog.is_qualified(0, ProfId(0)));
        assert!(!catalog.is_qualified(0, ProfId(2)));
        assert!(catalog.is_qualified(1, ProfId(2)));
    }

    #[test]
    fn test_random_sampling_stays_in_range() {
        let catalog = sample();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let ProfId(id) = catalog.random_professor(&mut rng);
            assert!((id as usize) < catalog.roster_len());
            let sampled = catalog.random_qualified(1, &mut rng);
            assert!(catalog.is_qualified(1, sampled));
        }
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            Catalog::new(vec!["A".into()], vec![]),
            Err(Error::NoSubjects)
        ));
        assert!(matches!(
            Catalog::new(vec![], vec![("Alg".into(), vec!["Ada".into()])]),
            Err(Error::NoPanels)
        ));
        assert!(matches!(
            Catalog::new(vec!["A".into()], vec![("Alg".into(), vec![])]),
            Err(Error::NoQualifiedProfessors(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"{
                "panels": ["A"],
                "subjects": [{"name": "Alg", "professors": ["Ada"]}]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.panel_count(), 1);
        assert_eq!(catalog.subject_count(), 1);
        assert_eq!(catalog.roster_len(), 1);
    }
}
