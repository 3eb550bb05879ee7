use allot_rs::{
    calendar::{BreakWindow, Calendar},
    catalog::Catalog,
    genetics::{
        EliteReinsertion, EvolveParams, GeneticAlgorithm, ShuffleMutation, TimetableEvaluation,
        TournamentSelection, TwoPointCrossover, UniformInitialization,
    },
    schedule,
};
use chrono::{Duration, NaiveTime};
use prettytable::{Cell, Row, Table};

const DAYS_OF_WEEK: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_json(include_str!("../data/institute.json"))?;
    let calendar = Calendar::new(
        wall("08:30")?,
        wall("16:30")?,
        Duration::hours(1),
        &[
            BreakWindow::new(wall("10:30")?, wall("10:45")?),
            BreakWindow::new(wall("12:45")?, wall("13:30")?),
            BreakWindow::new(wall("15:30")?, wall("15:45")?),
        ],
    )?;

    let evaluation = TimetableEvaluation::new(&catalog, &calendar, DAYS_OF_WEEK.len())?;
    let dims = evaluation.dimensions();
    let algo = GeneticAlgorithm::new(
        evaluation,
        UniformInitialization::new(dims, &catalog),
        TournamentSelection::new(3)?,
        TwoPointCrossover::new(0.7)?,
        ShuffleMutation::new(0.1)?,
        EliteReinsertion,
    );
    let params = EvolveParams {
        population_size: 50,
        generations: 2000,
        elite_count: 1,
        seed: Some(1),
    };

    let evolution = algo.evolve(&params, None)?;
    let best = evolution.best();
    let timetable = schedule::decode(&dims, &best.chromosome)?;

    let mut table = Table::new();
    let mut header = vec![Cell::new("Day/Time")];
    header.extend(
        catalog
            .panels()
            .iter()
            .map(|panel| Cell::new(&format!("Panel {}", panel))),
    );
    table.add_row(Row::new(header));

    for (day, day_name) in DAYS_OF_WEEK.iter().enumerate() {
        for (slot, slot_entry) in calendar.slots().iter().enumerate() {
            let label = format!("{} ({})", day_name, slot_entry.start.format("%H:%M"));
            let mut cells = vec![Cell::new(&label)];
            if slot_entry.is_break {
                cells.extend(catalog.panels().iter().map(|_| Cell::new("Break")));
            } else {
                for panel in 0..dims.panels {
                    let assignments: Vec<String> = catalog
                        .subjects()
                        .iter()
                        .enumerate()
                        .map(|(subject, subject_entry)| {
                            let professor = timetable[[day, slot, panel, subject]];
                            format!(
                                "{} -> {}",
                                subject_entry.name,
                                catalog.professor_name(professor)
                            )
                        })
                        .collect();
                    cells.push(Cell::new(&assignments.join("\n")));
                }
            }
            table.add_row(Row::new(cells));
        }
    }

    table.printstd();
    println!("generations run: {}", evolution.best_history.len());
    println!("best fitness score: {}", best.fitness);

    Ok(())
}

fn wall(repr: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(repr, "%H:%M")
}
