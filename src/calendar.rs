use chrono::{Duration, NaiveTime};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("slot duration must be positive")]
    NonPositiveSlotDuration,
    #[error("day end must come after day start")]
    InvertedDay,
    #[error("slot duration does not divide the working day")]
    UnalignedSlotDuration,
    #[error("break window end must come after its start")]
    InvertedBreakWindow,
}

/// A half-open [start, end) window during which no teaching takes place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl BreakWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveTime,
    pub is_break: bool,
}

/// The per-day teaching grid. Identical for every working day of the week.
#[derive(Clone, Debug)]
pub struct Calendar {
    slots: Vec<Slot>,
}

impl Calendar {
    /// Derives the ordered slot sequence between `day_start` and `day_end`.
    /// A slot is a break iff its start time falls within any window.
    pub fn new(
        day_start: NaiveTime,
        day_end: NaiveTime,
        slot_duration: Duration,
        breaks: &[BreakWindow],
    ) -> Result<Calendar> {
        if slot_duration <= Duration::zero() {
            return Err(Error::NonPositiveSlotDuration);
        }
        let day_length = day_end.signed_duration_since(day_start);
        if day_length <= Duration::zero() {
            return Err(Error::InvertedDay);
        }
        if day_length.num_seconds() % slot_duration.num_seconds() != 0 {
            return Err(Error::UnalignedSlotDuration);
        }
        if breaks.iter().any(|window| window.end <= window.start) {
            return Err(Error::InvertedBreakWindow);
        }

        let count = (day_length.num_seconds() / slot_duration.num_seconds()) as usize;
        let slots = (0..count)
            .map(|i| {
                let start = day_start + slot_duration * (i as i32);
                Slot {
                    start,
                    is_break: breaks.iter().any(|window| window.contains(start)),
                }
            })
            .collect();

        Ok(Calendar { slots })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_per_day(&self) -> usize {
        self.slots.len()
    }

    pub fn is_break(&self, slot: usize) -> bool {
        self.slots[slot].is_break
    }
}
