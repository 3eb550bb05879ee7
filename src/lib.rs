pub mod calendar;
pub mod catalog;
pub mod genetics;
pub mod schedule;

pub use crate::{
    calendar::{BreakWindow, Calendar},
    catalog::{Catalog, ProfId},
    schedule::Dimensions,
};
