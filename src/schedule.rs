use crate::catalog::ProfId;
use ndarray::ArrayView4;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chromosome holds {actual} genes, timetable dimensions require {expected}")]
pub struct DimensionError {
    pub expected: usize,
    pub actual: usize,
}

/// Extent of the timetable along each axis, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub days: usize,
    pub slots: usize,
    pub panels: usize,
    pub subjects: usize,
}

impl Dimensions {
    pub fn gene_count(&self) -> usize {
        self.days * self.slots * self.panels * self.subjects
    }

    /// Day-major position of a (day, slot, panel, subject) cell in the flat
    /// gene sequence. `decode` applies the same ordering.
    pub fn linear_index(&self, day: usize, slot: usize, panel: usize, subject: usize) -> usize {
        ((day * self.slots + slot) * self.panels + panel) * self.subjects + subject
    }
}

/// Read-only 4-d view over a flat gene sequence.
pub fn decode<'a>(
    dims: &Dimensions,
    genes: &'a [ProfId],
) -> Result<ArrayView4<'a, ProfId>, DimensionError> {
    ArrayView4::from_shape((dims.days, dims.slots, dims.panels, dims.subjects), genes).map_err(
        |_| DimensionError {
            expected: dims.gene_count(),
            actual: genes.len(),
        },
    )
}
