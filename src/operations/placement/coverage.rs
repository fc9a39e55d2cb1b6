use crate::geometry::Sector;

/// Ordered collection of the sectors a placement walk has emitted.
///
/// Sectors stay in emission order and are never merged or deduplicated;
/// later walks probe them in exactly this order.
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    sectors: Vec<Sector>,
}

impl Coverage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, sector: Sector) {
        self.sectors.push(sector);
    }

    /// Emitted sectors in placement order.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Consumes the coverage, yielding the sectors.
    #[must_use]
    pub fn into_sectors(self) -> Vec<Sector> {
        self.sectors
    }
}
