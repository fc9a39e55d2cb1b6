use std::collections::HashMap;

use rayon::prelude::*;
use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::Boundary;
use crate::math::Point2;
use crate::operations::{PlaceSensors, PlacementPolicy};
use crate::projection::UtmProjection;
use crate::sensor::SensorKind;

slotmap::new_key_type! {
    /// Unique identifier for a site in the registry.
    pub struct SiteId;
}

/// A named site with its outline in geographic coordinates
/// (longitude, latitude degrees).
#[derive(Debug, Clone)]
pub struct Site {
    name: String,
    outline: Vec<Point2>,
}

impl Site {
    #[must_use]
    pub fn new(name: impl Into<String>, outline: Vec<Point2>) -> Self {
        Self {
            name: name.into(),
            outline,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn outline(&self) -> &[Point2] {
        &self.outline
    }
}

/// Central store for sites and their computed sensor placements.
///
/// Placements are keyed by `(SiteId, SensorKind)`, so each site carries at
/// most one placement per sensor kind and replanning a kind replaces it.
#[derive(Debug, Default)]
pub struct SiteRegistry {
    sites: SlotMap<SiteId, Site>,
    placements: HashMap<(SiteId, SensorKind), Vec<Vec<Point2>>>,
}

impl SiteRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a site and returns its ID.
    pub fn add_site(&mut self, site: Site) -> SiteId {
        self.sites.insert(site)
    }

    /// Removes a site along with any placements computed for it.
    pub fn remove_site(&mut self, id: SiteId) -> Option<Site> {
        self.placements.retain(|(site, _), _| *site != id);
        self.sites.remove(id)
    }

    #[must_use]
    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Iterates over all sites in the registry.
    pub fn sites(&self) -> impl Iterator<Item = (SiteId, &Site)> {
        self.sites.iter()
    }

    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Coverage rings stored for one site and sensor kind, if planned.
    #[must_use]
    pub fn placement(&self, id: SiteId, kind: SensorKind) -> Option<&[Vec<Point2>]> {
        self.placements.get(&(id, kind)).map(Vec::as_slice)
    }

    fn record(&mut self, id: SiteId, kind: SensorKind, rings: Vec<Vec<Point2>>) {
        self.placements.insert((id, kind), rings);
    }

    fn clear_kind(&mut self, kind: SensorKind) {
        self.placements.retain(|(_, k), _| *k != kind);
    }
}

/// Plans sensor coverage for registered sites.
///
/// Outlines are projected into the planner's UTM zone, sensors are placed
/// along the planar boundary, and the resulting sector footprints are
/// unprojected back to geographic coordinates for storage.
#[derive(Debug, Clone, Copy)]
pub struct SitePlanner {
    projection: UtmProjection,
    policy: PlacementPolicy,
}

impl SitePlanner {
    #[must_use]
    pub fn new(projection: UtmProjection, policy: PlacementPolicy) -> Self {
        Self { projection, policy }
    }

    /// Computes coverage rings for one site with the given sensor kind.
    ///
    /// # Errors
    ///
    /// Fails when the outline leaves the projection's latitude band, has
    /// fewer than two points, or repeats a point exactly.
    pub fn plan(&self, site: &Site, kind: SensorKind) -> Result<Vec<Vec<Point2>>> {
        let planar = self.projection.ring_to_planar(site.outline())?;
        let coverage =
            PlaceSensors::new(Boundary::new(planar), kind.spec(), self.policy).execute()?;
        tracing::debug!("site {}: {} {} sectors", site.name(), coverage.len(), kind);
        let rings = coverage
            .sectors()
            .iter()
            .map(|sector| self.projection.ring_to_geographic(sector.ring()))
            .collect();
        Ok(rings)
    }

    /// Recomputes placements of one sensor kind for every registered site.
    ///
    /// Existing placements of that kind are discarded first, then all sites
    /// are planned in parallel and the results recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if any site fails to plan; nothing from the batch
    /// is recorded in that case.
    pub fn plan_all(&self, registry: &mut SiteRegistry, kind: SensorKind) -> Result<()> {
        registry.clear_kind(kind);
        let planned = {
            let snapshot: Vec<(SiteId, &Site)> = registry.sites().collect();
            snapshot
                .par_iter()
                .map(|&(id, site)| self.plan(site, kind).map(|rings| (id, rings)))
                .collect::<Result<Vec<(SiteId, Vec<Vec<Point2>>)>>>()?
        };
        for (id, rings) in planned {
            registry.record(id, kind, rings);
        }
        tracing::info!(
            "planned {} coverage for {} sites",
            kind,
            registry.site_count()
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // Five-sided test site near the zone 18 central meridian, edges in the
    // 280-300 m range.
    fn pentagon() -> Vec<Point2> {
        vec![
            Point2::new(-77.057_884_576_609_67, 38.872_532_598_928_24),
            Point2::new(-77.054_659_737_567_02, 38.872_910_162_817_03),
            Point2::new(-77.053_155_368_547_91, 38.870_532_677_943_86),
            Point2::new(-77.055_526_224_935_16, 38.868_757_801_256),
            Point2::new(-77.058_440_562_903_93, 38.869_962_065_069_43),
            Point2::new(-77.057_884_576_609_67, 38.872_532_598_928_24),
        ]
    }

    fn planner() -> SitePlanner {
        SitePlanner::new(
            UtmProjection::new(18).unwrap(),
            PlacementPolicy {
                skip_small: true,
                split_on_turns: false,
            },
        )
    }

    #[test]
    fn radar_plan_covers_test_site() {
        let site = Site::new("site1", pentagon());
        let rings = planner().plan(&site, SensorKind::Radar).unwrap();
        assert_eq!(rings.len(), 7);
        assert!(rings.iter().all(|ring| ring.len() == 26));
        assert_eq!(rings[0].first(), rings[0].last());
        // First sector sits on the first outline vertex.
        let apex = rings[0][0];
        assert!((apex.x - -77.057_884_576_609_67).abs() < 1e-8, "x={}", apex.x);
        assert!((apex.y - 38.872_532_598_928_24).abs() < 1e-8, "y={}", apex.y);
    }

    #[test]
    fn camera_plan_is_denser() {
        let site = Site::new("site1", pentagon());
        let rings = planner().plan(&site, SensorKind::Camera).unwrap();
        assert_eq!(rings.len(), 30);
        assert!(rings.iter().all(|ring| ring.len() == 8));
    }

    #[test]
    fn plan_rejects_outline_outside_latitude_band() {
        let site = Site::new(
            "polar",
            vec![
                Point2::new(15.0, 85.0),
                Point2::new(15.1, 85.0),
                Point2::new(15.0, 85.1),
            ],
        );
        assert!(planner().plan(&site, SensorKind::Radar).is_err());
    }

    #[test]
    fn plan_rejects_single_point_outline() {
        let site = Site::new("dot", vec![Point2::new(-77.05, 38.87)]);
        assert!(planner().plan(&site, SensorKind::Radar).is_err());
    }

    #[test]
    fn plan_all_records_every_site() {
        let mut registry = SiteRegistry::new();
        let shifted = pentagon()
            .into_iter()
            .map(|p| Point2::new(p.x + 0.01, p.y))
            .collect();
        let a = registry.add_site(Site::new("site1", pentagon()));
        let b = registry.add_site(Site::new("site2", shifted));
        planner().plan_all(&mut registry, SensorKind::Radar).unwrap();
        assert_eq!(registry.placement(a, SensorKind::Radar).unwrap().len(), 7);
        assert_eq!(registry.placement(b, SensorKind::Radar).unwrap().len(), 7);
        assert!(registry.placement(a, SensorKind::Camera).is_none());
    }

    #[test]
    fn replanning_replaces_only_that_kind() {
        let mut registry = SiteRegistry::new();
        let id = registry.add_site(Site::new("site1", pentagon()));
        let planner = planner();
        planner.plan_all(&mut registry, SensorKind::Radar).unwrap();
        planner.plan_all(&mut registry, SensorKind::Camera).unwrap();
        let radar = registry.placement(id, SensorKind::Radar).unwrap().to_vec();
        planner.plan_all(&mut registry, SensorKind::Radar).unwrap();
        assert_eq!(registry.placement(id, SensorKind::Radar).unwrap(), radar);
        assert_eq!(registry.placement(id, SensorKind::Camera).unwrap().len(), 30);
    }

    #[test]
    fn failed_batch_clears_and_records_nothing() {
        let mut registry = SiteRegistry::new();
        let good = registry.add_site(Site::new("site1", pentagon()));
        let planner = planner();
        planner.plan_all(&mut registry, SensorKind::Radar).unwrap();
        registry.add_site(Site::new(
            "polar",
            vec![
                Point2::new(15.0, 85.0),
                Point2::new(15.1, 85.0),
                Point2::new(15.0, 85.1),
            ],
        ));
        assert!(planner.plan_all(&mut registry, SensorKind::Radar).is_err());
        assert!(registry.placement(good, SensorKind::Radar).is_none());
    }

    #[test]
    fn removing_a_site_drops_its_placements() {
        let mut registry = SiteRegistry::new();
        let id = registry.add_site(Site::new("site1", pentagon()));
        planner().plan_all(&mut registry, SensorKind::Camera).unwrap();
        let removed = registry.remove_site(id).unwrap();
        assert_eq!(removed.name(), "site1");
        assert!(registry.site(id).is_none());
        assert!(registry.placement(id, SensorKind::Camera).is_none());
        assert_eq!(registry.site_count(), 0);
    }
}
