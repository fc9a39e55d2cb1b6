//! Plans Radar and Camera coverage for a sample site and writes the results
//! as WKT to stdout and KML files in the working directory.
//!
//! Usage:
//! ```text
//! cargo run --example plan
//! RUST_LOG=perimetra=debug cargo run --example plan
//! ```

use perimetra::formats::{kml, wkt};
use perimetra::operations::PlacementPolicy;
use perimetra::projection::UtmProjection;
use perimetra::sensor::SensorKind;
use perimetra::site::{Site, SitePlanner, SiteRegistry};

const SITE1_WKT: &str = "POLYGON (( \
    -77.05788457660967 38.87253259892824 100, \
    -77.05465973756702 38.87291016281703 100, \
    -77.05315536854791 38.87053267794386 100, \
    -77.05552622493516 38.868757801256 100, \
    -77.05844056290393 38.86996206506943 100, \
    -77.05788457660967 38.87253259892824 100))";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for perimetra.
    // Override with RUST_LOG (e.g. RUST_LOG=perimetra=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("perimetra=info".parse().unwrap_or_default())
        .add_directive("plan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut registry = SiteRegistry::new();
    registry.add_site(Site::new("site1", wkt::parse_polygon(SITE1_WKT)?));

    let planner = SitePlanner::new(
        UtmProjection::new(18)?,
        PlacementPolicy {
            skip_small: true,
            split_on_turns: false,
        },
    );
    for kind in [SensorKind::Radar, SensorKind::Camera] {
        planner.plan_all(&mut registry, kind)?;
    }

    for (id, site) in registry.sites() {
        for kind in [SensorKind::Radar, SensorKind::Camera] {
            let Some(rings) = registry.placement(id, kind) else {
                continue;
            };
            println!("{} {}: {} sectors", site.name(), kind, rings.len());
            println!("{}", wkt::write_multipolygon(rings));

            let path = format!("{}_{}.kml", site.name(), kind);
            let document =
                kml::write_site_document(site.name(), &kind.to_string(), site.outline(), rings);
            std::fs::write(&path, document)?;
            tracing::info!("wrote {path}");
        }
    }
    Ok(())
}
