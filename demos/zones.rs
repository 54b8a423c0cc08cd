//! Scatter plantation points around a site and report the zones DBSCAN finds.
//!
//! Run with `RUST_LOG=debug cargo run --example zones` to see engine events.

use grove::{Clustering, Dbscan, NeighborIndex, SectorScatter, Site};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> grove::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let site = Site::new((300.0, 300.0), 40.0);
    let scatter = SectorScatter::new(4);
    let points = scatter.generate_seeded(500, &site, Some(42))?;
    info!(points = points.len(), max_radius = scatter.max_radius(&site), "generated");

    for (eps, min_pts) in [(8.0, 4), (15.0, 4), (25.0, 6)] {
        let model = Dbscan::new(eps, min_pts).with_index(NeighborIndex::Grid);
        let result = model.fit(&points)?;
        info!(
            eps,
            min_pts,
            zones = result.n_clusters(),
            noise = result.noise.len(),
            "clustered"
        );

        for zone in result.summaries(&points)? {
            println!(
                "  zone {:2}: {:3} points, centroid ({:6.1}, {:6.1}), radius {:5.1}",
                zone.cluster, zone.size, zone.centroid.x, zone.centroid.y, zone.radius
            );
        }
    }

    Ok(())
}
