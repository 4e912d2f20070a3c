//! Runs the segment queries on two lines and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example segment_queries
//! cargo run --example segment_queries -- "(0, 0, 0)" "(4, 4, 0)" "(0, 4, 0)" "(4, 0, 0)"
//! RUST_LOG=planar=trace cargo run --example segment_queries
//! ```

use planar::{Line2D, Pose2D, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("segment_queries=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let poses = if args.len() == 4 {
        args.iter()
            .map(|a| a.parse::<Pose2D>())
            .collect::<std::result::Result<Vec<_>, _>>()?
    } else {
        vec![
            Pose2D::from_xy(0.0, 0.0),
            Pose2D::from_xy(4.0, 4.0),
            Pose2D::from_xy(0.0, 4.0),
            Pose2D::from_xy(4.0, 0.0),
        ]
    };

    let line1 = Line2D::new(poses[0], poses[1]);
    let line2 = Line2D::new(poses[2], poses[3]);
    info!(%line1, length = line1.length(), angle = line1.angle(), "first line");
    info!(%line2, length = line2.length(), angle = line2.angle(), "second line");

    match Line2D::intersection(&line1, &line2) {
        Some(p) => info!(point = %p, "infinite lines intersect"),
        None => info!("infinite lines are parallel"),
    }
    match Line2D::intersection_within_range(&line1, &line2) {
        Some(p) => info!(point = %p, "segments intersect"),
        None => info!("segments do not intersect"),
    }

    for probe in [line2.start, line2.end] {
        info!(
            %probe,
            to_line = Line2D::distance_from_point_to_line(probe, &line1),
            to_segment = Line2D::distance_from_point_to_line_within_range(probe, &line1),
            "distance from second line's endpoint to first line"
        );
    }

    Ok(())
}
