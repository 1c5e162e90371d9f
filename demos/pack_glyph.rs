//! Packs circles into a letter shape on a US-letter page.
//!
//! ```text
//! cargo run --example pack_glyph                  # default seed
//! cargo run --example pack_glyph -- 7             # another seed
//! RUST_LOG=plotgeo=debug cargo run --example pack_glyph
//! ```

use plotgeo::operations::CirclePacker;
use plotgeo::path::{parse_path_data, PathBuilder};
use plotgeo::triangulation::{delaunay_triangles, edges_from_triangles, RelaxPoints};
use plotgeo::{LineSet, Rect, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Points per inch.
const DPI: f64 = 72.0;

/// An outline of the letter "P" with a counter, in font units.
const GLYPH: &str = "M100 700 L100 0 L220 0 L220 280 L380 280 \
                     C520 280 600 380 600 490 C600 600 520 700 380 700 Z \
                     M220 390 L360 390 C430 390 470 430 470 490 S430 590 360 590 L220 590 Z";

fn main() -> plotgeo::Result<()> {
    // Default: WARN for everything, INFO for this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pack_glyph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    let mut rng = StdRng::seed_from_u64(seed);

    let page = Rect::new(Vector::zeros(), Vector::new(8.5 * DPI, 11.0 * DPI));
    let draw_area = page.inset_by(DPI);

    let commands = parse_path_data(GLYPH)?;
    let glyph = PathBuilder::from_commands(&commands)?
        // Font units grow upward, the page grows downward.
        .scale_by_components(Vector::new(1.0, -1.0))
        .center_in(&draw_area)?;
    info!(edges = glyph.len(), area = glyph.signed_area().abs(), "glyph outline");

    if let Some(circle) = glyph.largest_inscribed_circle() {
        info!(
            x = circle.center.x,
            y = circle.center.y,
            r = circle.radius,
            "largest inscribed circle"
        );
    }

    let mut packer = CirclePacker::new(draw_area, glyph.clone(), DPI / 2.0)?;
    let added = packer.pack(400, &mut rng);
    let circles = packer.into_circles();
    let largest = circles.iter().map(|c| c.radius).fold(0.0, f64::max);
    info!(added, largest, "packed circles");

    let centers: Vec<Vector> = circles.iter().map(|c| c.center).collect();
    let relaxed = RelaxPoints::new(draw_area).execute(&centers)?;
    let triangles = delaunay_triangles(&relaxed)?;
    let mesh = edges_from_triangles(&relaxed, &triangles)?;
    info!(triangles = triangles.len(), edges = mesh.len(), "relaxed mesh");

    let outline = LineSet::from(glyph);
    for (pen, pass) in outline.colorize(3, &mut rng)?.iter().enumerate() {
        info!(pen, segments = pass.len(), "outline pass");
    }

    Ok(())
}
