mod delaunay;
mod relax;
mod voronoi;

pub use delaunay::{delaunay_triangles, edges_from_triangles};
pub use relax::{CellCenter, RelaxPoints};
pub use voronoi::voronoi_cells;
