mod colorize;
mod inscribed_circle;
mod pack_circles;

pub use colorize::{Colorize, ColorizeParams};
pub use inscribed_circle::{InscribedParams, LargestInscribedCircle};
pub use pack_circles::{CirclePacker, PackParams};
