mod cie76;
mod cie94;
mod ciede2000;
mod cmc;
mod equality;
mod math;

// difference
pub use cie76::delta_e_cie76;
pub use cie94::delta_e_cie94;
pub use ciede2000::delta_e_ciede2000;
pub use cmc::delta_e_cmc;

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// math
pub(crate) use math::{chroma, hue, FloatExt};
