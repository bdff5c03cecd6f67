pub mod deposit;
pub mod develop;
pub mod etch;
pub mod liftoff;
pub mod planarize;

use nanofab_core::ExposurePattern;

/// A column takes part in a step when there is no pattern or the pattern exposes it.
pub(crate) fn column_enabled(pattern: Option<&ExposurePattern>, x: usize, y: usize) -> bool {
    pattern.map_or(true, |p| p.exposes(x, y))
}
