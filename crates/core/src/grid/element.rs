//! Grid element trait for generic cell values

use num_traits::NumCast;
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell and rendered.
///
/// The estimation layers produce `f64` and `Option<f64>` cells; this trait
/// lets colorizers scan any of them through a single numeric view, with
/// `None` marking cells that hold no estimate.
pub trait GridElement: Copy + Debug + Send + Sync + 'static {
    /// Numeric view of the cell, or `None` if the cell holds no value
    fn to_f64(self) -> Option<f64>;
}

macro_rules! impl_grid_element_float {
    ($t:ty) => {
        impl GridElement for $t {
            fn to_f64(self) -> Option<f64> {
                NumCast::from(self)
            }
        }
    };
}

impl_grid_element_float!(f32);
impl_grid_element_float!(f64);

impl GridElement for Option<f64> {
    fn to_f64(self) -> Option<f64> {
        self
    }
}
