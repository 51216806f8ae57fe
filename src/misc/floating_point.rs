use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Scalar type of parameters and geometry (f32, f64).
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a f64 constant into the field type.
    fn from_f64_constant(value: f64) -> Self {
        nalgebra::convert(value)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
