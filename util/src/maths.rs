//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Limit a value to the range `[min, max]`.
pub fn clamp<T>(value: &T, min: &T, max: &T) -> T 
where
    T: Float
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Apply a symmetric deadband to a value.
///
/// Values whose magnitude is less than or equal to `deadband` become exactly zero, all others are
/// passed through unchanged (no rescaling is performed).
pub fn apply_deadband<T>(value: T, deadband: T) -> T
where
    T: Float
{
    if value.abs() <= deadband {
        T::zero()
    }
    else {
        value
    }
}
