//! Edge weight abstraction.

use std::fmt;

/// A value that can label an edge of a [`crate::WeightedGraph`].
///
/// Weights need a total order so spanning-forest rebuilds sort reproducibly,
/// and a [`Weight::ZERO`] reported for the distance between a vertex and
/// itself. Which value means "no edge" is chosen per graph, not per type.
///
/// # Examples
/// ```
/// use hexlink_core::Weight;
///
/// assert_eq!(<u32 as Weight>::ZERO, 0);
/// assert!(!<bool as Weight>::ZERO);
/// ```
pub trait Weight: Copy + Ord + fmt::Debug {
    /// Weight between a vertex and itself.
    const ZERO: Self;
}

macro_rules! impl_weight {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_weight! {
    bool => false,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
}
