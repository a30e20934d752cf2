//! core small types

use std::fmt::{Debug, Display};

/// Dense node handle, assigned in first-appearance order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// Integer edge weight.
///
/// Shortest-path results are only meaningful for non-negative weights. Signed
/// implementations exist for convenience; the precondition is not checked.
pub trait Weight: Copy + Ord + Debug + Display + Send + Sync + 'static {
    fn zero() -> Self;

    /// Sum of two weights, or `None` when it is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, usize, i32, i64);
