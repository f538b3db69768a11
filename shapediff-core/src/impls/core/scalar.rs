//! Scalar type implementations: bool, unit, integers, floats, durations
//!
//! Note: str, char are in char_str.rs

use ::core::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use ::core::time::Duration;

use crate::{Introspect, Scalar, Shape};

macro_rules! impl_introspect_for_scalar {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Introspect for $type {
                fn shape(&self) -> Shape<'_> {
                    Shape::Primitive(Scalar::Other(self))
                }
            }
        )+
    };
}

impl_introspect_for_scalar!(bool, ());
impl_introspect_for_scalar!(u8, u16, u32, u64, u128, usize);
impl_introspect_for_scalar!(i8, i16, i32, i64, i128, isize);
impl_introspect_for_scalar!(f32, f64);
impl_introspect_for_scalar!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
);
impl_introspect_for_scalar!(Duration);
