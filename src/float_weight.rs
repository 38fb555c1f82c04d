use std::fmt::Debug;

use derive_more::Display;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::weight::Weight;

/// A totally-ordered float usable as a [`Weight`].
///
/// Unlike the integer weights, its `max_value()` is a genuine IEEE `+∞`, so
/// unreachable nodes really do report infinity.
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatWeight<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Weight for FloatWeight<F>
where
    FloatWeight<F>: Debug + Eq + Ord + UpperBounded,
    F: FloatCore + std::fmt::Display,
{
}

impl<F> FloatWeight<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self(OrderedFloat::infinity())
    }
}

impl<F> std::ops::Add for FloatWeight<F>
where
    OrderedFloat<F>: std::ops::Add<OrderedFloat<F>, Output = OrderedFloat<F>>,
    F: FloatCore,
{
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<F> std::ops::AddAssign for FloatWeight<F>
where
    OrderedFloat<F>: std::ops::AddAssign,
    F: FloatCore,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<F> SaturatingAdd for FloatWeight<F>
where
    OrderedFloat<F>: std::ops::Add<OrderedFloat<F>, Output = OrderedFloat<F>>,
    F: FloatCore,
{
    // Floats saturate on their own: `x + ∞ == ∞`.
    fn saturating_add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<F> Zero for FloatWeight<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn zero() -> Self {
        Self(OrderedFloat::zero())
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0 == OrderedFloat::zero()
    }
}

impl<F> UpperBounded for FloatWeight<F>
where
    F: FloatCore,
{
    fn max_value() -> Self {
        Self(OrderedFloat::<F>::infinity())
    }
}

// `Eq` and `Ord` cannot be derived (`F` itself is only `PartialOrd`), so the
// total order is forwarded to `OrderedFloat`.
impl<F> PartialEq for FloatWeight<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}
impl<F> Eq for FloatWeight<F> where F: FloatCore {}

impl<F> PartialOrd for FloatWeight<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.0.cmp(&other.0))
    }
}
impl<F> Ord for FloatWeight<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
