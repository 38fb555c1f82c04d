/// Edge weights and distances.
///
/// `max_value()` plays the role of positive infinity: it is what distance
/// tables start at and what unreachable nodes keep. Additions saturate, so
/// integer weights cannot wrap past it.
pub trait Weight:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
{
    /// Whether this is an actual distance rather than the infinity sentinel.
    ///
    /// ```
    /// use textbook::weight::Weight;
    /// assert!(3u64.finite());
    /// assert!(!u64::MAX.finite());
    /// ```
    #[inline(always)]
    fn finite(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }
}

impl Weight for u32 {}
impl Weight for u64 {}
impl Weight for usize {}
