use num_traits as num;

/// This trait represents the operations the codec must be able to perform on the underlying
/// counter type of a count array. The `ToPrimitive` trait is needed to narrow a count to the
/// `i64` wire representation during encoding. The `FromPrimitive` to convert a decoded value
/// back into a count. Partial ordering is used to detect zero counts when building runs.
pub trait Counter:
    num::Num + num::ToPrimitive + num::FromPrimitive + Copy + PartialOrd<Self>
{
    /// Counter as a u64.
    fn as_u64(&self) -> u64;
}

impl Counter for u8 {
    #[inline]
    fn as_u64(&self) -> u64 {
        *self as u64
    }
}

impl Counter for u16 {
    #[inline]
    fn as_u64(&self) -> u64 {
        *self as u64
    }
}

impl Counter for u32 {
    #[inline]
    fn as_u64(&self) -> u64 {
        *self as u64
    }
}

impl Counter for u64 {
    #[inline]
    fn as_u64(&self) -> u64 {
        *self
    }
}
