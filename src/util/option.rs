use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps an [`Option`] that the surrounding container invariants guarantee to be [`Some`].
    ///
    /// Debug builds hit [`unreachable!`] if the guarantee is broken, release builds use
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// # Safety
    /// The caller must ensure that the value is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("container invariant violated"),
            // SAFETY: The caller guarantees that None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
