//! Diagnostic lines for swallowed bus faults.
//!
//! With the `defmt` feature the line goes to `defmt::warn!`. Unit tests collect
//! it in a per-thread buffer (`mock::take_diag`). Without `defmt` a target
//! build compiles it to nothing.

macro_rules! diag {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        $crate::mock::record_diag(std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        core::mem::drop(core::format_args!($($arg)*));
    }};
}
