use std::marker::PhantomData;

/// A compute backend: a marker type whose `oep` implementations carry the kernels.
pub trait Backend: Sized + Sync + Send {
    /// Width in bytes of the vector registers the backend's kernels operate on.
    /// The ring degree of every [`Module`] of this backend must be a multiple of it.
    fn lane_bytes() -> usize;

    /// Human-readable backend name, used in logs and benchmark labels.
    fn name() -> &'static str;
}

/// Fixes the ring `Z[X]/(X^N + 1)` for a backend.
///
/// `N` is injected once at construction and shared by every operation issued
/// through the module; the module itself holds no mutable state.
pub struct Module<B: Backend> {
    n: u64,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    /// Creates a module for ring degree `n`.
    ///
    /// # Panics
    /// Panics if `n` is not a power of two or not a multiple of [`Backend::lane_bytes`].
    #[inline]
    pub fn new_marker(n: u64) -> Self {
        assert!(n.is_power_of_two(), "n must be a power of two, got {n}");
        assert!(
            (n as usize).is_multiple_of(B::lane_bytes()),
            "n={n} must be a multiple of the {} lane width ({} bytes)",
            B::name(),
            B::lane_bytes()
        );
        Self {
            n,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n as usize
    }

    /// Number of lanes spanned by one polynomial.
    #[inline]
    pub fn lanes(&self) -> usize {
        self.n() / B::lane_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lane32;

    impl Backend for Lane32 {
        fn lane_bytes() -> usize {
            32
        }

        fn name() -> &'static str {
            "lane32"
        }
    }

    #[test]
    fn module_geometry() {
        let module: Module<Lane32> = Module::new_marker(512);
        assert_eq!(module.n(), 512);
        assert_eq!(module.lanes(), 16);
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn module_rejects_non_power_of_two() {
        let _ = Module::<Lane32>::new_marker(96);
    }

    #[test]
    #[should_panic(expected = "lane width")]
    fn module_rejects_sub_lane_degree() {
        let _ = Module::<Lane32>::new_marker(16);
    }
}
