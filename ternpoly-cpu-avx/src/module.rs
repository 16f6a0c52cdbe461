use ternpoly_hal::{
    LANE_BYTES,
    layouts::{Backend, Module},
    oep::ModuleNewImpl,
};

use crate::TernaryAvx;

impl Backend for TernaryAvx {
    fn lane_bytes() -> usize {
        LANE_BYTES
    }

    fn name() -> &'static str {
        "cpu_avx"
    }
}

fn has_avx2() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        std::arch::is_x86_feature_detected!("avx2")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

unsafe impl ModuleNewImpl<Self> for TernaryAvx {
    fn new_impl(n: u64) -> Module<Self> {
        if !has_avx2() {
            tracing::error!(backend = Self::name(), "avx2 not detected");
            panic!("arch must support avx2")
        }

        let module: Module<Self> = Module::new_marker(n);
        tracing::debug!(backend = Self::name(), n, lanes = module.lanes(), "module created");
        module
    }
}
