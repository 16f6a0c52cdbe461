use ternpoly_hal::{
    LANE_BYTES,
    layouts::{Backend, Module},
    oep::ModuleNewImpl,
};

use crate::TernaryRef;

impl Backend for TernaryRef {
    fn lane_bytes() -> usize {
        LANE_BYTES
    }

    fn name() -> &'static str {
        "cpu_ref"
    }
}

unsafe impl ModuleNewImpl<Self> for TernaryRef {
    fn new_impl(n: u64) -> Module<Self> {
        let module: Module<Self> = Module::new_marker(n);
        tracing::debug!(backend = Self::name(), n, lanes = module.lanes(), "module created");
        module
    }
}
