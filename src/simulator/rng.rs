//! Seeded 32-bit linear congruential generator.
//!
//! Reproducibility matters more than quality here: the same seed must give
//! the same Monte Carlo estimate on every platform.

use rand_core::{impls, Error, RngCore};

const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Seed 0 is mapped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    #[inline]
    pub fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }

    /// Uniform in `[0, 1)`, one generator step per call.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / TWO_POW_32
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
