//! Seeded generator reproducing the legacy draw sequence
//!
//! Historical scores were produced by a Mersenne Twister (MT19937) seeded via
//! `init_by_array([seed])` and consumed through three draw primitives: a 53-bit
//! uniform float, a Kinderman-Monahan normal variate and a rejection-sampled
//! bounded integer. All three are reproduced here bit for bit. The generator is
//! a plain value threaded through scoring by `&mut`; there is no global state.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 generator with legacy-compatible draw primitives
#[derive(Clone)]
pub struct LegacyRng {
    state: [u32; N],
    index: usize,
}

impl std::fmt::Debug for LegacyRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyRng")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl LegacyRng {
    /// Seed the generator the way the legacy tool seeded it from an integer
    pub fn from_seed(seed: u32) -> Self {
        let mut rng = Self::init_genrand(19_650_218);
        rng.init_by_array(&[seed]);
        rng
    }

    fn init_genrand(s: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = s;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn init_by_array(&mut self, key: &[u32]) {
        let mt = &mut self.state;
        let mut i = 1usize;
        let mut j = 0usize;

        for _ in 0..N.max(key.len()) {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }

        mt[0] = UPPER_MASK;
        self.index = N;
    }

    fn twist(&mut self) {
        let mt = &mut self.state;
        for k in 0..N {
            let y = (mt[k] & UPPER_MASK) | (mt[(k + 1) % N] & LOWER_MASK);
            let mut next = mt[(k + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            mt[k] = next;
        }
        self.index = 0;
    }

    /// Next tempered 32-bit output word
    pub fn next_word(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision (two words)
    pub fn random(&mut self) -> f64 {
        let a = f64::from(self.next_word() >> 5);
        let b = f64::from(self.next_word() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Normal variate via the Kinderman-Monahan ratio-of-uniforms method
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        let magic = 4.0 * (-0.5f64).exp() / 2.0f64.sqrt();
        loop {
            let u1 = self.random();
            let u2 = 1.0 - self.random();
            let z = magic * (u1 - 0.5) / u2;
            let zz = z * z / 4.0;
            if zz <= -u2.ln() {
                return mu + z * sigma;
            }
        }
    }

    /// Uniform integer in `[0, n)`; `n` must be positive
    ///
    /// Draws the top `bit_length(n)` bits of a word and rejects values `>= n`.
    pub fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "below() needs a positive bound");
        let bits = u32::BITS - n.leading_zeros();
        loop {
            let r = self.next_word() >> (32 - bits);
            if r < n {
                return r;
            }
        }
    }

    /// Uniform integer in `[low, high]`; requires `low <= high`
    pub fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        low + self.below(high - low + 1)
    }
}
