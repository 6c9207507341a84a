use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const LATITUDE_MIN: f64 = -90.0;
    pub const LATITUDE_MAX: f64 = 90.0;
    pub const LONGITUDE_MIN: f64 = -180.0;
    pub const LONGITUDE_MAX: f64 = 180.0;

    /// Half-open check: latitude in [-90, 90), longitude in [-180, 180).
    pub fn in_range(&self) -> bool {
        (Self::LATITUDE_MIN..Self::LATITUDE_MAX).contains(&self.latitude)
            && (Self::LONGITUDE_MIN..Self::LONGITUDE_MAX).contains(&self.longitude)
    }
}

/// Pseudo-random source owned by a single store.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Seeded when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform over the whole `i32` range.
    pub fn next_i32(&mut self) -> i32 {
        self.rng.gen()
    }

    pub fn coordinate(&mut self) -> Coordinate {
        Coordinate {
            latitude: self
                .rng
                .gen_range(Coordinate::LATITUDE_MIN..Coordinate::LATITUDE_MAX),
            longitude: self
                .rng
                .gen_range(Coordinate::LONGITUDE_MIN..Coordinate::LONGITUDE_MAX),
        }
    }
}
