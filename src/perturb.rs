//! Sources of the random offsets that make the output look handwritten.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// A source of zero-mean normally distributed offsets. Every call is an
/// independent sample; callers pick the standard deviation per channel.
///
/// Implementations must return exactly `0.0` for a `sigma` of zero, so that a
/// disabled channel never moves anything.
pub trait Perturbation {
    fn sample(&mut self, sigma: f32) -> f32;
}

impl<P: Perturbation + ?Sized> Perturbation for &mut P {
    fn sample(&mut self, sigma: f32) -> f32 {
        (**self).sample(sigma)
    }
}

/// Gaussian offsets drawn from a seedable generator.
#[derive(Debug, Clone)]
pub struct Gaussian {
    rng: StdRng,
}

impl Gaussian {
    /// A reproducible source: the same seed gives the same sequence of samples
    pub fn seeded(seed: u64) -> Gaussian {
        Gaussian {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system
    pub fn from_entropy() -> Gaussian {
        Gaussian {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Perturbation for Gaussian {
    fn sample(&mut self, sigma: f32) -> f32 {
        if !(sigma.is_finite() && sigma > 0.0) {
            return 0.0;
        }
        let z: f32 = self.rng.sample(StandardNormal);
        z * sigma
    }
}

/// Never perturbs anything, whatever the sigma.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unperturbed;

impl Perturbation for Unperturbed {
    fn sample(&mut self, _sigma: f32) -> f32 {
        0.0
    }
}
