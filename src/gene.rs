//! Real number types usable as genes.

use num::traits::{Float, FloatConst, NumAssignOps, NumCast};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Numbers supported as genes (and objective values) by this crate.
///
/// Implemented for every float type, in particular [`f32`] and [`f64`].
pub trait Gene
where
    Self: Float + FloatConst + NumCast + NumAssignOps,
    Self: Send + Sync,
{
    /// Generate number between zero (inclusive) and one (exclusive).
    ///
    /// This method is needed due to Rust issue [#20671]:
    /// it avoids having to add `Standard: Distribution<T>` bounds.
    ///
    /// [#20671]: https://github.com/rust-lang/rust/issues/20671
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
    /// Convert a constant of the formulas into this type.
    fn constant(value: f64) -> Self {
        // infallible for float types
        <Self as NumCast>::from(value).unwrap()
    }
}

impl<T> Gene for T
where
    T: Float + FloatConst + NumCast + NumAssignOps,
    T: Send + Sync,
    Standard: Distribution<T>,
{
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Standard.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::Gene;
    use rand::thread_rng;
    #[test]
    fn test_constant() {
        assert_eq!(f64::constant(418.9828872724339), 418.9828872724339);
        assert_eq!(f32::constant(0.25), 0.25f32);
    }
    #[test]
    fn test_sample_unit() {
        let mut rng = thread_rng();
        for _ in 0..1000 {
            let x = f64::sample_unit(&mut rng);
            assert!((0.0..1.0).contains(&x));
            let y = f32::sample_unit(&mut rng);
            assert!((0.0..1.0).contains(&y));
        }
    }
}
