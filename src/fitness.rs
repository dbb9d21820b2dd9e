//! Objective vectors of length one.

use crate::gene::Gene;

use std::cmp::Ordering;
use std::ops::Deref;

/// Fitness of an individual: an objective vector with a single objective
///
/// Engines working with several objectives treat the fitness as a slice of
/// objective values (see the [`Deref`] implementation); single objective
/// engines use [`Fitness::value`]. Smaller values are better.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Debug)]
pub struct Fitness<T>(
    /// Objective values
    pub [T; 1],
);

impl<T> Fitness<T> {
    /// Wrap a single objective value
    pub const fn new(value: T) -> Self {
        Fitness([value])
    }
}

impl<T: Copy> Fitness<T> {
    /// The objective value
    pub fn value(&self) -> T {
        self.0[0]
    }
}

impl<T: Gene> Fitness<T> {
    /// Compare fitness values ([`Less`] means better)
    ///
    /// NaN is ordered after every number and equal to itself, so sorting
    /// by this comparison moves invalid evaluations to the end.
    ///
    /// [`Less`]: Ordering::Less
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let a = self.value();
        let b = other.value();
        a.partial_cmp(&b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()).then(Ordering::Equal))
    }
}

impl<T> Deref for Fitness<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsRef<[T]> for Fitness<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<[T; 1]> for Fitness<T> {
    fn from(values: [T; 1]) -> Self {
        Fitness(values)
    }
}

impl<T> From<Fitness<T>> for [T; 1] {
    fn from(fitness: Fitness<T>) -> Self {
        fitness.0
    }
}

#[cfg(test)]
mod tests {
    use super::Fitness;
    use std::cmp::Ordering;
    #[test]
    fn test_objective_slice() {
        let fitness = Fitness::new(2.5);
        assert_eq!(fitness.len(), 1);
        assert_eq!(fitness[0], 2.5);
        assert_eq!(fitness.value(), 2.5);
        let values: [f64; 1] = fitness.into();
        assert_eq!(values, [2.5]);
        assert_eq!(Fitness::from([2.5]), fitness);
    }
    #[test]
    fn test_cmp_value() {
        let one = Fitness::new(1.0);
        let two = Fitness::new(2.0);
        let nan = Fitness::new(f64::NAN);
        assert_eq!(one.cmp_value(&two), Ordering::Less);
        assert_eq!(two.cmp_value(&one), Ordering::Greater);
        assert_eq!(one.cmp_value(&one), Ordering::Equal);
        assert_eq!(one.cmp_value(&nan), Ordering::Less);
        assert_eq!(nan.cmp_value(&two), Ordering::Greater);
        assert_eq!(nan.cmp_value(&nan), Ordering::Equal);
    }
    #[test]
    fn test_sort_by_cmp_value() {
        let mut fitnesses = vec![
            Fitness::new(3.0),
            Fitness::new(f64::NAN),
            Fitness::new(-1.0),
            Fitness::new(0.5),
        ];
        fitnesses.sort_by(Fitness::cmp_value);
        assert_eq!(fitnesses[0].value(), -1.0);
        assert_eq!(fitnesses[1].value(), 0.5);
        assert_eq!(fitnesses[2].value(), 3.0);
        assert!(fitnesses[3].value().is_nan());
    }
}
