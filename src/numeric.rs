use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

use num_traits::{AsPrimitive, Num, PrimInt};

use crate::collection::Collection;

mod sealed {
    pub trait Sealed {}
}

/// Element types accepted by [`NumericCollection`].
///
/// Implemented for the signed integers and the floating point types.
pub trait Numeric:
    sealed::Sealed
    + Num
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Display
    + AsPrimitive<f32>
    + AsPrimitive<f64>
{
    /// Addition that never panics. Integers wrap around on overflow.
    fn add_wrapping(self, other: Self) -> Self;
}

macro_rules! impl_numeric {
    (int: $($i:ty),*; float: $($f:ty),*) => {
        $(
            impl sealed::Sealed for $i {}
            impl Numeric for $i {
                fn add_wrapping(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
        $(
            impl sealed::Sealed for $f {}
            impl Numeric for $f {
                fn add_wrapping(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_numeric!(int: i8, i16, i32, i64, isize; float: f32, f64);

/// A [`Collection`] of numbers with arithmetic aggregates.
///
/// Every non-arithmetic operation is available through `Deref` and returns a
/// plain [`Collection`]; wrap the result with `NumericCollection::from` to
/// keep aggregating.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NumericCollection<T>(Collection<T>);

impl<T> NumericCollection<T> {
    pub fn into_inner(self) -> Collection<T> {
        self.0
    }
}

impl<T> NumericCollection<T>
where
    T: Numeric,
{
    /// The total of all values, zero when empty. Integer totals wrap around
    /// on overflow.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |total, &v| total.add_wrapping(v))
    }

    pub fn min(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|min, v| if v < min { v } else { min })
    }

    pub fn max(&self) -> Option<T> {
        self.iter()
            .copied()
            .reduce(|max, v| if v > max { v } else { max })
    }

    /// An alias of [`average64`](Self::average64).
    pub fn average(&self) -> Option<f64> {
        self.average64()
    }

    /// The mean as `f32`. `None` when empty.
    ///
    /// The total is accumulated in `f64` and narrowed once at the end.
    pub fn average32(&self) -> Option<f32> {
        self.average64().map(|mean| mean as f32)
    }

    /// The mean, accumulated and returned as `f64`. `None` when empty.
    pub fn average64(&self) -> Option<f64> {
        if self.empty() {
            return None;
        }
        let total: f64 = self.iter().map(|&v| AsPrimitive::<f64>::as_(v)).sum();
        Some(total / self.count() as f64)
    }
}

impl<T> NumericCollection<T>
where
    T: Numeric + PrimInt,
{
    /// Builds the consecutive integers from `first` to `last`, inclusive.
    ///
    /// The result always starts at `first` and ends at `last`, so it counts
    /// down when `first > last`: `range_inclusive(5, 2)` is `[5, 4, 3, 2]`.
    pub fn range_inclusive(first: T, last: T) -> Self {
        let step_up = first <= last;
        let mut values = Vec::new();
        let mut current = first;
        loop {
            values.push(current);
            if current == last {
                break;
            }
            current = if step_up {
                current + T::one()
            } else {
                current - T::one()
            };
        }
        Self::from(values)
    }
}

impl<T> Deref for NumericCollection<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Collection<T>> for NumericCollection<T> {
    fn from(collection: Collection<T>) -> Self {
        NumericCollection(collection)
    }
}

impl<T> From<Vec<T>> for NumericCollection<T> {
    fn from(values: Vec<T>) -> Self {
        NumericCollection(Collection::from(values))
    }
}

impl<T, const N: usize> From<[T; N]> for NumericCollection<T> {
    fn from(values: [T; N]) -> Self {
        NumericCollection(Collection::from(values))
    }
}

impl<T> From<NumericCollection<T>> for Collection<T> {
    fn from(collection: NumericCollection<T>) -> Self {
        collection.0
    }
}

impl<T> FromIterator<T> for NumericCollection<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        NumericCollection(iter.into_iter().collect())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn range_runs_from_first_to_last(first in -200_i32..200, last in -200_i32..200) {
            let c = NumericCollection::range_inclusive(first, last);
            prop_assert_eq!(c.count() as i32, (first - last).abs() + 1);
            prop_assert_eq!(c.safe_first().copied(), Ok(first));
            prop_assert_eq!(c.safe_last().copied(), Ok(last));
        }

        #[test]
        fn min_max_bound_all_values(data in proptest::collection::vec(-1000_i64..1000, 1..40)) {
            let c = NumericCollection::from(data);
            let (min, max) = (c.min().expect("non-empty"), c.max().expect("non-empty"));
            prop_assert!(c.every(|_, v| min <= *v && *v <= max));
        }
    }
}
