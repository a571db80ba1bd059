//! Ordered collections with chainable, non-mutating operations.
//!
//! [`Collection`] wraps an immutable sequence and offers filtering, mapping,
//! slicing, searching and sampling, each returning a new value.
//! [`NumericCollection`] adds arithmetic aggregates for numeric elements, and
//! [`CollectionBuilder`] covers in-place construction.
//!
//! ```
//! use chainlist::{Collection, JoinMethod, NumericCollection};
//!
//! let words = Collection::from(["first", "second", "third"]);
//! assert_eq!(words.join(&JoinMethod::LIST), "first, second and third");
//!
//! let numbers = NumericCollection::range_inclusive(1, 10);
//! let evens = NumericCollection::from(numbers.filter(|_, v| v % 2 == 0));
//! assert_eq!(evens.sum(), 30);
//! assert_eq!(evens.average32(), Some(6.0));
//! ```

mod builder;
mod cancel;
mod collection;
mod error;
mod join;
mod numeric;
pub mod random;
mod stream;

pub use builder::CollectionBuilder;
pub use cancel::CancelToken;
pub use collection::Collection;
pub use error::{Error, Result};
pub use join::JoinMethod;
pub use numeric::{Numeric, NumericCollection};
pub use random::seeded_rng;
pub use stream::Stream;

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn chained_operations() -> anyhow::Result<()> {
        let words = Collection::from(["lion", "tiger", "bear", "lion", "wolf", "tiger"]);
        let summary = words
            .unique()
            .filter(|_, w| *w != "bear")
            .reverse()
            .join(&JoinMethod::LIST);
        assert_eq!(summary, "wolf, tiger and lion");

        let chunks = NumericCollection::range_inclusive(1, 10)
            .chunk(NonZeroUsize::new(4).ok_or_else(|| anyhow::anyhow!("zero chunk"))?);
        let sums: Vec<i32> = chunks
            .into_iter()
            .map(|chunk| NumericCollection::from(chunk).sum())
            .collect();
        assert_eq!(sums, vec![10, 26, 19]);
        Ok(())
    }
}
