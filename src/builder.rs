use crate::{
    collection::Collection,
    error::{Error, Result},
};

/// The mutable counterpart of [`Collection`].
///
/// Every method here changes the builder in place. Call
/// [`build`](Self::build) to freeze the contents into a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionBuilder<T> {
    items: Vec<T>,
}

impl<T> CollectionBuilder<T> {
    pub fn new() -> Self {
        CollectionBuilder { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CollectionBuilder {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    /// Adds `values` to the end, in order.
    pub fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
        self
    }

    /// Adds `values` to the front, in order.
    pub fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.splice(0..0, values);
        self
    }

    /// Overwrites the value at `index`. Fails without modifying anything if
    /// `index` is out of range.
    pub fn safe_set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        *self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::new_index_out_of_range(index, len))? = value;
        Ok(())
    }

    /// Removes the last `count` values and returns them in their original
    /// order. Removes everything if `count` exceeds the length.
    pub fn pop(&mut self, count: usize) -> Collection<T> {
        let at = self.items.len().saturating_sub(count);
        Collection::from(self.items.split_off(at))
    }

    pub fn build(self) -> Collection<T> {
        Collection::from(self.items)
    }
}

impl<T> CollectionBuilder<T>
where
    T: Clone + Default,
{
    /// Writes `value` at `index`, growing with default values if `index` is
    /// past the end.
    ///
    /// # Panics
    /// Panics with a capacity overflow, as [`Vec::resize`] does, if the grown
    /// length cannot be allocated. Use [`safe_set`](Self::safe_set) to write
    /// without growing.
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        if index >= self.items.len() {
            // usize::MAX saturates so that Vec reports the capacity overflow.
            let new_len = index.saturating_add(1);
            tracing::trace!(from = self.items.len(), to = new_len, "growing to set index");
            self.items.resize(new_len, T::default());
        }
        self.items[index] = value;
        self
    }
}

impl<T> Default for CollectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for CollectionBuilder<T> {
    fn from(items: Vec<T>) -> Self {
        CollectionBuilder { items }
    }
}

impl<T> FromIterator<T> for CollectionBuilder<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        CollectionBuilder {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for CollectionBuilder<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_prepend_chain() {
        let mut builder = CollectionBuilder::new();
        builder.append([3, 4]).push(5).prepend([1, 2]);
        assert_eq!(builder.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(builder.build().all(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_grows_with_defaults() {
        let mut builder = CollectionBuilder::from(vec![1, 2]);
        builder.set(0, 10).set(4, 50);
        assert_eq!(builder.as_slice(), &[10, 2, 0, 0, 50]);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn set_at_max_index_reports_capacity_overflow() {
        let mut builder = CollectionBuilder::from(vec![1_u32]);
        builder.set(usize::MAX, 2);
    }

    #[test]
    fn safe_set_at_max_index_is_out_of_range() {
        let mut builder = CollectionBuilder::from(vec![1_u32]);
        assert_eq!(
            builder.safe_set(usize::MAX, 2),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 1
            })
        );
    }

    #[test]
    fn safe_set_rejects_out_of_range() -> anyhow::Result<()> {
        let mut builder = CollectionBuilder::from(vec!["a", "b"]);
        builder.safe_set(1, "z")?;
        assert_eq!(
            builder.safe_set(2, "c"),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(builder.as_slice(), &["a", "z"]);
        Ok(())
    }

    #[test]
    fn pop_removes_tail() {
        let mut builder: CollectionBuilder<i32> = (1..=5).collect();
        let popped = builder.pop(2);
        assert_eq!(popped.all(), &[4, 5]);
        assert_eq!(builder.as_slice(), &[1, 2, 3]);

        let rest = builder.pop(10);
        assert_eq!(rest.all(), &[1, 2, 3]);
        assert!(builder.is_empty());
        assert!(builder.pop(1).empty());
    }

    #[test]
    fn round_trips_through_collection() {
        let original = Collection::from([1, 2, 3]);
        let mut builder = original.to_builder();
        builder.push(4);
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.build().all(), &[1, 2, 3, 4]);
        assert_eq!(original.all(), &[1, 2, 3]);
    }
}
