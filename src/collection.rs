use std::{fmt::Display, num::NonZeroUsize, sync::Arc};

use rand::Rng;

use crate::{
    builder::CollectionBuilder,
    cancel::CancelToken,
    error::{Error, Result},
    join::JoinMethod,
    stream::Stream,
};

/// An immutable, ordered sequence of values.
///
/// Cloning is cheap: the values live in a shared buffer, and sub-views such
/// as [`before`](Self::before), [`after`](Self::after) and
/// [`chunk`](Self::chunk) reference a window of that buffer instead of
/// copying it. Nothing ever writes through a `Collection`, so views can be
/// shared freely. Operations that change contents return a new collection and
/// leave the receiver as it was; use [`CollectionBuilder`] for in-place
/// accumulation.
pub struct Collection<T> {
    items: Arc<[T]>,
    start: usize,
    len: usize,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    fn view(&self, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= self.len);
        Collection {
            items: self.items.clone(),
            start: self.start + start,
            len,
        }
    }

    /// Returns the contents of the collection.
    pub fn all(&self) -> &[T] {
        &self.items[self.start..self.start + self.len]
    }

    /// An alias of [`all`](Self::all).
    pub fn as_slice(&self) -> &[T] {
        self.all()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.all().iter()
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn empty(&self) -> bool {
        self.len == 0
    }

    pub fn not_empty(&self) -> bool {
        !self.empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.all().get(index)
    }

    /// Returns the value at `index`, or [`Error::NoItem`] if `index` is not
    /// below [`count`](Self::count).
    pub fn safe_at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::NoItem)
    }

    pub fn safe_first(&self) -> Result<&T> {
        self.safe_at(0)
    }

    pub fn safe_last(&self) -> Result<&T> {
        self.all().last().ok_or(Error::NoItem)
    }

    pub fn safe_first_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|&(i, v)| predicate(i, v))
            .map(|(_, v)| v)
            .ok_or(Error::NoItem)
    }

    /// Like [`safe_first_where`](Self::safe_first_where), scanning from the
    /// end. Indices passed to the predicate are still positions from the
    /// front.
    pub fn safe_last_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .rev()
            .find(|&(i, v)| predicate(i, v))
            .map(|(_, v)| v)
            .ok_or(Error::NoItem)
    }

    /// Returns true if any value matches. Always false when empty.
    pub fn has<P>(&self, predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.search(predicate).is_some()
    }

    /// Returns true if no value matches. Always true when empty.
    pub fn has_no<P>(&self, predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        !self.has(predicate)
    }

    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(i, v)| predicate(i, v))
            .count()
    }

    /// Returns true if every value matches. Vacuously true when empty.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter().enumerate().all(|(i, v)| predicate(i, v))
    }

    /// Returns the index of the first matching value.
    pub fn search<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .position(|(i, v)| predicate(i, v))
    }

    pub fn safe_search<P>(&self, predicate: P) -> Result<usize>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.search(predicate).ok_or(Error::NoItem)
    }

    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (i, v) in self.iter().enumerate() {
            f(i, v);
        }
    }

    /// Visits values in order until `token` is cancelled.
    ///
    /// The token is checked before each value, never while `f` runs. Returns
    /// the number of values visited.
    pub fn each_cancelable<F>(&self, token: &CancelToken, mut f: F) -> usize
    where
        F: FnMut(usize, &T),
    {
        for (i, v) in self.iter().enumerate() {
            if token.is_cancelled() {
                tracing::debug!(visited = i, total = self.len, "iteration cancelled");
                return i;
            }
            f(i, v);
        }
        self.len
    }

    /// The values at indices `[0, index)`. `index` is clamped to the length.
    pub fn before(&self, index: usize) -> Self {
        self.view(0, index.min(self.len))
    }

    /// The values at indices `[index, count)`. `index` is clamped to the
    /// length.
    pub fn after(&self, index: usize) -> Self {
        let index = index.min(self.len);
        self.view(index, self.len - index)
    }

    pub fn split(&self, index: usize) -> (Self, Self) {
        (self.before(index), self.after(index))
    }

    /// Returns the first `count` values, or the whole collection if it holds
    /// no more than that.
    pub fn first_x(&self, count: usize) -> Self {
        if self.len <= count {
            return self.clone();
        }
        self.view(0, count)
    }

    /// Splits the collection into consecutive groups of `size` values. The
    /// final group holds whatever remains and may be shorter.
    pub fn chunk(&self, size: NonZeroUsize) -> Vec<Self> {
        let size = size.get();
        (0..self.len)
            .step_by(size)
            .map(|start| self.view(start, size.min(self.len - start)))
            .collect()
    }

    /// Splits off the last `count` values.
    ///
    /// Returns `(remaining, popped)`, with `popped` in its original order. If
    /// `count` exceeds the length, everything is popped.
    pub fn pop(&self, count: usize) -> (Self, Self) {
        self.split(self.len.saturating_sub(count))
    }

    pub fn produce_as_stream(&self) -> Stream<T> {
        Stream::new(self.clone())
    }
}

impl<T> Collection<T>
where
    T: Clone,
{
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(i, v)| predicate(i, v))
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, &T) -> T,
    {
        self.iter().enumerate().map(|(i, v)| f(i, v)).collect()
    }

    pub fn append<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.iter().cloned().chain(values).collect()
    }

    pub fn prepend<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().chain(self.iter().cloned()).collect()
    }

    pub fn concat(&self, other: &Collection<T>) -> Self {
        self.append(other.iter().cloned())
    }

    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Returns a copy with `value` at `index`, or [`Error::IndexOutOfRange`]
    /// if `index` is past the end. Unlike [`set`](Self::set), this never
    /// grows the collection.
    pub fn safe_set(&self, index: usize, value: T) -> Result<Self> {
        let mut builder = self.to_builder();
        builder.safe_set(index, value)?;
        Ok(builder.build())
    }

    /// Picks `count` values uniformly at random, with replacement.
    ///
    /// The output is fully determined by the state of `rng`, so a seeded
    /// generator (see [`seeded_rng`](crate::seeded_rng)) gives reproducible
    /// samples. `count` may exceed the length of the collection. Sampling a
    /// non-zero number of values from an empty collection fails with
    /// [`Error::NoItem`].
    pub fn random<R>(&self, rng: &mut R, count: usize) -> Result<Self>
    where
        R: Rng,
    {
        if count == 0 {
            return Ok(Self::new());
        }
        let items = self.all();
        if items.is_empty() {
            return Err(Error::NoItem);
        }
        tracing::trace!(count, population = items.len(), "sampling values");
        Ok((0..count)
            .map(|_| items[rng.random_range(0..items.len())].clone())
            .collect())
    }

    pub fn to_builder(&self) -> CollectionBuilder<T> {
        CollectionBuilder::from(self.to_vec())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.all().to_vec()
    }
}

impl<T> Collection<T>
where
    T: Clone + Default,
{
    /// Returns the value at `index`, or the default value if the index is out
    /// of range. Use [`safe_at`](Self::safe_at) or [`get`](Self::get) to tell
    /// the two apart.
    pub fn at(&self, index: usize) -> T {
        self.get(index).cloned().unwrap_or_default()
    }

    pub fn first(&self) -> T {
        self.at(0)
    }

    pub fn last(&self) -> T {
        self.safe_last().cloned().unwrap_or_default()
    }

    pub fn first_where<P>(&self, predicate: P) -> T
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.safe_first_where(predicate)
            .cloned()
            .unwrap_or_default()
    }

    pub fn last_where<P>(&self, predicate: P) -> T
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.safe_last_where(predicate).cloned().unwrap_or_default()
    }

    /// Returns a copy with `value` at `index`. If `index` is past the end,
    /// the gap is filled with default values.
    ///
    /// # Panics
    /// Panics if the grown length cannot be allocated, see
    /// [`CollectionBuilder::set`].
    pub fn set(&self, index: usize, value: T) -> Self {
        let mut builder = self.to_builder();
        builder.set(index, value);
        builder.build()
    }
}

impl<T> Collection<T>
where
    T: Clone + PartialEq,
{
    /// Removes repeated values, keeping the first occurrence of each.
    pub fn unique(&self) -> Self {
        let mut seen: Vec<T> = Vec::new();
        for v in self.iter() {
            if !seen.contains(v) {
                seen.push(v.clone());
            }
        }
        Self::from(seen)
    }

    /// Returns the values that have no equal in `other`.
    pub fn diff(&self, other: &Collection<T>) -> Self {
        self.filter(|_, v| !other.all().contains(v))
    }
}

impl<T> Collection<T>
where
    T: Display,
{
    pub fn join(&self, method: &JoinMethod) -> String {
        method.join_items(self.iter())
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Collection {
            items: self.items.clone(),
            start: self.start,
            len: self.len,
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Collection<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Collection<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.all() == other.all()
    }
}

impl<T> Eq for Collection<T> where T: Eq {}

impl<T> std::hash::Hash for Collection<T>
where
    T: std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.all().hash(state);
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        self.all()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Collection {
            items: Arc::from(items),
            start: 0,
            len,
        }
    }
}

impl<T> From<&[T]> for Collection<T>
where
    T: Clone,
{
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Collection;

    impl<T> Serialize for Collection<T>
    where
        T: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T> Deserialize<'de> for Collection<T>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<T>::deserialize(deserializer).map(Collection::from)
        }
    }
}
