use std::iter::FusedIterator;

use crate::{cancel::CancelToken, collection::Collection};

/// A single-pass, pull-driven stream over a snapshot of a [`Collection`].
///
/// Values are produced only when the consumer asks for them, so an
/// abandoned stream holds no pending work. The stream ends when the snapshot
/// is exhausted, when [`close`](Self::close) is called, or when its
/// [`CancelToken`] is cancelled from anywhere.
#[derive(Debug)]
pub struct Stream<T> {
    source: Collection<T>,
    position: usize,
    token: CancelToken,
    closed: bool,
}

impl<T> Stream<T> {
    pub(crate) fn new(source: Collection<T>) -> Self {
        Stream {
            source,
            position: 0,
            token: CancelToken::new(),
            closed: false,
        }
    }

    /// A token that ends this stream when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn close(&mut self) {
        self.token.cancel();
        self.observe_cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.closed || self.token.is_cancelled()
    }

    /// Number of values still to be produced. Zero once closed.
    pub fn remaining(&self) -> usize {
        if self.is_closed() {
            return 0;
        }
        self.source.count() - self.position
    }

    fn observe_cancel(&mut self) {
        if !self.closed {
            self.closed = true;
            let dropped = self.source.count() - self.position;
            if dropped > 0 {
                tracing::debug!(dropped, "stream closed before exhaustion");
            }
        }
    }
}

impl<T> Iterator for Stream<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.token.is_cancelled() {
            self.observe_cancel();
            return None;
        }
        let value = self.source.get(self.position)?.clone();
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Cancellation can end the stream early.
        (0, Some(self.remaining()))
    }
}

impl<T> FusedIterator for Stream<T> where T: Clone {}
