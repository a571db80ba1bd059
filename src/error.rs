#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A lookup or search found nothing to return.
    #[error("item not found")]
    NoItem,

    /// A bounded write targeted an index past the end of the collection.
    #[error("index out of range: index {index} but length is {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn new_index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
