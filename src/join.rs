//! Formatting rules for gluing stringified elements together.

use std::{borrow::Cow, fmt::Display, fmt::Write};

/// Describes how a sequence of values is joined into a single string.
///
/// `between` separates every adjacent pair. When `last` is set, it replaces
/// `between` for the final pair only, which gives list-style output such as
/// `"a, b and c"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinMethod {
    between: Cow<'static, str>,
    last: Option<Cow<'static, str>>,
}

impl JoinMethod {
    /// `"1, 2, 3"`
    pub const COMMA_SEPARATED: JoinMethod = JoinMethod {
        between: Cow::Borrowed(", "),
        last: None,
    };

    /// `"1, 2 and 3"`
    pub const LIST: JoinMethod = JoinMethod {
        between: Cow::Borrowed(", "),
        last: Some(Cow::Borrowed(" and ")),
    };

    pub fn new(between: impl Into<Cow<'static, str>>) -> Self {
        JoinMethod {
            between: between.into(),
            last: None,
        }
    }

    /// Sets the separator used between the last two values. An empty
    /// separator clears it.
    pub fn with_last(mut self, last: impl Into<Cow<'static, str>>) -> Self {
        let last = last.into();
        self.last = if last.is_empty() { None } else { Some(last) };
        self
    }

    pub fn between(&self) -> &str {
        &self.between
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref().filter(|s| !s.is_empty())
    }

    fn final_separator(&self) -> &str {
        self.last().unwrap_or(self.between())
    }

    pub fn join_items<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Display,
    {
        let items = items.into_iter();
        let count = items.len();
        let mut result = String::new();
        for (i, item) in items.enumerate() {
            // Writing into a String cannot fail.
            let _ = write!(result, "{item}");
            if i + 1 == count {
                break;
            }
            if i + 2 == count {
                result.push_str(self.final_separator());
            } else {
                result.push_str(&self.between);
            }
        }
        result
    }
}

impl Default for JoinMethod {
    fn default() -> Self {
        Self::COMMA_SEPARATED
    }
}
