use crate::core::strip::strip_dashes;

/// Iterator adapter that strips dashes from each element as the consumer
/// pulls it. Nothing is transformed up front, and re-traversing a restartable
/// source re-executes the transformation.
pub struct StripAll<I> {
    inner: I,
}

impl<I> Iterator for StripAll<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|phrase| strip_dashes(phrase.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One output per input, so the source's bounds carry over.
        self.inner.size_hint()
    }
}

/// Strips dashes from every element of a sequence, lazily.
pub fn strip_all_dashes<I>(phrases: I) -> StripAll<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tracing::trace!("stripping dashes across a sequence");
    StripAll {
        inner: phrases.into_iter(),
    }
}

/// Extension-method form of [`strip_all_dashes`], callable on any iterator of
/// string-like items.
pub trait StripAllDashes: Iterator + Sized {
    fn strip_all_dashes(self) -> StripAll<Self>
    where
        Self::Item: AsRef<str>,
    {
        StripAll { inner: self }
    }
}

impl<I: Iterator> StripAllDashes for I {}
