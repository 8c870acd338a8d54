use crate::domain::model::Person;

/// Lazy, order-preserving filter over person records. The predicate runs only
/// when the consumer pulls the next element, so a failing predicate surfaces
/// at that pull and not before.
pub struct FilterPeople<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> Iterator for FilterPeople<I, P>
where
    I: Iterator<Item = Person>,
    P: FnMut(&Person) -> bool,
{
    type Item = Person;

    fn next(&mut self) -> Option<Person> {
        let predicate = &mut self.predicate;
        self.inner.find(|person| predicate(person))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between none and all of the remaining source elements.
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Returns the subsequence of people for which the predicate holds, in the
/// original relative order.
pub fn filter_people<I, P>(people: I, predicate: P) -> FilterPeople<I::IntoIter, P>
where
    I: IntoIterator<Item = Person>,
    P: FnMut(&Person) -> bool,
{
    tracing::trace!("filtering a sequence of people");
    FilterPeople {
        inner: people.into_iter(),
        predicate,
    }
}
