/// Adapt a consumer into a function that always returns `None`.
///
/// Useful where an API expects `Fn(T) -> Option<R>` but the caller only has
/// a side effect to run.
pub fn to_none_returning<T, R, F>(consumer: F) -> impl Fn(T) -> Option<R>
where
    F: Fn(T),
{
    move |value| {
        consumer(value);
        None
    }
}
