//! The capability a declared output wraps.

/// Error type produced by a failing output.
pub type OutputError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Side-effecting action run as part of a transition.
///
/// An output receives the arguments the triggering input was dispatched
/// with, unchanged, and produces one result value. The engine never looks
/// inside an output; it only calls [`Output::invoke`].
///
/// Closures of the shape `Fn(&A) -> Result<R, OutputError>` implement this
/// trait, so most callers never name it. Implement it directly when an
/// output carries its own state.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Output, OutputError};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct Counter(AtomicUsize);
///
/// impl Output<(), usize> for Counter {
///     fn invoke(&self, _args: &()) -> Result<usize, OutputError> {
///         Ok(self.0.fetch_add(1, Ordering::SeqCst) + 1)
///     }
/// }
///
/// let counter = Counter(AtomicUsize::new(0));
/// assert_eq!(counter.invoke(&()).unwrap(), 1);
/// assert_eq!(counter.invoke(&()).unwrap(), 2);
/// ```
pub trait Output<A, R>: Send + Sync {
    /// Run the action with the dispatch arguments.
    fn invoke(&self, args: &A) -> Result<R, OutputError>;
}

impl<A, R, F> Output<A, R> for F
where
    F: Fn(&A) -> Result<R, OutputError> + Send + Sync,
{
    fn invoke(&self, args: &A) -> Result<R, OutputError> {
        self(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<O: Output<String, usize>>(output: &O, args: &String) -> Result<usize, OutputError> {
        output.invoke(args)
    }

    #[test]
    fn closures_are_outputs() {
        let len = |s: &String| -> Result<usize, OutputError> { Ok(s.len()) };
        assert_eq!(run(&len, &"four".to_string()).unwrap(), 4);
    }

    #[test]
    fn failures_pass_through() {
        let fail = |_: &String| -> Result<usize, OutputError> { Err("boom".into()) };
        let err = run(&fail, &String::new()).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
