//! Immutable, branch-safe step composition.

use std::fmt;
use std::sync::Arc;

/// An ordered, immutable pipeline of transformation steps.
///
/// A chain always holds at least one step; [`start`] supplies the first
/// and there is no empty constructor. Appending with [`Chain::then`]
/// produces a new chain whose head captures the receiver's shared
/// composition, so the unmodified prefix is shared, never copied, and the
/// receiver remains usable. Cloning a chain shares the same composition.
///
/// The type parameters track the pipeline end to end: `I` is the input
/// type of the first step and `O` the output type of the last.
pub struct Chain<I, O> {
    run: Arc<dyn Fn(I) -> O + Send + Sync>,
}

/// Begin a chain with `step` as its first transformation.
///
/// # Examples
///
/// ```rust
/// let chain = medley::start(|s: &str| s.len());
/// assert_eq!(chain.build()("four"), 4);
/// ```
#[must_use]
pub fn start<I, O, F>(step: F) -> Chain<I, O>
where
    F: Fn(I) -> O + Send + Sync + 'static,
{
    Chain {
        run: Arc::new(step),
    }
}

impl<I, O> Chain<I, O> {
    /// Append `step`, producing a new chain that feeds this chain's output
    /// into it.
    ///
    /// The receiver is left untouched and remains independently
    /// extensible. The step's input type must equal the receiver's output
    /// type; a mismatch is rejected at compile time:
    ///
    /// ```compile_fail
    /// let chain = medley::start(|n: i32| n.to_string());
    /// // The chain now yields `String`, so a `usize` step cannot follow.
    /// let broken = chain.then(|n: usize| n + 1);
    /// ```
    #[must_use]
    pub fn then<N, F>(&self, step: F) -> Chain<I, N>
    where
        F: Fn(O) -> N + Send + Sync + 'static,
        I: 'static,
        O: 'static,
    {
        let prefix = Arc::clone(&self.run);
        Chain {
            run: Arc::new(move |input: I| step(prefix(input))),
        }
    }

    /// Finalise the chain into a single callable.
    ///
    /// The callable applies every step in the order it was appended, every
    /// time it is invoked; it closes over the composed steps and keeps no
    /// other state, so repeated and concurrent invocations are
    /// independent. A fault raised by a step propagates unmodified and
    /// aborts the remaining steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let pipeline = medley::start(|n: i32| n + 1)
    ///     .then(|n| n * 2)
    ///     .then(|n| format!("Value is {n}"))
    ///     .build();
    ///
    /// assert_eq!(pipeline(3), "Value is 8");
    /// ```
    #[must_use]
    pub fn build(&self) -> impl Fn(I) -> O + Send + Sync + use<I, O> {
        let run = Arc::clone(&self.run);
        move |input: I| run(input)
    }
}

impl<I, O> Clone for Chain<I, O> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<I, O> fmt::Debug for Chain<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("input", &std::any::type_name::<I>())
            .field("output", &std::any::type_name::<O>())
            .finish_non_exhaustive()
    }
}
