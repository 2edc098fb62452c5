use vessel_core::Observer;

/// Forwards each event to two observers.
///
/// Both observers always see the event. If both return an action, the
/// action from the first observer wins. Nest `Fanout` to combine more.
///
/// # Example
///
/// ```rust
/// use vessel_observers::{Fanout, LogObserver, RecoverFailures};
///
/// let observer = Fanout(LogObserver::new("radius"), RecoverFailures::new());
/// assert_eq!(observer.0.label(), "radius");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fanout<A, B>(pub A, pub B);

impl<E, Act, A, B> Observer<E, Act> for Fanout<A, B>
where
    A: Observer<E, Act>,
    B: Observer<E, Act>,
{
    fn observe(&mut self, event: &E) -> Option<Act> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}
