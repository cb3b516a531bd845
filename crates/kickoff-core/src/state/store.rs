use super::events::Event;
use super::types::Command;

/// Trait for dispatching roster commands.
///
/// Decouples command definitions from their execution. The CLI dispatches
/// through [`super::CoreStore`]; tests can substitute an in-memory store.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Idempotency**: Commands are not idempotent (`AddPlayer` twice adds two
///   players, `IssueYellowCard` twice books two cards).
/// - **Error handling**: Implementations define their own error type. Errors
///   should distinguish user errors (invalid input) from system errors (IO failure).
/// - **Events**: On success, dispatch returns a `Vec<Event>` describing what
///   changed.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
