//! [`Handler`] abstractions.

/// Executable handler.
///
/// Handlers here are synchronous and infallible: every operation they cover
/// is a total transformation over in-memory data, so there is no error
/// channel and nothing to suspend on.
pub trait Handler<Args = ()> {
    /// Type of this [`Handler`] result.
    type Ok;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(&self, args: Args) -> Self::Ok;
}
