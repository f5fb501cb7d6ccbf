use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while generating member
/// reports or invoking members of a dynamic type shape. Each variant provides specific
/// context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Caller Errors
/// - [`Error::InvalidArgument`] - A required argument was empty or malformed
/// - [`Error::ArgumentCount`] - Argument arity did not match the member declaration
///
/// ## Member Resolution Errors
/// - [`Error::MemberNotFound`] - No member with the requested name exists
/// - [`Error::MemberNotAccessible`] - Member exists but the required accessor is not public
///
/// ## Invocation Errors
/// - [`Error::MemberFailure`] - The member body or accessor itself failed
///
/// # Examples
///
/// ```rust
/// use memberscope::{Error, runtime::TypeShape};
///
/// let shape = TypeShape::builder("Samples.Empty").build();
/// let mut instance = shape.instantiate();
///
/// match instance.invoke_method("Missing", &[]) {
///     Ok(value) => println!("returned {:?}", value),
///     Err(Error::MemberNotFound(name)) => {
///         eprintln!("no such member: {}", name);
///     }
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Caller Errors
    /// A required argument was empty or malformed.
    ///
    /// This error occurs when a caller-supplied value fails the minimal
    /// well-formedness checks this crate performs: an empty type full name
    /// handed to the report generator, or an empty member name handed to
    /// the invocation API. Provider-side descriptor inconsistencies are
    /// never validated and never raise this error.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// Argument arity did not match the member declaration.
    ///
    /// Raised when a method is invoked with a different number of arguments
    /// than its slot declares. The declared and received counts are carried
    /// for diagnostics.
    #[error("Expected {expected} argument(s), received {actual}")]
    ArgumentCount {
        /// Number of parameters the member declares
        expected: usize,
        /// Number of arguments the caller supplied
        actual: usize,
    },

    // Member Resolution Errors
    /// No member with the requested name exists on the type shape.
    ///
    /// Lookup is exact and case-sensitive; the associated value is the
    /// name that failed to resolve.
    #[error("No member named '{0}' exists on this type")]
    MemberNotFound(String),

    /// The member exists but the required accessor is not public.
    ///
    /// This distinguishes "the property is there but you may not touch it
    /// this way" from [`Error::MemberNotFound`]: a read through a missing
    /// or non-public getter, a write through a missing or non-public
    /// setter, or a call to a non-public method all report this kind.
    #[error("Member '{0}' has no public accessor for this operation")]
    MemberNotAccessible(String),

    // Invocation Errors
    /// The member body or accessor itself failed.
    ///
    /// The failure of the underlying closure is preserved as a message so
    /// callers can tell "the getter blew up" apart from the resolution
    /// errors above.
    ///
    /// # Fields
    ///
    /// * `member` - Name of the member whose body failed
    /// * `message` - Rendered underlying failure
    #[error("Member '{member}' failed - {message}")]
    MemberFailure {
        /// Name of the member whose body failed
        member: String,
        /// Rendered underlying failure
        message: String,
    },

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, typically
    /// raised from inside user-supplied member bodies before the
    /// invocation layer wraps them into [`Error::MemberFailure`].
    #[error("{0}")]
    Error(String),
}
