use std::error::Error;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Something went wrong while processing an extension DSL script.
///
/// Carries an optional message and an optional underlying cause. Either,
/// both or neither may be given; the value is immutable once built.
#[derive(Debug, Default)]
pub struct ExtensionError {
    message: Option<String>,
    cause: Option<Cause>,
    message_from_cause: bool,
}

/// Name used by the DSL layer for [`ExtensionError`].
pub type AsciidoctorExtensionException = ExtensionError;

/// Misspelled duplicate of [`AsciidoctorExtensionException`].
#[deprecated(note = "use `ExtensionError` (or `AsciidoctorExtensionException`)")]
pub type AsciidoctorExtentionException = ExtensionError;

impl ExtensionError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
            message_from_cause: false,
        }
    }

    pub fn with_message_and_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
            message_from_cause: false,
        }
    }

    /// Wraps `cause`, taking its description as the message.
    pub fn with_cause(cause: impl Into<Cause>) -> Self {
        let cause = cause.into();
        Self {
            message: Some(cause.to_string()),
            cause: Some(cause),
            message_from_cause: true,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Whether the message was copied from the cause by [`Self::with_cause`].
    pub(crate) fn message_from_cause(&self) -> bool {
        self.message_from_cause
    }

    /// This error followed by every transitive `source()`.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(Some(self as &(dyn Error + 'static)), |err| (*err).source())
    }
}

impl std::fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "Extension error"),
        }
    }
}

impl Error for ExtensionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<String> for ExtensionError {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&str> for ExtensionError {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}
