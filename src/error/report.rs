use super::extension_error::ExtensionError;

/// Renders `err` and its causes as `outer: inner: ...`.
///
/// The cause of an error built with [`ExtensionError::with_cause`] is not
/// printed again, since its text is already the message.
pub fn report(err: &ExtensionError) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut skip_next = false;

    for link in err.chain() {
        if !std::mem::take(&mut skip_next) {
            parts.push(link.to_string());
        }
        skip_next = link
            .downcast_ref::<ExtensionError>()
            .is_some_and(ExtensionError::message_from_cause);
    }

    parts.join(": ")
}

pub fn log(err: &ExtensionError) {
    tracing::error!(error = %report(err), "extension DSL processing failed");
}
