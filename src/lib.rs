pub mod error;

pub use error::extension_error::ExtensionError;
#[allow(deprecated)]
pub use error::extension_error::{AsciidoctorExtensionException, AsciidoctorExtentionException};
pub use error::report::{log, report};

pub type Result<T> = std::result::Result<T, ExtensionError>;
