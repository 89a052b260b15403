pub mod extension_error;
pub mod report;
