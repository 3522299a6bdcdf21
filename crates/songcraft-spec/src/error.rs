//! Error-code trait shared by the engine crates.

/// Trait implemented by engine error types to expose stable error codes.
///
/// Codes are part of the public contract: consumers (UI or agent layers)
/// match on them instead of parsing display strings, so a variant's code
/// must never change once published.
pub trait EngineError: std::error::Error {
    /// Returns the stable error code (e.g., "HARMONY_001").
    fn code(&self) -> &'static str;

    /// Returns the engine category this error belongs to (e.g., "harmony").
    fn category(&self) -> &'static str;
}
