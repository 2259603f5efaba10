/// Errors raised when building [`Parameters`](crate::Parameters) from an
/// external source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("missing parameter `{name}`")]
    Missing { name: &'static str },

    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
