/// Marker trait for reducer state.
///
/// Cloned into queued updates and compared in tests, so it has to be cheap
/// to copy around and have a sensible starting value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
