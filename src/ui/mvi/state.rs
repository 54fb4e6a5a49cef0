/// Marker trait for UI state.
///
/// States are replaced, never mutated in place, and carry everything the
/// view needs to draw them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
