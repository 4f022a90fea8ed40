//! Base trait for reducible state.

/// Marker trait for state owned by the domain store or a screen.
///
/// States should be:
/// - Immutable (reducers consume the old state and return a new one)
/// - Self-contained (everything the view needs to render the slice)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
