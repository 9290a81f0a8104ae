/// Marker trait for actions a reducer understands.
pub trait Intent: Send + 'static {}
