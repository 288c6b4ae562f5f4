pub mod gesture;
pub mod session;

pub use gesture::GestureState;
pub use session::Session;
