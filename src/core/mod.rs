pub mod classifier;
pub mod constants;
pub mod landmarks;
pub mod morph;
pub mod session;
pub mod shapes;
pub mod throttle;

pub use classifier::*;
pub use landmarks::*;
pub use morph::*;
pub use session::*;
pub use shapes::*;
pub use throttle::*;
