pub mod collision;
pub mod gc;
pub mod movement;
pub mod spawn;

pub use collision::*;
pub use gc::*;
pub use movement::*;
pub use spawn::*;
