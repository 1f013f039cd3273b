pub mod ai;
pub mod collision;
pub mod movement;
pub mod spawn;
pub mod trail;

pub use ai::*;
pub use collision::*;
pub use movement::*;
pub use spawn::*;
pub use trail::*;
