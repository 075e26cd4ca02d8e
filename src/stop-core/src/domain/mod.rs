mod ais;
mod position;
mod stop;

pub use ais::*;
pub use position::*;
pub use stop::*;
