pub mod climate;
pub mod health;
pub mod home;

pub use climate::*;
pub use health::*;
pub use home::*;
