pub mod genres;
pub mod hello_world;
pub mod movies;
pub mod ratings;

pub use genres::*;
pub use hello_world::*;
pub use movies::*;
pub use ratings::*;
