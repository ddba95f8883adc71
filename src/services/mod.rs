mod genres;
mod movies;
mod pagination;
mod ratings;

pub use genres::*;
pub use movies::*;
pub use pagination::*;
pub use ratings::*;
