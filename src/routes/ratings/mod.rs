mod get_movie_ratings;
mod util;

use get_movie_ratings::*;
pub use util::*;
