mod get_movie_info;
mod get_movie_list;
mod get_movies_by_genre;
mod get_movies_by_year;
mod util;

use get_movie_info::*;
use get_movie_list::*;
use get_movies_by_genre::*;
use get_movies_by_year::*;
pub use util::*;
