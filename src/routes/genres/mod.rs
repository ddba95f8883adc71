mod get_genre_list;
mod util;

use get_genre_list::*;
pub use util::*;
