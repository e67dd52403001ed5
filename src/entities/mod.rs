pub mod prelude;

pub mod actors;
pub mod actors_bridge;
pub mod characters;
pub mod characters_bridge;
pub mod directors;
pub mod directors_bridge;
pub mod genres;
pub mod genres_bridge;
pub mod imdb_info;
pub mod movies;
pub mod predictions;
pub mod production_countries;
pub mod production_countries_bridge;
pub mod shows;
