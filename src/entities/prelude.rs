pub use super::actors::Entity as Actors;
pub use super::actors_bridge::Entity as ActorsBridge;
pub use super::characters::Entity as Characters;
pub use super::characters_bridge::Entity as CharactersBridge;
pub use super::directors::Entity as Directors;
pub use super::directors_bridge::Entity as DirectorsBridge;
pub use super::genres::Entity as Genres;
pub use super::genres_bridge::Entity as GenresBridge;
pub use super::imdb_info::Entity as ImdbInfo;
pub use super::movies::Entity as Movies;
pub use super::predictions::Entity as Predictions;
pub use super::production_countries::Entity as ProductionCountries;
pub use super::production_countries_bridge::Entity as ProductionCountriesBridge;
pub use super::shows::Entity as Shows;
