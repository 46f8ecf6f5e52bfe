pub mod images;
pub mod movie;
pub mod person;
pub mod preferences;
pub mod provider;
pub mod video;

pub use images::{image_url, ImageSize};
pub use movie::{Genre, MovieRecord};
pub use person::{CastMember, Person, PersonCredit};
pub use preferences::{PreferenceFilter, YearRange};
pub use provider::WatchProvider;
pub use video::Video;
