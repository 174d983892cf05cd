mod cleanup;
mod id;
mod location;
mod seed;
mod user;

pub use self::cleanup::{CleanupBuilder, CleanupEvent};
pub use self::id::{CleanupId, UserId};
pub use self::location::{calculate_distance, GeoCoordinate, GeolocationError, EARTH_RADIUS_KM};
pub use self::seed::{parse_cleanups, seed_cleanups};
pub use self::user::UserProfile;
