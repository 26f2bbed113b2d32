pub mod model;
pub mod resolvers;
pub mod schema;
pub mod source;

pub const EVENT_TYPE: &str = "Event";

pub const NAME_FIELD: &str = "name";
pub const LOCATION_FIELD: &str = "location";
pub const START_DATE_FIELD: &str = "startDate";
pub const END_DATE_FIELD: &str = "endDate";
pub const URL_FIELD: &str = "url";
pub const SLUG_FIELD: &str = "slug";
