mod clients;
mod config;
mod error;
mod open_data_hub;
mod request;
mod response;
mod types;

#[cfg(test)]
mod test_support;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ErrorKind, OpenDataHubError};
pub use open_data_hub::*;
pub use response::ResponseExt;

pub use clients::events::*;
pub use clients::measurements::*;
pub use clients::stations::*;

pub use request::endpoint::{Endpoint, ALL_TYPES};
pub use request::query::{
    build_path, build_query, encode_component, Param, QueryOptions, DEFAULT_LIMIT,
    DEFAULT_OFFSET, DEFAULT_TIMEZONE, FILTER_PARAMS, MEASUREMENT_PARAMS, ORIGIN_PARAMS,
};

pub use types::representation::Representation;
pub use types::time_bound::TimeBound;
