//! Declarative descriptions of the mobility API endpoints.

use crate::request::query::{
    build_path, build_query, Param, QueryOptions, FILTER_PARAMS, MEASUREMENT_PARAMS,
    ORIGIN_PARAMS,
};
use crate::types::time_bound::TimeBound;

/// Wildcard accepted by every type filter segment.
pub const ALL_TYPES: &str = "*";

/// One REST resource of the mobility API, with the values of its path
/// segments filled in.
///
/// An `Endpoint` knows its ordered path segments and which query parameters
/// it accepts. It can render the exact relative path a request would use
/// without touching the network.
///
/// # Examples
///
/// ```
/// use opendatahub::{Endpoint, QueryOptions};
///
/// let endpoint = Endpoint::HistoricalMeasurements {
///     representation: "flat,node".to_string(),
///     station_types: "BluetoothStation".to_string(),
///     data_types: "*".to_string(),
///     from: "2023-01-01".into(),
///     to: "2023-01-02".into(),
/// };
/// assert_eq!(
///     endpoint.request_path(&QueryOptions::default()),
///     "/flat%2Cnode/BluetoothStation/%2A/2023-01-01/2023-01-02"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    EntryPoints,
    Categories {
        representation: String,
    },
    Stations {
        representation: String,
        station_types: String,
    },
    Edges {
        representation: String,
        edge_types: String,
    },
    StationsWithDataTypes {
        representation: String,
        station_types: String,
        data_types: String,
    },
    LatestMeasurements {
        representation: String,
        station_types: String,
        data_types: String,
    },
    HistoricalMeasurements {
        representation: String,
        station_types: String,
        data_types: String,
        from: TimeBound,
        to: TimeBound,
    },
    MetadataHistory {
        representation: String,
        station_types: String,
        from: TimeBound,
        to: TimeBound,
    },
    Events {
        representation: String,
        event_origins: String,
    },
    LatestEvents {
        representation: String,
        event_origins: String,
    },
    EventsAtTimepoint {
        representation: String,
        event_origins: String,
        timepoint: TimeBound,
    },
    EventsInInterval {
        representation: String,
        event_origins: String,
        from: TimeBound,
        to: TimeBound,
    },
}

impl Endpoint {
    /// The raw, unencoded path segments in request order.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::EntryPoints => vec![],
            Endpoint::Categories { representation } => vec![representation.as_str()],
            Endpoint::Stations {
                representation,
                station_types,
            } => vec![representation.as_str(), station_types.as_str()],
            Endpoint::Edges {
                representation,
                edge_types,
            } => vec![representation.as_str(), edge_types.as_str()],
            Endpoint::StationsWithDataTypes {
                representation,
                station_types,
                data_types,
            } => vec![representation.as_str(), station_types.as_str(), data_types.as_str()],
            Endpoint::LatestMeasurements {
                representation,
                station_types,
                data_types,
            } => vec![
                representation.as_str(),
                station_types.as_str(),
                data_types.as_str(),
                "latest",
            ],
            Endpoint::HistoricalMeasurements {
                representation,
                station_types,
                data_types,
                from,
                to,
            } => vec![
                representation.as_str(),
                station_types.as_str(),
                data_types.as_str(),
                from.as_str(),
                to.as_str(),
            ],
            Endpoint::MetadataHistory {
                representation,
                station_types,
                from,
                to,
            } => vec![
                representation.as_str(),
                station_types.as_str(),
                "metadata",
                from.as_str(),
                to.as_str(),
            ],
            Endpoint::Events {
                representation,
                event_origins,
            } => vec![representation.as_str(), event_origins.as_str()],
            Endpoint::LatestEvents {
                representation,
                event_origins,
            } => vec![representation.as_str(), event_origins.as_str(), "latest"],
            Endpoint::EventsAtTimepoint {
                representation,
                event_origins,
                timepoint,
            } => vec![representation.as_str(), event_origins.as_str(), timepoint.as_str()],
            Endpoint::EventsInInterval {
                representation,
                event_origins,
                from,
                to,
            } => vec![representation.as_str(), event_origins.as_str(), from.as_str(), to.as_str()],
        }
    }

    /// The query parameters this endpoint accepts, in the order they are written.
    pub fn params(&self) -> &'static [Param] {
        match self {
            Endpoint::EntryPoints | Endpoint::Categories { .. } => ORIGIN_PARAMS,
            Endpoint::LatestMeasurements { .. }
            | Endpoint::HistoricalMeasurements { .. }
            | Endpoint::MetadataHistory { .. } => MEASUREMENT_PARAMS,
            Endpoint::Stations { .. }
            | Endpoint::Edges { .. }
            | Endpoint::StationsWithDataTypes { .. }
            | Endpoint::Events { .. }
            | Endpoint::LatestEvents { .. }
            | Endpoint::EventsAtTimepoint { .. }
            | Endpoint::EventsInInterval { .. } => FILTER_PARAMS,
        }
    }

    pub fn path(&self) -> String {
        build_path(&self.segments())
    }

    /// Path plus query string, relative to the client's base URL.
    pub fn request_path(&self, options: &QueryOptions) -> String {
        format!("{}{}", self.path(), build_query(options, self.params()))
    }
}
