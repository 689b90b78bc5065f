//! Stations combined with their data types and measurements.
//!
//! The latest, historical and metadata endpoints also honour `.timezone(..)`
//! (default `UTC`), which controls how timestamps in the response are
//! rendered.

use crate::request::endpoint::{Endpoint, ALL_TYPES};
use crate::request::query::QueryOptions;
use crate::types::representation::Representation;
use crate::types::time_bound::TimeBound;
use crate::{OpenDataHub, OpenDataHubError};
use bon::bon;
use serde_json::Value;

#[bon]
impl OpenDataHub {
    /// Lists stations together with the data types they provide
    /// (`GET /{representation}/{station_types}/{data_types}`).
    ///
    /// Optional parameters match [`OpenDataHub::stations`], plus
    /// `.data_types(..)` (default `*`).
    #[builder]
    pub async fn stations_with_data_types(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] station_types: Option<String>,
        #[builder(into)] data_types: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::StationsWithDataTypes {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
            station_types: station_types.unwrap_or_else(|| ALL_TYPES.to_string()),
            data_types: data_types.unwrap_or_else(|| ALL_TYPES.to_string()),
        };
        let options = QueryOptions::builder()
            .maybe_limit(limit)
            .maybe_offset(offset)
            .maybe_select(select)
            .maybe_where_clause(where_clause)
            .maybe_shownull(shownull)
            .maybe_distinct(distinct)
            .maybe_origin(origin)
            .build();
        self.fetch(endpoint, options).await
    }

    /// Fetches the most recent measurement per station and data type
    /// (`GET /{representation}/{station_types}/{data_types}/latest`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use opendatahub::{OpenDataHub, OpenDataHubError};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenDataHubError> {
    /// let client = OpenDataHub::new()?;
    /// let free_spots = client
    ///     .latest_measurements()
    ///     .station_types("ParkingStation")
    ///     .data_types("free")
    ///     .select("mvalue,mvalidtime,scode")
    ///     .timezone("Europe/Rome")
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn latest_measurements(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] station_types: Option<String>,
        #[builder(into)] data_types: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] timezone: Option<String>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::LatestMeasurements {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
            station_types: station_types.unwrap_or_else(|| ALL_TYPES.to_string()),
            data_types: data_types.unwrap_or_else(|| ALL_TYPES.to_string()),
        };
        let options = QueryOptions::builder()
            .maybe_limit(limit)
            .maybe_offset(offset)
            .maybe_select(select)
            .maybe_where_clause(where_clause)
            .maybe_shownull(shownull)
            .maybe_distinct(distinct)
            .maybe_timezone(timezone)
            .maybe_origin(origin)
            .build();
        self.fetch(endpoint, options).await
    }

    /// Fetches measurements recorded between two points in time
    /// (`GET /{representation}/{station_types}/{data_types}/{from}/{to}`).
    ///
    /// `.from(..)` and `.to(..)` accept strings or `chrono` values, see
    /// [`TimeBound`]. An unset bound is sent as an empty path segment, which
    /// the server rejects; set both.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use opendatahub::{OpenDataHub, OpenDataHubError};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenDataHubError> {
    /// let client = OpenDataHub::new()?;
    /// let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let counts = client
    ///     .historical_measurements()
    ///     .station_types("BluetoothStation")
    ///     .from(day)
    ///     .to(day.succ_opt().unwrap())
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn historical_measurements(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] station_types: Option<String>,
        #[builder(into)] data_types: Option<String>,
        #[builder(into)] from: Option<TimeBound>,
        #[builder(into)] to: Option<TimeBound>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] timezone: Option<String>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::HistoricalMeasurements {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
            station_types: station_types.unwrap_or_else(|| ALL_TYPES.to_string()),
            data_types: data_types.unwrap_or_else(|| ALL_TYPES.to_string()),
            from: from.unwrap_or_default(),
            to: to.unwrap_or_default(),
        };
        let options = QueryOptions::builder()
            .maybe_limit(limit)
            .maybe_offset(offset)
            .maybe_select(select)
            .maybe_where_clause(where_clause)
            .maybe_shownull(shownull)
            .maybe_distinct(distinct)
            .maybe_timezone(timezone)
            .maybe_origin(origin)
            .build();
        self.fetch(endpoint, options).await
    }

    /// Fetches the history of station metadata changes between two points in
    /// time (`GET /{representation}/{station_types}/metadata/{from}/{to}`).
    #[builder]
    pub async fn metadata_history(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] station_types: Option<String>,
        #[builder(into)] from: Option<TimeBound>,
        #[builder(into)] to: Option<TimeBound>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] timezone: Option<String>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::MetadataHistory {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
            station_types: station_types.unwrap_or_else(|| ALL_TYPES.to_string()),
            from: from.unwrap_or_default(),
            to: to.unwrap_or_default(),
        };
        let options = QueryOptions::builder()
            .maybe_limit(limit)
            .maybe_offset(offset)
            .maybe_select(select)
            .maybe_where_clause(where_clause)
            .maybe_shownull(shownull)
            .maybe_distinct(distinct)
            .maybe_timezone(timezone)
            .maybe_origin(origin)
            .build();
        self.fetch(endpoint, options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::MockServer;
    use crate::Representation;
    use axum::http::StatusCode;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn historical_measurements_path_matches_service_layout() {
        let server = MockServer::start(StatusCode::OK, r#"{"x":1}"#).await;
        let value = server
            .client()
            .historical_measurements()
            .representation("flat,node")
            .station_types("BluetoothStation")
            .data_types("*")
            .from("2023-01-01")
            .to("2023-01-02")
            .call()
            .await
            .unwrap();
        assert_eq!(value, json!({"x": 1}));

        let requests = server.requests().await;
        assert_eq!(
            requests[0].path,
            "/v2/flat%2Cnode/BluetoothStation/%2A/2023-01-01/2023-01-02"
        );
        assert_eq!(requests[0].query, None);
    }

    #[tokio::test]
    async fn repeated_calls_issue_identical_requests() {
        let server = MockServer::start(StatusCode::OK, "{}").await;
        let client = server.client();
        for _ in 0..2 {
            client
                .historical_measurements()
                .station_types("BluetoothStation")
                .from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
                .to(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap())
                .limit(10)
                .call()
                .await
                .unwrap();
        }
        let requests = server.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path_and_query(), requests[1].path_and_query());
        assert_eq!(
            requests[0].path_and_query(),
            "/v2/flat%2Cnode/BluetoothStation/%2A/2023-01-01/2023-01-02?limit=10"
        );
    }

    #[tokio::test]
    async fn latest_measurements_carries_timezone() {
        let server = MockServer::start(StatusCode::OK, "{}").await;
        server
            .client()
            .latest_measurements()
            .representation(Representation::TreeNode)
            .station_types("ParkingStation")
            .data_types("free")
            .timezone("Europe/Rome")
            .origin("odh-rs")
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(
            requests[0].path_and_query(),
            "/v2/tree%2Cnode/ParkingStation/free/latest?timezone=Europe%2FRome&origin=odh-rs"
        );
    }

    #[tokio::test]
    async fn utc_timezone_is_not_sent() {
        let server = MockServer::start(StatusCode::OK, "{}").await;
        server
            .client()
            .latest_measurements()
            .timezone("UTC")
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(requests[0].path_and_query(), "/v2/flat%2Cnode/%2A/%2A/latest");
    }

    #[tokio::test]
    async fn stations_with_data_types_path() {
        let server = MockServer::start(StatusCode::OK, "{}").await;
        server
            .client()
            .stations_with_data_types()
            .station_types("EnvironmentStation")
            .data_types("NO2 - Ossidi di azoto")
            .select("tname")
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(
            requests[0].path_and_query(),
            "/v2/flat%2Cnode/EnvironmentStation/NO2%20-%20Ossidi%20di%20azoto?select=tname"
        );
    }

    #[tokio::test]
    async fn metadata_history_uses_literal_segment() {
        let server = MockServer::start(StatusCode::OK, "{}").await;
        let from = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        server
            .client()
            .metadata_history()
            .station_types("EChargingStation")
            .from(from)
            .to("2023-02-01")
            .shownull(true)
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(
            requests[0].path_and_query(),
            "/v2/flat%2Cnode/EChargingStation/metadata/\
             2023-01-01T00%3A00%3A00.000%2B0000/2023-02-01?shownull=true"
        );
    }
}
