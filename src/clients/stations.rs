//! Station and edge listings.

use crate::request::endpoint::{Endpoint, ALL_TYPES};
use crate::request::query::QueryOptions;
use crate::types::representation::Representation;
use crate::{OpenDataHub, OpenDataHubError};
use bon::bon;
use serde_json::Value;

#[bon]
impl OpenDataHub {
    /// Lists stations (`GET /{representation}/{station_types}`).
    ///
    /// # Optional Builder Methods
    ///
    /// * `.representation(..)`: defaults to `flat,node`.
    /// * `.station_types(..)`: comma separated station types, defaults to `*`.
    /// * `.limit(i64)` / `.offset(i64)`: paging, default `200` / `0`.
    /// * `.select(..)`: comma separated fields to return.
    /// * `.where_clause(..)`: filter expression, sent as `where`.
    /// * `.shownull(bool)`: include `null` fields, default `false`.
    /// * `.distinct(bool)`: default `true`.
    /// * `.origin(..)`: attribution tag for the calling application.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use opendatahub::{OpenDataHub, OpenDataHubError};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenDataHubError> {
    /// let client = OpenDataHub::new()?;
    /// let active = client
    ///     .stations()
    ///     .station_types("EChargingStation")
    ///     .where_clause("sactive.eq.true")
    ///     .select("scode,sname,scoordinate")
    ///     .limit(-1)
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn stations(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] station_types: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::Stations {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
            station_types: station_types.unwrap_or_else(|| ALL_TYPES.to_string()),
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

    /// Lists edges, the links between two stations
    /// (`GET /{representation}/{edge_types}`).
    ///
    /// Takes the same optional parameters as [`OpenDataHub::stations`], with
    /// `.edge_types(..)` in place of `.station_types(..)`. The representation
    /// defaults to `flat,edge`.
    #[builder]
    pub async fn edges(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] edge_types: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::Edges {
            representation: representation.unwrap_or_else(|| Representation::FlatEdge.into()),
            edge_types: edge_types.unwrap_or_else(|| ALL_TYPES.to_string()),
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
}

#[cfg(test)]
mod tests {
    use crate::test_support::MockServer;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn stations_with_defaults_sends_no_query() {
        let server = MockServer::start(StatusCode::OK, r#"{"data":[]}"#).await;
        server.client().stations().call().await.unwrap();
        let requests = server.requests().await;
        assert_eq!(requests[0].path, "/v2/flat%2Cnode/%2A");
        assert_eq!(requests[0].query, None);
    }

    #[tokio::test]
    async fn stations_sends_only_changed_params_in_order() {
        let server = MockServer::start(StatusCode::OK, r#"{"data":[]}"#).await;
        server
            .client()
            .stations()
            .station_types("ParkingStation,BikesharingStation")
            .origin("odh-rs")
            .distinct(false)
            .limit(200)
            .offset(20)
            .where_clause("sorigin.eq.\"FAMAS\"")
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(
            requests[0].path_and_query(),
            "/v2/flat%2Cnode/ParkingStation%2CBikesharingStation\
             ?offset=20&where=sorigin.eq.%22FAMAS%22&distinct=false&origin=odh-rs"
        );
    }

    #[tokio::test]
    async fn edges_default_to_flat_edge() {
        let server = MockServer::start(StatusCode::OK, "[]").await;
        let client = server.client();
        client.edges().call().await.unwrap();
        client
            .edges()
            .edge_types("LinkStation")
            .shownull(true)
            .call()
            .await
            .unwrap();
        let requests = server.requests().await;
        assert_eq!(requests[0].path_and_query(), "/v2/flat%2Cedge/%2A");
        assert_eq!(
            requests[1].path_and_query(),
            "/v2/flat%2Cedge/LinkStation?shownull=true"
        );
    }
}
