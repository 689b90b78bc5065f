//! Events (road works, traffic incidents, closures) grouped by event origin.

use crate::request::endpoint::{Endpoint, ALL_TYPES};
use crate::request::query::QueryOptions;
use crate::types::representation::Representation;
use crate::types::time_bound::TimeBound;
use crate::{OpenDataHub, OpenDataHubError};
use bon::bon;
use serde_json::Value;

#[bon]
impl OpenDataHub {
    /// Lists events (`GET /{representation}/{event_origins}`).
    ///
    /// The representation defaults to `flat,event` and `.event_origins(..)`
    /// to `*`. Paging and filtering work as on [`OpenDataHub::stations`].
    #[builder]
    pub async fn events(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] event_origins: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::Events {
            representation: representation.unwrap_or_else(|| Representation::FlatEvent.into()),
            event_origins: event_origins.unwrap_or_else(|| ALL_TYPES.to_string()),
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

    /// Most recent events per origin (`GET /{representation}/{event_origins}/latest`).
    #[builder]
    pub async fn latest_events(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] event_origins: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::LatestEvents {
            representation: representation.unwrap_or_else(|| Representation::FlatEvent.into()),
            event_origins: event_origins.unwrap_or_else(|| ALL_TYPES.to_string()),
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

    /// Events valid at a single point in time
    /// (`GET /{representation}/{event_origins}/{timepoint}`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use opendatahub::{OpenDataHub, OpenDataHubError};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenDataHubError> {
    /// let client = OpenDataHub::new()?;
    /// let now = client
    ///     .events_at_timepoint()
    ///     .event_origins("PROVINCE_BZ")
    ///     .timepoint(Utc::now())
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn events_at_timepoint(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] event_origins: Option<String>,
        #[builder(into)] timepoint: Option<TimeBound>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::EventsAtTimepoint {
            representation: representation.unwrap_or_else(|| Representation::FlatEvent.into()),
            event_origins: event_origins.unwrap_or_else(|| ALL_TYPES.to_string()),
            timepoint: timepoint.unwrap_or_default(),
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

    /// Events valid at any time within an interval
    /// (`GET /{representation}/{event_origins}/{from}/{to}`).
    #[builder]
    pub async fn events_in_interval(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] event_origins: Option<String>,
        #[builder(into)] from: Option<TimeBound>,
        #[builder(into)] to: Option<TimeBound>,
        limit: Option<i64>,
        offset: Option<i64>,
        #[builder(into)] select: Option<String>,
        #[builder(into)] where_clause: Option<String>,
        shownull: Option<bool>,
        distinct: Option<bool>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::EventsInInterval {
            representation: representation.unwrap_or_else(|| Representation::FlatEvent.into()),
            event_origins: event_origins.unwrap_or_else(|| ALL_TYPES.to_string()),
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
            .maybe_origin(origin)
            .build();
        self.fetch(endpoint, options).await
    }
}
