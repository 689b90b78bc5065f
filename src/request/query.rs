//! Path and query-string assembly.
//!
//! Every optional query parameter has a documented default. A parameter is
//! only written to the query string when its value is non-empty and differs
//! from that default. Which parameters an endpoint accepts, and in which
//! order they are written, is declared by a static [`Param`] table per
//! endpoint family.

use bon::Builder;

pub const DEFAULT_LIMIT: i64 = 200;
pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A named query parameter understood by the mobility API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Limit,
    Offset,
    Select,
    Where,
    ShowNull,
    Distinct,
    Timezone,
    Origin,
}

/// Parameters of endpoints that only take an attribution tag.
pub const ORIGIN_PARAMS: &[Param] = &[Param::Origin];

/// Parameters of the listing endpoints (stations, edges, events).
pub const FILTER_PARAMS: &[Param] = &[
    Param::Limit,
    Param::Offset,
    Param::Select,
    Param::Where,
    Param::ShowNull,
    Param::Distinct,
    Param::Origin,
];

/// Parameters of the measurement endpoints, which also honour a timezone.
pub const MEASUREMENT_PARAMS: &[Param] = &[
    Param::Limit,
    Param::Offset,
    Param::Select,
    Param::Where,
    Param::ShowNull,
    Param::Distinct,
    Param::Timezone,
    Param::Origin,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamValue<'a> {
    Int(i64),
    Text(&'a str),
    Flag(bool),
}

impl ParamValue<'_> {
    fn render(&self) -> String {
        match self {
            ParamValue::Int(value) => value.to_string(),
            ParamValue::Text(value) => value.to_string(),
            ParamValue::Flag(value) => value.to_string(),
        }
    }
}

impl Param {
    pub fn name(&self) -> &'static str {
        match self {
            Param::Limit => "limit",
            Param::Offset => "offset",
            Param::Select => "select",
            Param::Where => "where",
            Param::ShowNull => "shownull",
            Param::Distinct => "distinct",
            Param::Timezone => "timezone",
            Param::Origin => "origin",
        }
    }

    fn default_value(&self) -> ParamValue<'static> {
        match self {
            Param::Limit => ParamValue::Int(DEFAULT_LIMIT),
            Param::Offset => ParamValue::Int(DEFAULT_OFFSET),
            Param::Select | Param::Where | Param::Origin => ParamValue::Text(""),
            Param::ShowNull => ParamValue::Flag(false),
            Param::Distinct => ParamValue::Flag(true),
            Param::Timezone => ParamValue::Text(DEFAULT_TIMEZONE),
        }
    }
}

/// Values for the optional query parameters of a request.
///
/// Every field starts at the API's documented default, and a field at its
/// default is left out of the query string. Endpoints ignore parameters they
/// do not declare (for example `timezone` outside the measurement
/// endpoints).
///
/// # Examples
///
/// ```
/// use opendatahub::QueryOptions;
///
/// let options = QueryOptions::builder()
///     .limit(10)
///     .where_clause("sactive.eq.true")
///     .build();
/// assert_eq!(options.offset, 0);
/// assert!(options.distinct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct QueryOptions {
    /// Maximum number of records; `-1` disables the limit server-side.
    #[builder(default = DEFAULT_LIMIT)]
    pub limit: i64,
    #[builder(default = DEFAULT_OFFSET)]
    pub offset: i64,
    /// Comma separated list of fields to return.
    #[builder(into, default)]
    pub select: String,
    /// Filter expression, sent as the `where` parameter.
    #[builder(into, default)]
    pub where_clause: String,
    /// Include fields whose value is `null`.
    #[builder(default = false)]
    pub shownull: bool,
    #[builder(default = true)]
    pub distinct: bool,
    #[builder(into, default = DEFAULT_TIMEZONE.to_string())]
    pub timezone: String,
    /// Attribution tag identifying the calling application.
    #[builder(into, default)]
    pub origin: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions::builder().build()
    }
}

impl QueryOptions {
    fn value(&self, param: Param) -> ParamValue<'_> {
        match param {
            Param::Limit => ParamValue::Int(self.limit),
            Param::Offset => ParamValue::Int(self.offset),
            Param::Select => ParamValue::Text(&self.select),
            Param::Where => ParamValue::Text(&self.where_clause),
            Param::ShowNull => ParamValue::Flag(self.shownull),
            Param::Distinct => ParamValue::Flag(self.distinct),
            Param::Timezone => ParamValue::Text(&self.timezone),
            Param::Origin => ParamValue::Text(&self.origin),
        }
    }
}

/// Percent-encodes a single path segment or query value.
///
/// Only the unreserved characters `A-Z a-z 0-9 - _ . ~` are kept, so `/`,
/// `,` and `*` inside a value are escaped too.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Joins independently encoded segments into an absolute path.
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> String {
    let encoded: Vec<String> = segments
        .iter()
        .map(|segment| encode_component(segment.as_ref()))
        .collect();
    format!("/{}", encoded.join("/"))
}

/// Renders the parameters of `table` that are set to a non-default,
/// non-empty value, in table order. Returns an empty string when nothing
/// needs to be sent, otherwise a string starting with `?`.
pub fn build_query(options: &QueryOptions, table: &[Param]) -> String {
    let pairs: Vec<String> = table
        .iter()
        .filter_map(|param| {
            let value = options.value(*param);
            if value == param.default_value() {
                return None;
            }
            let rendered = value.render();
            if rendered.is_empty() {
                return None;
            }
            Some(format!("{}={}", param.name(), encode_component(&rendered)))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
