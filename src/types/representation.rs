//! Typed names for the representation path segment understood by the
//! mobility API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side formatting directive sent as the first path segment of most
/// endpoints.
///
/// The first half selects the response layout (`flat` lists or `tree`
/// nested objects), the second half selects the entity family (`node` for
/// stations and measurements, `edge` for edges, `event` for events).
///
/// Every endpoint setter takes `impl Into<String>`, so a plain string such as
/// `"flat,node"` works as well as a variant of this enum.
///
/// # Examples
///
/// ```
/// use opendatahub::Representation;
///
/// assert_eq!(Representation::FlatNode.to_string(), "flat,node");
/// assert_eq!(String::from(Representation::TreeEvent), "tree,event");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    #[serde(rename = "flat,node")]
    FlatNode,
    #[serde(rename = "tree,node")]
    TreeNode,
    #[serde(rename = "flat,edge")]
    FlatEdge,
    #[serde(rename = "tree,edge")]
    TreeEdge,
    #[serde(rename = "flat,event")]
    FlatEvent,
    #[serde(rename = "tree,event")]
    TreeEvent,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::FlatNode => "flat,node",
            Representation::TreeNode => "tree,node",
            Representation::FlatEdge => "flat,edge",
            Representation::TreeEdge => "tree,edge",
            Representation::FlatEvent => "flat,event",
            Representation::TreeEvent => "tree,event",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Representation> for String {
    fn from(value: Representation) -> Self {
        value.as_str().to_string()
    }
}
