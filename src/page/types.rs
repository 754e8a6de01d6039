//! Request and response types for the page endpoint

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Request
// ============================================================================

/// Body of a page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Fingerprint of the query whose results are paginated
    pub hash: String,
    /// Cursor of the page to fetch
    pub token: String,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(hash: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            token: token.into(),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// One field of a record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub position: i64,
}

/// Column descriptions, in the order the server sent them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(deserialize_with = "null_as_default")]
    pub columns: Vec<Column>,
}

impl Header {
    /// Column names in header order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Records of one page together with their header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    #[serde(deserialize_with = "null_as_default")]
    pub header: Header,
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Vec<String>>,
}

impl PageData {
    /// Indices of records whose field count differs from the header's column count.
    ///
    /// The server is trusted to send rectangular data; this is only used to
    /// surface mismatches in the logs.
    pub fn ragged_records(&self) -> Vec<usize> {
        let width = self.header.columns.len();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.len() != width)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// Token of the following page, empty on the last page
    #[serde(rename = "next", deserialize_with = "null_as_default")]
    pub next_token: String,
}

/// A decoded page response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSet {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: PageMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub data: PageData,
}

impl ResultSet {
    /// Token of the following page
    pub fn next_token(&self) -> &str {
        &self.meta.next_token
    }

    /// Number of records on this page
    pub fn record_count(&self) -> usize {
        self.data.records.len()
    }

    /// Whether this is the final page
    pub fn is_last_page(&self) -> bool {
        self.meta.next_token.is_empty()
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
