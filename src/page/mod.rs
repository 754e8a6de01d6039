//! Page wire types
//!
//! The request body posted to `<url>/page` and the result set the dataproxy
//! returns for one page.
//!
//! # Overview
//!
//! A [`ResultSet`] carries the token of the next page in `meta.next` (empty
//! when there are no further pages) and a batch of string-encoded records
//! described by a column header.

mod types;

pub use types::{Column, Header, PageData, PageMeta, PageRequest, ResultSet};
