//! uni-route URL codec
//!
//! Splits a page URL into its path and a flat parameter mapping, and joins
//! them back together:
//! - `get_url_info("/pages/a?x=1")` → `{ path: "/pages/a", params: { x: "1" } }`
//! - `query_params({ x: "1", y: 2 })` → `"?x=1&y=2"`
//!
//! Values are taken verbatim. No percent-decoding or escaping is performed.

mod page;
mod params;
mod query;

pub use page::PageOptions;
pub use params::{ParamValue, Params};
pub use query::{get_url_info, query_params};
