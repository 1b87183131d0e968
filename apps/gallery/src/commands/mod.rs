//! # Gallery Commands
//!
//! Functions the view calls. Each takes only the state it needs and
//! returns `Result<T, ApiError>`.
//!
//! ## Command Groups
//! - [`catalog`] - Grid, detail page, filter panel facets
//! - [`filter`] - Criteria changes from the filter panel
//! - [`preferences`] - Language and colour theme
//! - [`inquiry`] - Purchase inquiry link

pub mod catalog;
pub mod filter;
pub mod inquiry;
pub mod preferences;
