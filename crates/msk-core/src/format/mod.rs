//! Formatting utilities and display wrappers.
//!
//! - [`currency`]: estimated cost formatting, parsing and validation
//! - [`dates`]: day-first date rendering, relative ages and the overdue rule
//! - [`labels`]: badge lookup tables keyed by enum variant
//! - [`models`]: markdown `Display` for suggestions, employees and statistics
//! - [`collections`] and [`results`]: wrappers for lists and operation outcomes
//!
//! All markdown output is rendered to the terminal by the CLI.

pub mod collections;
pub mod currency;
pub mod dates;
pub mod labels;
pub mod models;
pub mod results;

pub use collections::{Employees, SuggestionTable};
pub use currency::{format_currency, is_valid_currency, parse_currency};
pub use dates::{format_date, format_date_time, is_overdue, relative_time};
pub use labels::{Badge, Badged};
pub use models::SuggestionDetail;
pub use results::{CreateResult, OperationStatus, UpdateResult};
