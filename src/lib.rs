pub mod artist;
pub mod artists_field;
pub mod catalog;
pub mod chart_csv;
pub mod chart_query;
pub mod chart_source;
pub mod config;
pub mod error;
pub mod harvest;
pub mod output_record;
pub mod release;
pub mod song;
pub mod track;

pub use error::{Error, Result};
