#![deny(unused_must_use)]
// Don't allow dbg! prints in release.
#![cfg_attr(not(debug_assertions), deny(clippy::dbg_macro))]

pub use config::Config;
pub use error::{LoadError, Result};
pub use field::{ColumnKind, Field};
pub use filter::FilterState;
pub use record::{Dataset, Record};
pub use render::{Render, TextTable};
pub use session::{Event, Session};
pub use sort::{Direction, SortState};
pub use source::Source;

pub mod category;
pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod render;
pub mod session;
pub mod sort;
pub mod source;
pub mod timecode;
