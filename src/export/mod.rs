//! Text export of a route in visiting order.

mod csv;

pub use self::csv::{export_csv, write_csv, CSV_HEADER};
