//! CSV export.
//!
//! One row per stop in current visiting order. Tracking numbers are digits
//! only, so no field quoting is needed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::Route;

/// Header row written before the stops.
pub const CSV_HEADER: &str = "Order,Tracking Number,X,Y,SerialNumber";

/// Writes `route` as CSV to `writer`.
///
/// The `Order` column is the 1-based visiting position; `SerialNumber` is the
/// sequence number the stop was created with.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Stop};
/// use u_dispatch::export::write_csv;
///
/// let mut route = Route::new();
/// route.append(Stop::new("10010000001", 5, 7, 2));
///
/// let mut out = Vec::new();
/// write_csv(&route, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Order,Tracking Number,X,Y,SerialNumber\n1,10010000001,5,7,2\n"
/// );
/// ```
pub fn write_csv<W: Write>(route: &Route, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for (order, stop) in route.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            order + 1,
            stop.id(),
            stop.x(),
            stop.y(),
            stop.sequence_number()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `route` to it.
pub fn export_csv(route: &Route, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(route, BufWriter::new(file))?;
    log::info!("export.csv: path={} rows={}", path.display(), route.len());
    Ok(())
}
