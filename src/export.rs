//! Tabular export of sampled profiles (std only).
//!
//! Writes the header `time, velocity, position` followed by one
//! comma-separated line per sample. Values use Rust's shortest round-trip
//! `f64` formatting.

use std::io::Write;
use std::string::String;

use crate::error::{truncated, Error, ExportError, Result};
use crate::motion::ProfileSample;

/// Header line of the tabular format.
pub const CSV_HEADER: &str = "time, velocity, position";

/// Write samples as CSV to any writer.
///
/// Accepts any sample source, so a [`ProfileSampler`](crate::motion::ProfileSampler)
/// can be streamed without collecting it first. Returns the number of
/// sample lines written.
///
/// # Errors
///
/// Returns `ExportError::Io` if the writer fails.
pub fn write_csv<W, I>(mut writer: W, samples: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = ProfileSample>,
{
    writeln!(writer, "{}", CSV_HEADER).map_err(io_error)?;

    let mut lines = 0;
    for sample in samples {
        writeln!(writer, "{},{},{}", sample.time, sample.velocity, sample.position)
            .map_err(io_error)?;
        lines += 1;
    }

    writer.flush().map_err(io_error)?;
    Ok(lines)
}

/// Render samples as an in-memory CSV document.
pub fn to_csv_string<I>(samples: I) -> String
where
    I: IntoIterator<Item = ProfileSample>,
{
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for sample in samples {
        out.push_str(&std::format!(
            "{},{},{}\n",
            sample.time, sample.velocity, sample.position
        ));
    }
    out
}

fn io_error(e: std::io::Error) -> Error {
    Error::Export(ExportError::Io(truncated(&e.to_string())))
}
