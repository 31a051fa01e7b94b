use crate::exports::ExportError;
use crate::geos::LookupFailure;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
struct FailureReport<'a> {
    generated_at: DateTime<Utc>,
    count: usize,
    failures: &'a [LookupFailure],
}

impl<'a> FailureReport<'a> {
    fn new(failures: &'a [LookupFailure]) -> Self {
        Self {
            generated_at: Utc::now(),
            count: failures.len(),
            failures,
        }
    }
}

/// Dumps the geocode misses as pretty JSON next to the main output.
pub fn write_failure_report(path: &Path, failures: &[LookupFailure]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut out, &FailureReport::new(failures))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
