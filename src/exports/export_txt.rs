use crate::domain::AggregatedUnit;
use crate::exports::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

pub const HEADER: &str = r#"Unit|Type|"State(s)"|Latitude|Longitude"#;

const ABSENT: &str = "None";
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Writes the units as pipe-delimited UTF-16 (little endian, with BOM) to `path`.
///
/// Rows are written as they are formatted, so a failure part way through
/// leaves a truncated file behind. Returns the number of unit rows written.
pub fn write_units(
    path: &Path,
    units: &[AggregatedUnit],
    provenance: &str,
) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let written = write_units_to(&mut out, units, provenance)?;
    out.flush()?;

    info!(rows = written, path = %path.display(), "output written");
    Ok(written)
}

/// Layout: BOM, header line, one line per unit, then a `File created by` trailer.
pub fn write_units_to<W: Write>(
    out: &mut W,
    units: &[AggregatedUnit],
    provenance: &str,
) -> Result<usize, ExportError> {
    out.write_all(&UTF16_LE_BOM)?;
    write_line(out, HEADER)?;

    for unit in units {
        let row = format_row(unit);
        if let Err(source) = write_line(out, &row) {
            error!(unit = %unit.key, %row, "Exception writing row");
            return Err(ExportError::Row {
                unit: unit.key.to_string(),
                source,
            });
        }
    }

    write_line(out, &format!("File created by {provenance}"))?;
    Ok(units.len())
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    let bytes: Vec<u8> = line
        .encode_utf16()
        .chain("\n".encode_utf16())
        .flat_map(u16::to_le_bytes)
        .collect();
    out.write_all(&bytes)
}

/// `Zion National Park|National Park|"['UT']"|37.3|-113.0`
pub fn format_row(unit: &AggregatedUnit) -> String {
    let coords = unit.coordinates.unwrap_or_default();
    format!(
        r#"{}|{}|"{}"|{}|{}"#,
        unit.key,
        unit.unit_type,
        format_states(&unit.jurisdictions),
        format_coordinate(coords.latitude),
        format_coordinate(coords.longitude),
    )
}

/// Bracketed, quoted list: `['ID', 'MT', 'WY']`.
pub fn format_states(states: &[String]) -> String {
    let quoted: Vec<String> = states
        .iter()
        .map(|s| {
            if s.contains('\'') && !s.contains('"') {
                format!("\"{s}\"")
            } else {
                format!("'{}'", s.replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Whole numbers keep one decimal place (`-113.0`); absent is `None`.
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        None => ABSENT.to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) => v.to_string(),
    }
}
