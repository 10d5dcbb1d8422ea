use crate::{
    foundation::error::{DelayscopeError, DelayscopeResult},
    selection::filter::FilteredView,
};

pub const HEADER: &str = "Carrier,Origin,Destination,Month,Total Delay,Carrier Delay,Weather Delay,NAS Delay,Cancelled";

/// Comma-separated dump of the filtered records, header first.
///
/// Rows are joined by `\n` without a trailing newline and fields are not quoted; carrier and
/// airport codes never contain commas. An empty view yields the header alone.
#[tracing::instrument(skip_all, fields(records = view.len()))]
pub fn to_csv(view: &FilteredView) -> DelayscopeResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER.split(','))?;
    for r in view.iter() {
        writer.write_record([
            r.carrier.clone(),
            r.origin.clone(),
            r.destination.clone(),
            r.month.to_string(),
            r.total_delay.to_string(),
            r.carrier_delay.to_string(),
            r.weather_delay.to_string(),
            r.nas_delay.to_string(),
            r.cancelled.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DelayscopeError::serde(format!("flush csv: {}", e.error())))?;
    let mut out = String::from_utf8(bytes)
        .map_err(|e| DelayscopeError::serde(format!("csv is not utf-8: {e}")))?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/csv.rs"]
mod tests;
