//! Quality-flag filtering.

use crate::domain::StationSeries;

/// Drop readings the network flagged as suspect.
///
/// Order is preserved. An empty result is not an error here; the
/// estimator decides what an empty series means.
pub fn filter_suspect(series: StationSeries) -> StationSeries {
    let StationSeries {
        station,
        measurements,
    } = series;

    StationSeries::new(
        station,
        measurements
            .into_iter()
            .filter(|m| !m.flag.is_suspect())
            .collect(),
    )
}
