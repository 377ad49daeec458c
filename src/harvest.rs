//! Year-by-year chart harvesting.
//!
//! Years are fetched one at a time with a fixed pause in between. A year that
//! fails is logged and contributes nothing; there is no retry.

use std::ops::RangeInclusive;
use std::time::Duration;

use futures::future::BoxFuture;
use log::{error, info, warn};

use crate::chart_csv;
use crate::chart_query::ChartQuery;
use crate::chart_source::{ChartSource, HttpChartSource, SongRecord};
use crate::config::HarvestConfig;
use crate::Result;

/// Waits between consecutive requests.
pub trait Pacer {
    fn pause(&self, delay: Duration) -> BoxFuture<'_, ()>;
}

/// Sleeps on the tokio timer.
pub struct TokioPacer;

impl Pacer for TokioPacer {
    fn pause(&self, delay: Duration) -> BoxFuture<'_, ()> {
        Box::pin(tokio::time::sleep(delay))
    }
}

/// Fetches one year, turning failures into an empty result.
pub async fn fetch_year<S>(source: &S, year: i32) -> Vec<SongRecord>
where
    S: ChartSource + ?Sized,
{
    info!("Fetching chart for {year}...");
    let query = ChartQuery::for_year(year);

    match source.fetch(&query).await {
        Ok(records) if records.is_empty() => {
            warn!("No songs found for {year}");
            records
        }
        Ok(records) => {
            info!("Found {} songs for {year}", records.len());
            records
        }
        Err(e) => {
            error!("Failed to fetch chart for {year}: {e}");
            Vec::new()
        }
    }
}

/// Fetches every year in order and returns all records in fetch order.
///
/// Pauses for `delay` after every year except the last.
pub async fn harvest<S, P>(
    source: &S,
    pacer: &P,
    years: RangeInclusive<i32>,
    delay: Duration,
) -> Vec<SongRecord>
where
    S: ChartSource + ?Sized,
    P: Pacer + ?Sized,
{
    let last_year = *years.end();
    let mut all_records = Vec::new();

    for year in years {
        let mut records = fetch_year(source, year).await;
        all_records.append(&mut records);

        if year < last_year {
            info!("Waiting {:?} before the next request...", delay);
            pacer.pause(delay).await;
        }
    }

    all_records
}

/// Runs the harvester against the live API and writes the CSV.
///
/// Returns the number of records written. Nothing is written when no
/// records were collected.
pub async fn run(config: &HarvestConfig) -> Result<usize> {
    let source = HttpChartSource::new(config)?;
    let records = harvest(&source, &TokioPacer, config.years(), config.delay).await;
    write_output(config, &records)
}

/// Writes collected records to the configured output path.
pub fn write_output(config: &HarvestConfig, records: &[SongRecord]) -> Result<usize> {
    if records.is_empty() {
        warn!("No data to save");
        return Ok(0);
    }

    let path = &config.output_path;
    info!("Saving {} songs to {}...", records.len(), path.display());
    let columns = chart_csv::write_records_to_path(path, records)?;

    info!("Saved {}", path.display());
    info!("Total songs: {}", records.len());
    info!("Columns: {columns}");
    Ok(records.len())
}
