use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use super::types::*;
use crate::errors::{with_read_context, CatalogError};

const MISSING_MARKERS: [&str; 4] = ["nan", "na", "n/a", "null"];

/// Positions of the retained columns within a source header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    name: usize,
    platform: usize,
    genre: usize,
    rating: usize,
    critic_score: usize,
    user_score: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| find_column(headers, column).is_none())
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns(missing));
        }

        let position = |column: &str| find_column(headers, column).unwrap_or_default();

        Ok(Self {
            name: position(NAME_COLUMN),
            platform: position(PLATFORM_COLUMN),
            genre: position(GENRE_COLUMN),
            rating: position(RATING_COLUMN),
            critic_score: position(CRITIC_SCORE_COLUMN),
            user_score: position(USER_SCORE_COLUMN),
        })
    }
}

fn find_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

enum RowOutcome {
    Kept(CatalogRecord),
    Missing,
    ExcludedRating,
}

/// Reads and cleans the catalog CSV at `path`
pub fn load_and_clean_path(path: &Path) -> Result<CleanedCatalog> {
    let file = with_read_context(File::open(path), path)?;
    load_and_clean(file).with_context(|| crate::errors::read_context(path))
}

/// Reads a catalog CSV and returns only complete, rated, uniquely named records
pub fn load_and_clean<R: Read>(source: R) -> Result<CleanedCatalog> {
    let (catalog, report) = clean_records(source)?;
    log_report(&report);

    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog.into());
    }

    Ok(catalog)
}

fn clean_records<R: Read>(source: R) -> Result<(CleanedCatalog, CleaningReport)> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let headers = reader.headers().context("Failed to read catalog header row")?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;
    log_ignored_columns(&headers);

    let mut catalog = CleanedCatalog::new();
    let mut report = CleaningReport::default();

    for (idx, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read catalog row {}", idx + 1))?;
        report.rows_read += 1;

        match parse_row(&row, &layout) {
            RowOutcome::Kept(record) => keep_record(&mut catalog, &mut report, record),
            RowOutcome::Missing => report.dropped_missing += 1,
            RowOutcome::ExcludedRating => report.dropped_excluded_rating += 1,
        }
    }

    report.kept = catalog.len();
    Ok((catalog, report))
}

fn keep_record(catalog: &mut CleanedCatalog, report: &mut CleaningReport, record: CatalogRecord) {
    if let Some(existing) = catalog.get(&record.name) {
        if *existing == record {
            report.identical_rows += 1;
        }
        debug!("Dropping duplicate entry for '{}'", record.name);
        report.dropped_duplicate_names += 1;
        return;
    }

    catalog.insert(record);
}

fn parse_row(row: &StringRecord, layout: &ColumnLayout) -> RowOutcome {
    match parse_record(row, layout) {
        None => RowOutcome::Missing,
        Some(record) if record.rating == EXCLUDED_RATING => RowOutcome::ExcludedRating,
        Some(record) => RowOutcome::Kept(record),
    }
}

fn parse_record(row: &StringRecord, layout: &ColumnLayout) -> Option<CatalogRecord> {
    Some(CatalogRecord {
        name: text_cell(row, layout.name)?,
        platform: text_cell(row, layout.platform)?,
        genre: text_cell(row, layout.genre)?,
        rating: text_cell(row, layout.rating)?,
        critic_score: numeric_cell(row, layout.critic_score)?,
        user_score: numeric_cell(row, layout.user_score)?,
    })
}

fn text_cell(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|value| !is_missing(value))
        .map(str::to_string)
}

fn numeric_cell(row: &StringRecord, idx: usize) -> Option<f64> {
    // Unparseable scores ("tbd") count as missing
    text_cell(row, idx)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn is_missing(value: &str) -> bool {
    value.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
}

fn log_ignored_columns(headers: &StringRecord) {
    let ignored: Vec<&str> = headers
        .iter()
        .filter(|header| !REQUIRED_COLUMNS.contains(header))
        .collect();

    let unexpected: Vec<&&str> = ignored
        .iter()
        .filter(|header| !DROPPED_COLUMNS.contains(*header))
        .collect();

    debug!("Dropping {} unused columns", ignored.len());
    if !unexpected.is_empty() {
        debug!("Unrecognised columns also dropped: {:?}", unexpected);
    }
}

fn log_report(report: &CleaningReport) {
    info!("  → Read {} catalog rows", report.rows_read);
    info!("  → Dropped {} rows with missing values", report.dropped_missing);
    info!(
        "  → Dropped {} rows rated '{}'",
        report.dropped_excluded_rating, EXCLUDED_RATING
    );
    info!(
        "  → Dropped {} duplicate names ({} identical rows)",
        report.dropped_duplicate_names, report.identical_rows
    );
    info!("  → Kept {} games", report.kept);
}
