use std::collections::BTreeSet;
use std::io::Read;
use tracing::info;

use crate::application::{AppError, HotelService, parse_date, parse_room_id};
use crate::domain::{BookingError, Reservation};

/// Result of an import operation
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Validate every row without booking anything
    pub dry_run: bool,
}

/// Importer for loading bookings into a hotel
pub struct Importer<'a> {
    service: &'a mut HotelService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a mut HotelService) -> Self {
        Self { service }
    }

    /// Import bookings from CSV with a `room_id,date` header.
    ///
    /// Each row is booked on its own; a bad row is reported and the rest of
    /// the file still goes through. A dry run reports the same outcome per row
    /// as the real import, including rows that collide with earlier rows.
    pub fn import_bookings_csv<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult, AppError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut result = ImportResult::default();
        // Rows accepted so far in a dry run; the ledger itself is untouched
        let mut accepted: BTreeSet<Reservation> = BTreeSet::new();

        for (line_num, record) in csv_reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    result.errors.push(ImportError {
                        line,
                        error: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            let room_str = record.get(0).unwrap_or("");
            let date_str = record.get(1).unwrap_or("");

            let outcome = parse_room_id(room_str).and_then(|room_id| {
                let date = parse_date(date_str)?;
                if options.dry_run {
                    let rate = self.service.check(room_id, date)?;
                    if !accepted.insert(Reservation::new(room_id, date)) {
                        return Err(BookingError::Conflict { room_id, date }.into());
                    }
                    Ok(rate)
                } else {
                    self.service.book(room_id, date)
                }
            });

            match outcome {
                Ok(_) => result.imported += 1,
                Err(e) => result.errors.push(ImportError {
                    line,
                    error: e.to_string(),
                }),
            }
        }

        info!(
            imported = result.imported,
            errors = result.errors.len(),
            dry_run = options.dry_run,
            "bookings import finished"
        );
        Ok(result)
    }
}
