use crate::classify::{Category, FileRecord};
use crate::counter::count_lines;
use crate::error::Result;
use crate::tally::Tally;

/// Count, classify and record a single file.
///
/// On a read error nothing is recorded and the error is returned to the
/// caller, which decides whether to skip it.
pub fn process_file(record: &FileRecord, tally: &Tally) -> Result<(Category, u64)> {
    let lines = count_lines(&record.path)?;
    let category = record.category();
    tally.record(&category, lines);
    Ok((category, lines))
}
