use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::error::FareGenError;
use crate::record::FareTable;

pub const HEADER: [&str; 6] = [
    "id",
    "airline_name",
    "source",
    "destination",
    "fare",
    "updated_date",
];

/// Writes the header followed by every record of `table` in `id` order.
///
/// Fields containing the delimiter or quotes are quoted by the CSV writer.
///
/// # Errors
/// Errors when the underlying writer fails
pub fn write_to<W: io::Write>(table: &FareTable, writer: W) -> Result<(), FareGenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(&HEADER)?;
    for record in table.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Creates (or truncates) the file at `path`, writes `table` to it and returns
/// the size of the resulting file in bytes.
///
/// A failed write leaves whatever was already written in place.
///
/// # Errors
/// Errors when the file cannot be created or written, e.g. a missing parent
/// directory, missing permissions or a full disk
pub fn write_csv(table: &FareTable, path: impl AsRef<Path>) -> Result<u64, FareGenError> {
    let path = path.as_ref();
    info!("Saving {} rows to {}", table.len(), path.display());

    let file = File::create(path)?;
    write_to(table, file)?;

    Ok(fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::date::DateWindow;
    use crate::generator::FareGenerator;
    use crate::vocabulary::Vocabulary;

    fn generator(vocabulary: Vocabulary, seed: u64) -> FareGenerator<StdRng> {
        let end = chrono::NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let window = DateWindow::ending_at(end, 365).unwrap();
        FareGenerator::new(vocabulary, window, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_header_only() {
        let table = generator(Vocabulary::default(), 1).generate(0).unwrap();
        let mut buffer = Vec::new();
        write_to(&table, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,airline_name,source,destination,fare,updated_date\n"
        );
    }

    #[test]
    fn test_row_format() {
        let table = generator(Vocabulary::default(), 1).generate(100).unwrap();
        let mut buffer = Vec::new();
        write_to(&table, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 101);
        for (id, line) in lines[1..].iter().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 6);
            assert_eq!(fields[0], id.to_string());
            assert_ne!(fields[2], fields[3]);

            let (_, cents) = fields[4].split_once('.').unwrap();
            assert_eq!(cents.len(), 2);

            assert_eq!(fields[5].len(), 10);
            assert!(chrono::NaiveDate::parse_from_str(fields[5], "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn test_quotes_delimiters() {
        let vocabulary = Vocabulary::new(
            vec!["Comma, Inc. \"Air\"".to_owned()],
            vec!["LAX".to_owned(), "JFK".to_owned()],
        )
        .unwrap();
        let table = generator(vocabulary, 9).generate(3).unwrap();
        let mut buffer = Vec::new();
        write_to(&table, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let mut count = 0;
        for record in reader.records() {
            let record = record.unwrap();
            assert_eq!(record.len(), 6);
            assert_eq!(&record[1], "Comma, Inc. \"Air\"");
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_write_csv_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fares.csv");
        let table = generator(Vocabulary::default(), 5).generate(10).unwrap();

        let bytes = write_csv(&table, &path).unwrap();
        assert_eq!(bytes, fs::read(&path).unwrap().len() as u64);
    }

    #[test]
    fn test_write_csv_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fares.csv");
        let table = generator(Vocabulary::default(), 5).generate(10).unwrap();

        assert!(matches!(
            write_csv(&table, &path),
            Err(FareGenError::IoError(_))
        ));
    }
}
