use std::path::Path;

use tokio::{fs::File, io::AsyncWriteExt};

use crate::parse::Record;
use crate::Result;

/// Serializes the records as CSV, header row first, and writes them to `path` in one go.
pub async fn write_records(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let bytes = records_to_csv(records)?;
    let mut file = File::create(path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;
    Ok(())
}

fn records_to_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(Record::FIELDS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_comes_first() {
        let bytes = records_to_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "text,author,tags\n");
    }

    #[test]
    fn cells_with_commas_and_quotes_are_escaped() {
        let record = Record::new("“Hi, there”", "O\"Neil", vec!["a".into(), "b".into()]);
        let bytes = records_to_csv(&[record]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "text,author,tags\n\"“Hi, there”\",\"O\"\"Neil\",a;b\n"
        );
    }
}
