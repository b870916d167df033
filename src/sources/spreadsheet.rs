/*! Spreadsheet reader (한국어 대화 distribution).

Each xlsx file holds one worksheet with a header row; the sentence lives
in the second column (index 1). Sentences are deduplicated **per file**:
the same sentence in two different files is emitted twice. Cells that do
not hold text (row ids, timestamps) are silently dropped.
!*/
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use glob::glob;

use crate::error::Error;

/// Find every xlsx file directly under `dir` (the distribution is flat).
///
/// Finding none means the archive did not contain what we expect.
pub fn find_spreadsheets(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = dir.join("*.xlsx");
    let files = glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;

    if files.is_empty() {
        return Err(Error::Custom(format!(
            "malformed dataset: cannot find any xlsx files in {:?}",
            dir
        )));
    }

    Ok(files)
}

/// Read the unique sentences of one spreadsheet.
///
/// Workbook errors propagate: unlike the json corpora, a broken xlsx file
/// in this distribution means a broken download.
pub fn read_sentences(path: &Path) -> Result<HashSet<String>, Error> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Custom(format!("no worksheet in {:?}", path)))??;

    Ok(collect_sentences(range.rows()))
}

/// Collect unique text values of column index 1, skipping the header row.
fn collect_sentences<'a>(rows: impl Iterator<Item = &'a [Data]>) -> HashSet<String> {
    rows.skip(1)
        .filter_map(|row| match row.get(1) {
            Some(Data::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_is_per_file() {
        let sheet = vec![
            vec![
                Data::String("id".to_string()),
                Data::String("sentence".to_string()),
            ],
            vec![
                Data::String("a".to_string()),
                Data::String("안녕".to_string()),
            ],
            vec![
                Data::String("b".to_string()),
                Data::String("안녕".to_string()),
            ],
            vec![
                Data::String("c".to_string()),
                Data::String("반가워".to_string()),
            ],
        ];

        let sentences = collect_sentences(sheet.iter().map(|r| r.as_slice()));
        assert_eq!(sentences.len(), 2);
        assert!(sentences.contains("안녕"));
        assert!(sentences.contains("반가워"));
    }

    #[test]
    fn non_text_cells_are_skipped() {
        let sheet = vec![
            vec![
                Data::String("id".to_string()),
                Data::String("sentence".to_string()),
            ],
            vec![Data::String("a".to_string()), Data::Int(42)],
            vec![Data::String("b".to_string()), Data::Float(3.5)],
            vec![Data::String("c".to_string()), Data::Empty],
            vec![Data::String("d".to_string()), Data::String(String::new())],
            vec![
                Data::String("e".to_string()),
                Data::String("반가워".to_string()),
            ],
        ];

        let sentences = collect_sentences(sheet.iter().map(|r| r.as_slice()));
        assert_eq!(sentences.len(), 1);
        assert!(sentences.contains("반가워"));
    }

    #[test]
    fn header_only_sheet_is_empty() {
        let sheet = vec![vec![
            Data::String("id".to_string()),
            Data::String("sentence".to_string()),
        ]];

        let sentences = collect_sentences(sheet.iter().map(|r| r.as_slice()));
        assert!(sentences.is_empty());
    }

    #[test]
    fn short_rows_are_skipped() {
        let sheet = vec![
            vec![Data::String("header".to_string())],
            vec![Data::String("a".to_string())],
        ];

        let sentences = collect_sentences(sheet.iter().map(|r| r.as_slice()));
        assert!(sentences.is_empty());
    }

    #[test]
    fn no_spreadsheets_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_spreadsheets(dir.path()).is_err());
    }
}
