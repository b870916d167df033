/*! JSON corpus reader (방언 발화 distributions).

Each json file is an object with an `utterance` array; every utterance
carries the dialect-transcribed text under `dialect_form`. Utterances
are emitted in file order and are **not** deduplicated.

A file that fails to parse is skipped: the regional corpora contain the
occasional malformed export, and one bad file must not discard the rest
of a region.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use glob::glob;
use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize)]
struct DialectFile {
    utterance: Vec<Utterance>,
}

#[derive(Debug, Deserialize)]
struct Utterance {
    dialect_form: String,
}

/// Find every json file under `dir`, at any depth.
///
/// Finding none means the archive did not contain what we expect.
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = dir.join("**").join("*.json");
    let files = glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;

    if files.is_empty() {
        return Err(Error::Custom(format!(
            "malformed dataset: cannot find any json files in {:?}",
            dir
        )));
    }

    Ok(files)
}

/// Read the dialect forms of one file, in order, duplicates preserved.
pub fn read_utterances(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let parsed: DialectFile = serde_json::from_reader(BufReader::new(file))?;

    Ok(parsed
        .utterance
        .into_iter()
        .map(|u| u.dialect_form)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn duplicates_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "a.json",
            r#"{"utterance":[{"dialect_form":"하이"},{"dialect_form":"하이"}]}"#,
        );

        let utterances = read_utterances(&path).unwrap();
        assert_eq!(utterances, vec!["하이", "하이"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "a.json",
            r#"{"id":"x","utterance":[{"dialect_form":"잘 가라이","standard_form":"잘 가"}]}"#,
        );

        let utterances = read_utterances(&path).unwrap();
        assert_eq!(utterances, vec!["잘 가라이"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.json", "{not json");
        assert!(read_utterances(&path).is_err());
    }

    #[test]
    fn missing_dialect_form_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "bad.json",
            r#"{"utterance":[{"standard_form":"잘 가"}]}"#,
        );
        assert!(read_utterances(&path).is_err());
    }

    #[test]
    fn finds_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("deep/deeper")).unwrap();
        write_file(
            &dir.path().join("deep/deeper"),
            "a.json",
            r#"{"utterance":[]}"#,
        );

        let files = find_json_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn no_json_files_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_json_files(dir.path()).is_err());
    }
}
