/*!
# Record IO

Writing and reading of dialect record files.

A record file holds the utterances of exactly one dialect tag, as a
sequence of length-prefixed (sentence, lang) pairs. Files are named
`dialect-<tag>.rec` and are created fresh at the start of a run.
!*/
mod reader;
mod writer;

pub use reader::RecordReader;
pub use writer::RecordWriter;

/// One persisted utterance: the transcribed sentence and its dialect tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub sentence: String,
    pub lang: String,
}

/// File name for a given tag's record file.
pub fn record_file_name(tag: &str) -> String {
    format!("dialect-{}.rec", tag)
}

/// Glob pattern matching every record file in a directory.
pub const RECORD_PATTERN: &str = "dialect-*.rec";
