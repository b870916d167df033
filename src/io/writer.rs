/*! Record writer for a given dialect tag.

Each accepted sentence becomes exactly one record: a `u32` little-endian
byte length followed by the UTF-8 sentence bytes, then the same framing
for the tag. The writer keeps a running record count for end-of-run
reporting.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

use super::record_file_name;

pub struct RecordWriter {
    handle: BufWriter<File>,
    path: PathBuf,
    tag: &'static str,
    count: usize,
}

impl RecordWriter {
    /// Create a writer for `tag`, truncating any previous record file.
    pub fn new(dst: &Path, tag: &'static str) -> Result<Self, Error> {
        let path = dst.join(record_file_name(tag));
        debug!("creating {:?}", path);
        let handle = BufWriter::new(File::create(&path)?);
        Ok(Self {
            handle,
            path,
            tag,
            count: 0,
        })
    }

    /// Append one record holding `sentence` and this writer's tag.
    pub fn write(&mut self, sentence: &str) -> Result<(), Error> {
        write_field(&mut self.handle, sentence.as_bytes())?;
        write_field(&mut self.handle, self.tag.as_bytes())?;
        self.count += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and finalize, returning the total record count.
    pub fn close(mut self) -> Result<usize, Error> {
        self.handle.flush()?;
        Ok(self.count)
    }
}

fn write_field(handle: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    handle.write_all(&(bytes.len() as u32).to_le_bytes())?;
    handle.write_all(bytes)
}

#[cfg(test)]
mod tests {
    use super::super::{Record, RecordReader};
    use super::*;

    #[test]
    fn round_trip() {
        let dst = tempfile::tempdir().unwrap();
        let mut writer = RecordWriter::new(dst.path(), "제주").unwrap();
        writer.write("혼저 옵서예").unwrap();
        writer.write("밥 먹언?").unwrap();
        let path = writer.path().to_path_buf();
        assert_eq!(writer.close().unwrap(), 2);

        let records: Vec<Record> = RecordReader::from_path(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            records,
            vec![
                Record {
                    sentence: "혼저 옵서예".to_string(),
                    lang: "제주".to_string()
                },
                Record {
                    sentence: "밥 먹언?".to_string(),
                    lang: "제주".to_string()
                },
            ]
        );
    }

    #[test]
    fn truncates_previous_file() {
        let dst = tempfile::tempdir().unwrap();
        let mut writer = RecordWriter::new(dst.path(), "강원").unwrap();
        writer.write("감자 먹드래요").unwrap();
        let path = writer.path().to_path_buf();
        writer.close().unwrap();

        let writer = RecordWriter::new(dst.path(), "강원").unwrap();
        writer.close().unwrap();

        assert_eq!(RecordReader::from_path(&path).unwrap().count(), 0);
    }

    #[test]
    fn file_name_from_tag() {
        let dst = tempfile::tempdir().unwrap();
        let writer = RecordWriter::new(dst.path(), "서울").unwrap();
        assert_eq!(
            writer.path().file_name().unwrap().to_str().unwrap(),
            "dialect-서울.rec"
        );
    }
}
