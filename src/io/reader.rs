/*! Reading of record files.

[RecordReader] implements [Iterator] over the records of one file,
yielding `Result<Record, Error>` so that a truncated or corrupt file
surfaces as an error item rather than a silent stop.
!*/
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;

use super::Record;

pub struct RecordReader<T>
where
    T: Read,
{
    handle: BufReader<T>,
}

impl RecordReader<File> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<T> RecordReader<T>
where
    T: Read,
{
    pub fn new(source: T) -> Self {
        Self {
            handle: BufReader::new(source),
        }
    }

    /// Read one length-prefixed field. Returns `Ok(None)` on a clean EOF
    /// (no bytes left); an EOF inside the length or the payload is an
    /// error.
    fn read_field(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let mut len_buf = [0u8; 4];
        match self.handle.read(&mut len_buf)? {
            0 => return Ok(None),
            n if n < 4 => self.handle.read_exact(&mut len_buf[n..])?,
            _ => (),
        }

        let len = u32::from_le_bytes(len_buf) as usize;
        let mut buf = vec![0u8; len];
        self.handle.read_exact(&mut buf)?;
        Ok(Some(buf))
    }
}

impl<T> Iterator for RecordReader<T>
where
    T: Read,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let sentence = match self.read_field() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        let lang = match self.read_field() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                return Some(Err(Error::Custom(
                    "truncated record: sentence field without lang field".to_string(),
                )))
            }
            Err(e) => return Some(Err(e)),
        };

        let into_record = || -> Result<Record, Error> {
            Ok(Record {
                sentence: String::from_utf8(sentence)?,
                lang: String::from_utf8(lang)?,
            })
        };
        Some(into_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let reader = RecordReader::new(std::io::Cursor::new(Vec::new()));
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn truncated_mid_record() {
        // a full sentence field but no lang field
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice("hello".as_bytes());

        let mut reader = RecordReader::new(std::io::Cursor::new(bytes));
        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn truncated_payload() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&100u32.to_le_bytes());
        bytes.extend_from_slice("short".as_bytes());

        let mut reader = RecordReader::new(std::io::Cursor::new(bytes));
        assert!(reader.next().unwrap().is_err());
    }
}
