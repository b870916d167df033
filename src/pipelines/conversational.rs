//! 한국어 대화 (standard Korean conversation) generation pipeline.
//!
//! The dataset ships as a single zip of flat xlsx files. Sentences are
//! read per spreadsheet (deduplicated within each file) and all written
//! under the 서울 tag.
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::RecordWriter;
use crate::lang::CONVERSATIONAL;
use crate::sources::{archive, spreadsheet};

pub struct ConversationalPipeline {
    base: PathBuf,
    temp: PathBuf,
    dst: PathBuf,
}

impl ConversationalPipeline {
    pub fn new(base: PathBuf, temp: PathBuf, dst: PathBuf) -> Self {
        Self { base, temp, dst }
    }

    pub fn run(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.temp)?;
        fs::create_dir_all(&self.dst)?;

        info!("processing '{}'", CONVERSATIONAL.dir_name);
        let dataset_path = self.base.join(CONVERSATIONAL.dir_name);
        let archive_path = archive::find_archive(&dataset_path)?;

        let unzip_path = self.temp.join(CONVERSATIONAL.dir_name);
        archive::extract(&archive_path, &unzip_path)?;

        let files = spreadsheet::find_spreadsheets(&unzip_path)?;
        info!("found {} files", files.len());

        let mut writer = RecordWriter::new(&self.dst, CONVERSATIONAL.tag)?;
        for file in &files {
            info!("processing {:?}", file);
            let sentences = spreadsheet::read_sentences(file)?;
            info!("found {} unique rows", sentences.len());
            if let Some(first) = sentences.iter().next() {
                info!("first sentence: {}", first);
            }

            for sentence in &sentences {
                writer.write(sentence)?;
            }
        }

        let count = writer.close()?;
        info!("# sentences: {}", count);
        info!("done '{}'", CONVERSATIONAL.dir_name);
        Ok(())
    }
}
