//! 방언 발화 (regional dialect speech) generation pipeline.
//!
//! Five regional datasets, each a single zip under a `Training`
//! subdirectory, holding nested json files. Utterances are written in
//! file order, duplicates preserved.
//!
//! Recovery policy: a json file that fails to parse is skipped and
//! reported at the end of its region; a structurally broken dataset
//! (missing directory, wrong archive count, no json files) aborts the
//! run.
use std::fs;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::error::Error;
use crate::io::RecordWriter;
use crate::lang::{Dataset, DIALECTS};
use crate::sources::{archive, json};

pub struct DialectPipeline {
    base: PathBuf,
    temp: PathBuf,
    dst: PathBuf,
}

impl DialectPipeline {
    pub fn new(base: PathBuf, temp: PathBuf, dst: PathBuf) -> Self {
        Self { base, temp, dst }
    }

    /// Process every regional dataset, in the fixed descriptor order.
    pub fn run(&self) -> Result<(), Error> {
        for dataset in DIALECTS.iter() {
            info!("processing '{}'", dataset.dir_name);
            let count = self.run_dataset(dataset)?;
            info!("# sentences: {}", count);
            info!("done '{}'", dataset.dir_name);
        }
        Ok(())
    }

    /// Process one regional dataset, returning its record count.
    pub fn run_dataset(&self, dataset: &Dataset) -> Result<usize, Error> {
        fs::create_dir_all(&self.temp)?;
        fs::create_dir_all(&self.dst)?;

        let dataset_path = self.base.join(dataset.dir_name).join("Training");
        let archive_path = archive::find_archive(&dataset_path)?;

        let unzip_path = self.temp.join(dataset.dir_name);
        archive::extract(&archive_path, &unzip_path)?;

        let files = json::find_json_files(&unzip_path)?;
        info!("found {} files", files.len());

        let mut writer = RecordWriter::new(&self.dst, dataset.tag)?;
        let mut failures = Vec::new();
        for file in files {
            match json::read_utterances(&file) {
                Ok(utterances) => {
                    for sentence in &utterances {
                        writer.write(sentence)?;
                    }
                }
                Err(e) => {
                    error!("got error while processing {:?}, skipping: {:?}", file, e);
                    failures.push((file, e));
                }
            }
        }

        if !failures.is_empty() {
            warn!(
                "{}: skipped {} unparseable files",
                dataset.tag,
                failures.len()
            );
        }

        writer.close()
    }
}
