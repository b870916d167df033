/*! Archive locating and extraction.

A dataset directory is expected to hold exactly one zip archive. Zero or
multiple archives mean the dataset was not downloaded the way we expect,
and there is no safe way to pick one: both cases fail loudly.
!*/
use std::fs::File;
use std::path::{Path, PathBuf};

use glob::glob;
use log::info;

use crate::error::Error;

/// Find the single zip archive under `dataset_path`.
///
/// Fails if `dataset_path` does not exist or if the number of zip files
/// found is not exactly one.
pub fn find_archive(dataset_path: &Path) -> Result<PathBuf, Error> {
    if !dataset_path.is_dir() {
        return Err(Error::Custom(format!(
            "cannot find dataset directory {:?}",
            dataset_path
        )));
    }

    let pattern = dataset_path.join("*.zip");
    let mut archives = glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;

    if archives.len() != 1 {
        return Err(Error::Custom(format!(
            "malformed dataset: expected exactly one zip file in {:?}, found {}",
            dataset_path,
            archives.len()
        )));
    }

    Ok(archives.remove(0))
}

/// Extract the whole archive into `dst`, creating it if needed.
///
/// The extracted tree is left on disk after the run.
pub fn extract(archive: &Path, dst: &Path) -> Result<(), Error> {
    info!("unzipping {:?} into {:?}", archive, dst);
    let mut archive = zip::ZipArchive::new(File::open(archive)?)?;
    archive.extract(dst)?;
    Ok(())
}
