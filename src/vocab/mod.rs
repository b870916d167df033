/*!
# Subword vocabulary building

Reads every generated record file back, samples the sentences and learns
a fixed-size subword vocabulary. The learning algorithm itself sits
behind the [SubwordLearner] trait so that any compatible tokenizer
trainer can be substituted; the default is [WordpieceLearner].

The output is a plain text file, one token per line, starting with the
reserved tokens of [crate::lang::reserved_tokens].
!*/
mod wordpiece;

pub use wordpiece::WordpieceLearner;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glob::glob;
use log::info;
use rand::seq::SliceRandom;

use crate::error::Error;
use crate::io::{RecordReader, RECORD_PATTERN};
use crate::lang::reserved_tokens;

/// Hard cap on the number of sentences fed to the learner.
pub const SAMPLE_SIZE: usize = 500_000;

/// Learns an ordered subword vocabulary from text.
///
/// Implementations must place the `reserved` tokens first, in order, and
/// return at most `vocab_size` unique tokens.
pub trait SubwordLearner {
    fn learn(
        &self,
        sentences: Vec<String>,
        reserved: &[String],
        vocab_size: usize,
    ) -> Result<Vec<String>, Error>;
}

/// Read sentences back from the record files under `data`, sample up to
/// [SAMPLE_SIZE] of them, learn a vocabulary of `vocab_size` tokens and
/// write it to `output`, one token per line.
pub fn build(
    data: &Path,
    output: &Path,
    vocab_size: usize,
    learner: &dyn SubwordLearner,
) -> Result<(), Error> {
    let sentences = load_sentences(data)?;
    let sentences = sample(sentences, SAMPLE_SIZE);
    info!("learning vocabulary from {} sentences", sentences.len());

    let vocab = learner.learn(sentences, &reserved_tokens(), vocab_size)?;
    info!("vocab[..10]: {:?}", &vocab[..vocab.len().min(10)]);

    let mut out = BufWriter::new(File::create(output)?);
    for token in &vocab {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;

    info!("done");
    Ok(())
}

/// Collect every sentence of every record file under `data`.
fn load_sentences(data: &Path) -> Result<Vec<String>, Error> {
    let pattern = data.join(RECORD_PATTERN);
    let files = glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;

    if files.is_empty() {
        return Err(Error::Custom(format!(
            "cannot find any record files in {:?}",
            data
        )));
    }

    let mut sentences = Vec::new();
    for file in &files {
        info!("reading {:?}", file);
        for record in RecordReader::from_path(file)? {
            sentences.push(record?.sentence);
        }
    }

    info!("read {} sentences from {} files", sentences.len(), files.len());
    Ok(sentences)
}

/// Shuffle and cap. Having fewer sentences than the cap is fine: the
/// learner just sees everything.
fn sample(mut sentences: Vec<String>, cap: usize) -> Vec<String> {
    sentences.shuffle(&mut rand::thread_rng());
    sentences.truncate(cap);
    sentences
}
