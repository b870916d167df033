//! # Saturi
//!
//! Saturi turns the raw Korean dialect speech-transcription datasets
//! (the 한국어 대화 spreadsheet corpus and the five regional 방언 발화
//! json corpora) into per-dialect record files, and learns a subword
//! vocabulary from the aggregated text.
//!
//! ```sh
//! saturi 0.1.0
//! Korean dialect corpus generation tool.
//!
//! USAGE:
//!     saturi <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     conversational    Generate 서울 records from the 한국어 대화 dataset
//!     dialect           Generate regional records from the 방언 발화 datasets
//!     vocab             Learn a subword vocabulary from generated records
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use saturi::cli;
use saturi::error::Error;
use saturi::pipelines::{ConversationalPipeline, DialectPipeline};
use saturi::vocab::{self, WordpieceLearner};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Saturi::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Saturi::Conversational(e) => {
            info!("base path: {:?}", e.base);
            info!("temp path: {:?}", e.temp);
            info!("output path: {:?}", e.output);
            let p = ConversationalPipeline::new(e.base, e.temp, e.output);
            p.run()?;
        }
        cli::Saturi::Dialect(e) => {
            info!("base path: {:?}", e.base);
            info!("temp path: {:?}", e.temp);
            info!("output path: {:?}", e.output);
            let p = DialectPipeline::new(e.base, e.temp, e.output);
            p.run()?;
        }
        cli::Saturi::Vocab(v) => {
            info!("dataset path: {:?}", v.data);
            info!("output path: {:?}", v.output);
            info!("vocab size: {}", v.vocab_size);
            vocab::build(&v.data, &v.output, v.vocab_size, &WordpieceLearner)?;
        }
    };
    Ok(())
}
