//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "saturi", about = "Korean dialect corpus generation tool.")]
/// Holds every command that is callable by the `saturi` command.
pub enum Saturi {
    #[structopt(about = "Generate 서울 records from the 한국어 대화 dataset")]
    Conversational(ExampleGen),
    #[structopt(about = "Generate regional records from the 방언 발화 datasets")]
    Dialect(ExampleGen),
    #[structopt(about = "Learn a subword vocabulary from generated records")]
    Vocab(Vocab),
}

#[derive(Debug, StructOpt)]
/// Generation command parameters, shared by both dataset variants.
pub struct ExampleGen {
    #[structopt(parse(from_os_str), help = "base path holding the downloaded datasets")]
    pub base: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "temp",
        default_value = "./tmp",
        help = "working path used for archive extraction"
    )]
    pub temp: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "./data",
        help = "record file destination"
    )]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Vocab command and parameters.
pub struct Vocab {
    #[structopt(parse(from_os_str), help = "record files location")]
    pub data: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "./vocab.txt",
        help = "vocabulary file destination"
    )]
    pub output: PathBuf,
    #[structopt(
        long = "vocab-size",
        default_value = "8000",
        help = "total vocabulary size, reserved tokens included"
    )]
    pub vocab_size: usize,
}
