pub mod cli;
pub mod error;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod sources;
pub mod vocab;
