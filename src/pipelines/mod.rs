/*!
# Generation pipelines

One pipeline per dataset distribution, run once per invocation:
locate archive → unzip → read utterances → write records.
!*/
pub mod conversational;
pub mod dialect;

pub use conversational::ConversationalPipeline;
pub use dialect::DialectPipeline;
