//! WordPiece learner backed by the `tokenizers` crate.
//!
//! Mirrors the BERT vocabulary recipe: NFD normalization, lower-casing,
//! punctuation-aware pre-tokenization and `##` continuation prefixes.
//! Reserved tokens are passed as special tokens, which gives them the
//! lowest token ids and therefore the head of the vocabulary.
use tokenizers::models::wordpiece::{WordPiece, WordPieceTrainerBuilder};
use tokenizers::models::{ModelWrapper, TrainerWrapper};
use tokenizers::normalizers::{Lowercase, Sequence, NFD};
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{AddedToken, Tokenizer};

use crate::error::Error;

use super::SubwordLearner;

pub struct WordpieceLearner;

impl SubwordLearner for WordpieceLearner {
    fn learn(
        &self,
        sentences: Vec<String>,
        reserved: &[String],
        vocab_size: usize,
    ) -> Result<Vec<String>, Error> {
        let model = WordPiece::builder()
            .unk_token("[UNK]".to_string())
            .continuing_subword_prefix("##".to_string())
            .build()?;

        let mut tokenizer = Tokenizer::new(ModelWrapper::WordPiece(model));
        tokenizer.with_normalizer(Some(Sequence::new(vec![NFD.into(), Lowercase.into()])));
        tokenizer.with_pre_tokenizer(Some(BertPreTokenizer));

        let special_tokens = reserved
            .iter()
            .map(|token| AddedToken::from(token.as_str(), true))
            .collect();
        let trainer = WordPieceTrainerBuilder::new()
            .vocab_size(vocab_size)
            .special_tokens(special_tokens)
            .continuing_subword_prefix("##".to_string())
            .show_progress(false)
            .build();
        let mut trainer = TrainerWrapper::from(trainer);

        tokenizer.train(&mut trainer, sentences.into_iter())?;

        // vocabulary order is token id order
        let mut entries: Vec<(String, u32)> = tokenizer.get_vocab(true).into_iter().collect();
        entries.sort_by_key(|(_, id)| *id);
        Ok(entries.into_iter().map(|(token, _)| token).collect())
    }
}
