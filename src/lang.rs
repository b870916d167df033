//! Dialect tags and dataset descriptors.
//!
//! The corpus covers the standard variety (서울, sourced from the 한국어 대화
//! spreadsheet dataset) and five regional dialects sourced from the AIHub
//! 방언 발화 JSON datasets. The tag set is fixed.

/// A source dataset: the directory it is distributed under, and the tag
/// used for its output record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    pub dir_name: &'static str,
    pub tag: &'static str,
}

/// Every known dialect tag, in reserved-token order.
pub const TAGS: [&str; 6] = ["서울", "강원", "경상", "전라", "제주", "충청"];

/// The conversational (standard Korean) dataset. Its zip sits directly
/// under the dataset directory and contains flat xlsx files.
pub const CONVERSATIONAL: Dataset = Dataset {
    dir_name: "한국어 대화",
    tag: "서울",
};

/// The five regional dialect datasets. Each zip sits under a `Training`
/// subdirectory and contains arbitrarily nested json files.
pub const DIALECTS: [Dataset; 5] = [
    Dataset {
        dir_name: "한국어 방언 발화 데이터(강원도)",
        tag: "강원",
    },
    Dataset {
        dir_name: "한국어 방언 발화 데이터(경상도)",
        tag: "경상",
    },
    Dataset {
        dir_name: "한국어 방언 발화 데이터(전라도)",
        tag: "전라",
    },
    Dataset {
        dir_name: "한국어 방언 발화 데이터(제주도)",
        tag: "제주",
    },
    Dataset {
        dir_name: "한국어 방언 발화 데이터(충청도)",
        tag: "충청",
    },
];

/// Reserved vocabulary tokens: padding, unknown, end, then one bracketed
/// marker per tag. Order is fixed and must match the head of every
/// generated vocabulary file.
pub fn reserved_tokens() -> Vec<String> {
    let mut tokens = vec!["[PAD]".to_string(), "[UNK]".to_string(), "[END]".to_string()];
    tokens.extend(TAGS.iter().map(|tag| format!("[{}]", tag)));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_tokens_order() {
        let tokens = reserved_tokens();
        assert_eq!(
            tokens,
            vec![
                "[PAD]", "[UNK]", "[END]", "[서울]", "[강원]", "[경상]", "[전라]", "[제주]",
                "[충청]"
            ]
        );
    }

    #[test]
    fn dialect_tags_are_known() {
        for dataset in DIALECTS.iter() {
            assert!(TAGS.contains(&dataset.tag));
        }
        assert!(TAGS.contains(&CONVERSATIONAL.tag));
    }
}
