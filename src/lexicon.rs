//! # Lexicon
//! Four keyword lists (positive, negative, intensifiers, negations) used by the
//! feature extractor.
//!
//! - Words are stored trimmed and lower-cased.
//! - Lists are expected to be disjoint. Overlap is a data error; `overlaps()` reports
//!   it so loaders can warn, but lookup never fails because of it.
//! - `portuguese()` is the built-in seed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keyword category a token can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Positive,
    Negative,
    Intensifier,
    Negation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "LexiconLists")]
pub struct Lexicon {
    pub positive: BTreeSet<String>,
    pub negative: BTreeSet<String>,
    pub intensifiers: BTreeSet<String>,
    pub negations: BTreeSet<String>,
}

/// On-disk shape (TOML or JSON): four plain string arrays.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconLists {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub negations: Vec<String>,
}

impl From<LexiconLists> for Lexicon {
    fn from(l: LexiconLists) -> Self {
        Self {
            positive: clean(l.positive),
            negative: clean(l.negative),
            intensifiers: clean(l.intensifiers),
            negations: clean(l.negations),
        }
    }
}

impl Lexicon {
    pub fn new<I, S>(positive: I, negative: I, intensifiers: I, negations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collect = |it: I| it.into_iter().map(Into::into).collect::<Vec<String>>();
        LexiconLists {
            positive: collect(positive),
            negative: collect(negative),
            intensifiers: collect(intensifiers),
            negations: collect(negations),
        }
        .into()
    }

    /// Built-in Portuguese seed.
    pub fn portuguese() -> Self {
        Self::new(
            vec![
                "ótimo",
                "excelente",
                "incrível",
                "fantástico",
                "maravilhoso",
                "feliz",
                "surpreendente",
                "bonito",
                "gostei",
            ],
            vec![
                "péssimo",
                "horrível",
                "terrível",
                "desagradável",
                "decepcionante",
                "triste",
                "frustrante",
            ],
            vec![
                "muito",
                "bastante",
                "extremamente",
                "incrivelmente",
                "realmente",
                "completamente",
            ],
            vec!["não", "jamais", "nenhum", "nem", "nada"],
        )
    }

    /// Category of an already-normalized token, if any.
    pub fn category(&self, token: &str) -> Option<Category> {
        if self.positive.contains(token) {
            Some(Category::Positive)
        } else if self.negative.contains(token) {
            Some(Category::Negative)
        } else if self.intensifiers.contains(token) {
            Some(Category::Intensifier)
        } else if self.negations.contains(token) {
            Some(Category::Negation)
        } else {
            None
        }
    }

    /// Words listed in more than one category (sorted, distinct).
    pub fn overlaps(&self) -> Vec<String> {
        let lists = [
            &self.positive,
            &self.negative,
            &self.intensifiers,
            &self.negations,
        ];
        let mut out = BTreeSet::new();
        for (i, a) in lists.iter().enumerate() {
            for b in lists.iter().skip(i + 1) {
                out.extend(a.intersection(b).cloned());
            }
        }
        out.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.intensifiers.len() + self.negations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn clean(words: Vec<String>) -> BTreeSet<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_seed_is_disjoint_and_complete() {
        let lx = Lexicon::portuguese();
        assert!(lx.overlaps().is_empty());
        assert_eq!(lx.positive.len(), 9);
        assert_eq!(lx.negative.len(), 7);
        assert_eq!(lx.intensifiers.len(), 6);
        assert_eq!(lx.negations.len(), 5);
        assert_eq!(lx.len(), 27);
    }

    #[test]
    fn lookup_by_category() {
        let lx = Lexicon::portuguese();
        assert_eq!(lx.category("gostei"), Some(Category::Positive));
        assert_eq!(lx.category("péssimo"), Some(Category::Negative));
        assert_eq!(lx.category("muito"), Some(Category::Intensifier));
        assert_eq!(lx.category("não"), Some(Category::Negation));
        assert_eq!(lx.category("livro"), None);
    }

    #[test]
    fn words_are_trimmed_lowercased_and_deduped() {
        let lx = Lexicon::new(vec![" Bom ", "bom", ""], vec![], vec![], vec!["NÃO"]);
        assert_eq!(lx.positive.len(), 1);
        assert!(lx.positive.contains("bom"));
        assert!(lx.negations.contains("não"));
    }

    #[test]
    fn overlaps_are_reported() {
        let lx = Lexicon::new(vec!["bom", "nada"], vec!["mau"], vec![], vec!["nada"]);
        assert_eq!(lx.overlaps(), vec!["nada".to_string()]);
    }

    #[test]
    fn deserializes_from_plain_lists() {
        let lx: Lexicon = serde_json::from_str(
            r#"{"positive":["Great"],"negative":["awful"],"negations":["not"]}"#,
        )
        .unwrap();
        assert!(lx.positive.contains("great"));
        assert!(lx.intensifiers.is_empty());
        assert_eq!(lx.category("not"), Some(Category::Negation));
    }

    #[test]
    fn misspelled_list_name_fails_to_deserialize() {
        let res: Result<Lexicon, _> =
            serde_json::from_str(r#"{"positive":["gostei"],"negation":["não"]}"#);
        assert!(res.is_err());
    }
}
