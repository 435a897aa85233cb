//! TF-IDF vectorizer
//!
//! Turns an ordered list of entries into:
//! - `vocab`: every distinct token, sorted lexicographically
//! - `idf`: `ln(N / df)` per token
//! - `vectors`: one sparse vector per entry, `tf * idf` keyed by vocab position
//!
//! Term frequency is length-normalized (`count / tokens_in_entry`). The
//! whole computation is single-pass and order-stable, so identical input
//! always yields identical vocab order and bit-identical weights.

use crate::scorer::SparseVector;
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Fitted TF-IDF model for one database
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TfIdfModel {
    /// Sorted, deduplicated tokens
    pub vocab: Vec<String>,
    /// Inverse document frequency per token
    pub idf: BTreeMap<String, f64>,
    /// One vector per entry, aligned by position
    pub vectors: Vec<SparseVector>,
}

impl TfIdfModel {
    /// Fit the model on `entries`
    pub fn fit<S: AsRef<str>>(entries: &[S]) -> Self {
        let docs: Vec<Vec<String>> = entries.iter().map(|e| tokenize(e.as_ref())).collect();

        let vocab: Vec<String> = docs
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let word_idx: HashMap<&str, u32> = vocab
            .iter()
            .enumerate()
            .map(|(i, w)| (w.as_str(), i as u32))
            .collect();

        // Document frequency: entries containing the token at least once
        let mut df = vec![0usize; vocab.len()];
        for doc in &docs {
            let distinct: BTreeSet<u32> = doc.iter().map(|w| word_idx[w.as_str()]).collect();
            for i in distinct {
                df[i as usize] += 1;
            }
        }

        let n = docs.len() as f64;
        let idf_by_pos: Vec<f64> = df.iter().map(|&d| idf(n, d)).collect();

        let vectors = docs
            .iter()
            .map(|doc| weigh(doc, &word_idx, &idf_by_pos))
            .collect();

        let idf = vocab
            .iter()
            .cloned()
            .zip(idf_by_pos.iter().copied())
            .collect();

        TfIdfModel {
            vocab,
            idf,
            vectors,
        }
    }
}

/// `ln(N / df)`, 0 when the token occurs nowhere
pub fn idf(n_docs: f64, df: usize) -> f64 {
    if df == 0 {
        0.0
    } else {
        (n_docs / df as f64).ln()
    }
}

/// Length-normalized term frequencies of `tokens`, in first-seen order
///
/// Tokens rejected by `keep` are dropped from the counts but still count
/// toward the length; the query side relies on this.
pub(crate) fn term_frequencies<'a, F>(tokens: &'a [String], mut keep: F) -> Vec<(&'a str, f64)>
where
    F: FnMut(&str) -> bool,
{
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for t in tokens {
        let t = t.as_str();
        if !keep(t) {
            continue;
        }
        match seen.get(t) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                seen.insert(t, counts.len());
                counts.push((t, 1));
            }
        }
    }
    let len = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(t, c)| (t, c as f64 / len))
        .collect()
}

fn weigh(doc: &[String], word_idx: &HashMap<&str, u32>, idf_by_pos: &[f64]) -> SparseVector {
    term_frequencies(doc, |_| true)
        .into_iter()
        .map(|(w, tf)| {
            let pos = word_idx[w];
            (pos, tf * idf_by_pos[pos as usize])
        })
        .collect()
}
