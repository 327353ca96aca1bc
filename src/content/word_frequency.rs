//! Frequency of the most common Quranic words.
//!
//! Counts are approximate occurrence counts across the whole text; the
//! cumulative column shows how much of the text a learner covers after
//! mastering each word in order.

/// One row of the word-count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount {
    pub arabic: &'static str,
    pub urdu: &'static str,
    pub english: &'static str,
    pub count: u32,
}

/// A word with its share of the text and the running total up to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeRow {
    pub word: &'static WordCount,
    pub percent: f64,
    pub cumulative_count: u32,
    pub cumulative_percent: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct WordFrequencyTable {
    pub total_words: u32,
    pub rows: &'static [WordCount],
}

impl WordFrequencyTable {
    /// Per-row and running percentages, in table order.
    ///
    /// A zero `total_words` yields zero percentages.
    pub fn cumulative(&self) -> Vec<CumulativeRow> {
        let mut running = 0u32;
        self.rows
            .iter()
            .map(|word| {
                running = running.saturating_add(word.count);
                CumulativeRow {
                    word,
                    percent: percent_of(word.count, self.total_words),
                    cumulative_count: running,
                    cumulative_percent: percent_of(running, self.total_words),
                }
            })
            .collect()
    }

    /// Share of the text covered by every word in the table.
    pub fn coverage_percent(&self) -> f64 {
        let covered = self.rows.iter().fold(0u32, |acc, w| acc.saturating_add(w.count));
        percent_of(covered, self.total_words)
    }
}

fn percent_of(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(total)
    }
}

const QURAN_WORDS: &[WordCount] = &[
    WordCount { arabic: "مِنْ", urdu: "سے", english: "from", count: 3226 },
    WordCount { arabic: "ٱللَّه", urdu: "اللہ", english: "Allah", count: 2699 },
    WordCount { arabic: "قَالَ", urdu: "اس نے کہا", english: "he said", count: 1722 },
    WordCount { arabic: "فِي", urdu: "میں", english: "in", count: 1701 },
    WordCount { arabic: "مَا", urdu: "جو / نہیں", english: "what / not", count: 1662 },
    WordCount { arabic: "ٱلَّذِي", urdu: "جو (وہ جس نے)", english: "who / which", count: 1464 },
    WordCount { arabic: "كَانَ", urdu: "تھا", english: "was", count: 1390 },
    WordCount { arabic: "لَا", urdu: "نہیں", english: "no / not", count: 1361 },
    WordCount { arabic: "إِنَّ", urdu: "بے شک", english: "indeed", count: 1223 },
    WordCount { arabic: "عَلَىٰ", urdu: "پر", english: "on", count: 1098 },
    WordCount { arabic: "رَبّ", urdu: "رب", english: "Lord", count: 975 },
    WordCount { arabic: "إِلَىٰ", urdu: "کی طرف", english: "to", count: 742 },
];

/// The word table shown on the word-frequency screen.
pub fn quran_word_frequency() -> WordFrequencyTable {
    WordFrequencyTable {
        total_words: 77_797,
        rows: QURAN_WORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[WordCount] = &[
        WordCount { arabic: "a", urdu: "a", english: "a", count: 50 },
        WordCount { arabic: "b", urdu: "b", english: "b", count: 30 },
        WordCount { arabic: "c", urdu: "c", english: "c", count: 20 },
    ];

    #[test]
    fn test_cumulative_percentages() {
        let table = WordFrequencyTable { total_words: 200, rows: SAMPLE };
        let rows = table.cumulative();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].percent, 25.0);
        assert_eq!(rows[0].cumulative_percent, 25.0);
        assert_eq!(rows[1].cumulative_count, 80);
        assert_eq!(rows[1].cumulative_percent, 40.0);
        assert_eq!(rows[2].cumulative_percent, 50.0);
        assert_eq!(table.coverage_percent(), 50.0);
    }

    #[test]
    fn test_zero_total() {
        let table = WordFrequencyTable { total_words: 0, rows: SAMPLE };
        assert!(table.cumulative().iter().all(|r| r.percent == 0.0 && r.cumulative_percent == 0.0));
        assert_eq!(table.coverage_percent(), 0.0);
    }

    #[test]
    fn test_quran_table_is_monotonic() {
        let rows = quran_word_frequency().cumulative();
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[1].cumulative_percent > pair[0].cumulative_percent);
        }
        for pair in QURAN_WORDS.windows(2) {
            assert!(pair[0].count >= pair[1].count, "table should be ordered by frequency");
        }
        let last = rows.last().unwrap();
        assert!(last.cumulative_percent > 0.0 && last.cumulative_percent < 100.0);
    }
}
