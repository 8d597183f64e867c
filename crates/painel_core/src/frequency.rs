use std::collections::HashMap;

use crate::JobTable;

/// Number of entries kept by the word-frequency tables.
pub const TOP_N: usize = 10;

/// `(key, count)` pairs sorted by descending count; ties keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest count in the table, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.entries.first().map(|(_, count)| *count).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

/// Counts keys and keeps the `top_n` most frequent.
///
/// With `tokenize` off every value is one key. With it on the values are
/// joined by a single space, lowercased and split on whitespace runs, so each
/// word is a key.
pub fn count_top<'a, I>(values: I, top_n: usize, tokenize: bool) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tally = Tally::default();
    if tokenize {
        let joined = values.into_iter().collect::<Vec<_>>().join(" ").to_lowercase();
        for token in joined.split_whitespace() {
            tally.add(token);
        }
    } else {
        for value in values {
            tally.add(value);
        }
    }
    tally.into_table(top_n)
}

/// Jobs per location for the bar chart, top [`TOP_N`] locations.
pub fn location_counts(table: &JobTable) -> FrequencyTable {
    count_top(table.locations(), TOP_N, false)
}

/// Most common words across all job titles.
pub fn title_words(table: &JobTable) -> FrequencyTable {
    count_top(table.titles(), TOP_N, true)
}

/// Most common words across all requirement snippets.
pub fn requirement_words(table: &JobTable) -> FrequencyTable {
    count_top(table.requirements(), TOP_N, true)
}

#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    fn into_table(self, top_n: usize) -> FrequencyTable {
        let mut entries = self.entries;
        // Stable sort: equal counts stay in first-occurrence order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(top_n);
        FrequencyTable { entries }
    }
}
