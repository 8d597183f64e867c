use painel_core::{
    count_top, location_counts, requirement_words, tabulate, title_words, JobRecord, TOP_N,
};
use pretty_assertions::assert_eq;

fn pairs(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    entries.iter().map(|(k, c)| (k.to_string(), *c)).collect()
}

#[test]
fn tokenized_counts_ignore_case_and_keep_first_seen_order_on_ties() {
    let table = count_top(["A b", "a B"], 10, true);
    assert_eq!(table.entries(), pairs(&[("a", 2), ("b", 2)]).as_slice());
}

#[test]
fn higher_counts_come_first() {
    let table = count_top(["java dev", "python dev", "dev sênior"], 10, true);
    assert_eq!(
        table.entries(),
        pairs(&[("dev", 3), ("java", 1), ("python", 1), ("sênior", 1)]).as_slice()
    );
}

#[test]
fn truncation_keeps_first_ten_distinct_values() {
    let values: Vec<String> = (0..15).map(|i| format!("cidade-{i}")).collect();
    let table = count_top(values.iter().map(String::as_str), TOP_N, false);

    assert_eq!(table.len(), 10);
    let keys: Vec<_> = table.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, values[..10].to_vec());
}

#[test]
fn whitespace_runs_do_not_produce_empty_tokens() {
    let table = count_top(["  Dev\t\tBackend  ", "\n"], 10, true);
    assert_eq!(table.entries(), pairs(&[("dev", 1), ("backend", 1)]).as_slice());
}

#[test]
fn empty_input_gives_empty_table() {
    assert!(count_top(Vec::<&str>::new(), 10, true).is_empty());
    assert!(count_top(Vec::<&str>::new(), 10, false).is_empty());
}

#[test]
fn table_helpers_cover_each_column() {
    let table = tabulate(vec![
        JobRecord {
            title: "Dev Backend".into(),
            company: "Acme Corp".into(),
            location: "São Paulo".into(),
            requirement: "Python, SQL".into(),
        },
        JobRecord {
            title: "Dev Frontend".into(),
            location: "São Paulo".into(),
            ..JobRecord::default()
        },
    ]);

    assert_eq!(
        location_counts(&table).entries(),
        pairs(&[("São Paulo", 2)]).as_slice()
    );
    assert_eq!(
        title_words(&table).entries(),
        pairs(&[("dev", 2), ("backend", 1), ("frontend", 1)]).as_slice()
    );
    assert_eq!(
        requirement_words(&table).entries(),
        pairs(&[("python,", 1), ("sql", 1), ("não", 1), ("informado", 1)]).as_slice()
    );
}

#[test]
fn location_counts_keep_only_top_ten() {
    let records = (0..12).map(|i| JobRecord {
        location: format!("Cidade {i}"),
        ..JobRecord::default()
    });
    let table = tabulate(records);
    let counts = location_counts(&table);

    assert_eq!(counts.len(), TOP_N);
    assert_eq!(counts.iter().next(), Some(("Cidade 0", 1)));
    assert_eq!(counts.iter().last(), Some(("Cidade 9", 1)));
}

#[test]
fn busiest_location_survives_truncation() {
    let mut records: Vec<JobRecord> = (0..11)
        .map(|i| JobRecord {
            location: format!("Cidade {i}"),
            ..JobRecord::default()
        })
        .collect();
    for _ in 0..2 {
        records.push(JobRecord {
            location: "Cidade 10".into(),
            ..JobRecord::default()
        });
    }
    let counts = location_counts(&tabulate(records));

    assert_eq!(counts.len(), TOP_N);
    assert_eq!(counts.iter().next(), Some(("Cidade 10", 3)));
}
