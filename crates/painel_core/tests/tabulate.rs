use painel_core::{tabulate, JobRecord, NOT_INFORMED};
use pretty_assertions::assert_eq;

fn record(title: &str, location: &str) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        location: location.to_string(),
        ..JobRecord::default()
    }
}

#[test]
fn tabulate_preserves_order_and_duplicates() {
    let records = vec![
        record("Dev Backend", "São Paulo"),
        record("Analista de Dados", "Recife"),
        record("Dev Backend", "São Paulo"),
    ];

    let table = tabulate(records.clone());

    assert_eq!(table.len(), records.len());
    for (i, expected) in records.iter().enumerate() {
        assert_eq!(&table.rows()[i], expected);
    }
}

#[test]
fn column_accessors_follow_row_order() {
    let table = tabulate(vec![record("A", "X"), record("B", "Y")]);

    assert_eq!(table.titles().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(table.locations().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(
        table.requirements().collect::<Vec<_>>(),
        vec![NOT_INFORMED, NOT_INFORMED]
    );
}
