use std::fs;

use painel_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rewriting_the_page_replaces_it() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("painel_vagas.html", "<p>1</p>").unwrap();
    assert_eq!(first.file_name().unwrap(), "painel_vagas.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "<p>1</p>");

    let second = writer.write("painel_vagas.html", "<p>2</p>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "<p>2</p>");
}

#[test]
fn file_in_place_of_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("painel_vagas.html", "data").is_err());
    assert!(!temp.path().join("painel_vagas.html").exists());
}
