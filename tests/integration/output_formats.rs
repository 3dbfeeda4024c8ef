use predicates::prelude::*;

use crate::common::Workspace;

fn stdout_of(ws: &Workspace, args: &[&str]) -> String {
    let output = ws.command().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn table_shows_rupiah_and_group_labels() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &[]);

    assert!(text.contains("Hasil Agregasi (Filtered)"));
    assert!(text.contains("Hasil Analisis Agregasi (Nama Customer, Pelayanan)"));
    assert!(text.contains("Nama Customer: Ana | Pelayanan: Haircut"));
    assert!(text.contains("Rp50,000"));
    assert!(text.contains("Rp30,000"));
    assert!(text.contains("[salon-agg] 2 rows matched the filters, 2 groups."));
}

#[test]
fn csv_rows_use_raw_numbers() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &["--format", "csv", "--output-mode", "rows"]);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "ID Customer,Nama Customer,Nama Pegawai,Pelayanan,Tanggal,Total,Metode Pembayaran");
    assert_eq!(lines[1], "C1,Ana,Dewi,Haircut,2024-05-01,50000,Cash");
    assert_eq!(lines.len(), 3);
}

#[test]
fn tsv_groups_have_one_column_per_field() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &["--format", "tsv", "--output-mode", "groups", "--group-by", "pelayanan"]);

    assert_eq!(
        text,
        "Pelayanan\tTotal Transaksi\tTotal Pembayaran\tMetode Pembayaran\nHaircut\t2\t80000\tCash: 1, Card: 1\n"
    );
}

#[test]
fn markdown_has_titled_sections() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &["--format", "md", "--group-by", "payment"]);

    assert!(text.contains("### Hasil Agregasi (Filtered)"));
    assert!(text.contains("### Hasil Analisis Agregasi (Metode Pembayaran)"));
    assert!(text.contains("| Metode Pembayaran: Cash | 1 | Rp50,000 | Cash: 1 |"));
}

#[test]
fn jsonl_tags_each_line() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &["--format", "jsonl", "--group-by", "pelayanan"]);
    let kinds: Vec<String> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("each line is JSON");
            value["type"].as_str().unwrap_or_default().to_string()
        })
        .collect();

    assert_eq!(kinds, vec!["row", "row", "group"]);
}

#[test]
fn yaml_output_is_produced() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--format", "yaml", "--output-mode", "rows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nama Customer: Ana"))
        .stdout(predicate::str::contains("Total: 50000.0"));
}

#[test]
fn choices_are_distinct_and_sorted() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(&ws, &["--format", "jsonl", "--output-mode", "choices"]);

    assert_eq!(
        text,
        "{\"type\":\"name\",\"value\":\"Ana\"}\n{\"type\":\"name\",\"value\":\"Budi\"}\n{\"type\":\"service\",\"value\":\"Haircut\"}\n"
    );
}

#[test]
fn groups_can_be_sorted_and_limited() {
    let ws = Workspace::with_defaults();

    let text = stdout_of(
        &ws,
        &["--format", "csv", "--output-mode", "groups", "--group-by", "name", "--sort-groups", "total:asc", "--top", "1"],
    );

    assert_eq!(text.lines().nth(1), Some("Budi,1,30000,Card: 1"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn zero_top_is_rejected() {
    let ws = Workspace::with_defaults();

    ws.command().args(["--top", "0"]).assert().failure().stderr(predicate::str::contains("at least 1"));
}
