use predicates::prelude::*;
use serde_json::json;

use crate::common::{Workspace, salon_agg, stdout_json};

#[test]
fn shows_help() {
    salon_agg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("salon-agg"))
        .stdout(predicate::str::contains("--group-by"));
}

#[test]
fn joins_customers_with_their_appointment() {
    let ws = Workspace::with_defaults();

    let rows = stdout_json(ws.command().args(["--format", "json", "--output-mode", "rows"]));

    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2, "C3 has no appointment and C9 no customer");
    assert_eq!(rows[0]["ID Customer"], "C1");
    assert_eq!(rows[0]["Nama Customer"], "Ana");
    assert_eq!(rows[0]["Nama Pegawai"], "Dewi");
    assert_eq!(rows[0]["Pelayanan"], "Haircut");
    assert_eq!(rows[0]["Tanggal"], "2024-05-01");
    assert_eq!(rows[0]["Total"].as_f64(), Some(50_000.0));
    assert_eq!(rows[0]["Metode Pembayaran"], "Cash");
    assert_eq!(rows[1]["Nama Customer"], "Budi");
}

#[test]
fn range_outside_every_total_filters_everything() {
    let ws = Workspace::with_defaults();

    let rows = stdout_json(ws.command().args([
        "--format",
        "json",
        "--output-mode",
        "rows",
        "--min-total",
        "60000",
        "--max-total",
        "100000",
    ]));

    assert_eq!(rows, json!([]));
}

#[test]
fn groups_by_service_with_count_sum_and_histogram() {
    let ws = Workspace::with_defaults();

    let groups =
        stdout_json(ws.command().args(["--format", "json", "--output-mode", "groups", "--group-by", "Pelayanan"]));

    let groups = groups.as_array().expect("array of groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["Group"], "Pelayanan: Haircut");
    assert_eq!(groups[0]["Key"], json!({"Pelayanan": "Haircut"}));
    assert_eq!(groups[0]["Total Transaksi"], 2);
    assert_eq!(groups[0]["Total Pembayaran"].as_f64(), Some(80_000.0));
    assert_eq!(groups[0]["Metode Pembayaran"], json!({"Cash": 1, "Card": 1}));
}

#[test]
fn name_and_service_filters_combine() {
    let ws = Workspace::with_defaults();

    let doc = stdout_json(ws.command().args(["--format", "json", "--name", "Budi,Citra", "--service", "Haircut"]));

    assert_eq!(doc["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["rows"][0]["Nama Customer"], "Budi");
    assert_eq!(doc["groups"][0]["Group"], "Nama Customer: Budi | Pelayanan: Haircut");
}

#[test]
fn empty_group_selection_warns_and_still_prints_rows() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--format", "json", "--group-by", ""])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: select at least one field to group by"))
        .stdout(predicate::str::contains("\"rows\""))
        .stdout(predicate::str::contains("\"groups\"").not());
}

#[test]
fn duplicate_group_field_is_an_error() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--group-by", "Tanggal,date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("selected more than once"));
}

#[test]
fn unknown_group_field_is_rejected_by_the_parser() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--group-by", "Total"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown group-by field 'Total'"));
}

#[test]
fn missing_input_is_reported() {
    salon_agg()
        .args(["--appointments", "appointments.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required input: --customers"));
}

#[test]
fn inverted_range_is_reported() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--min-total", "90000", "--max-total", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid total range"));
}

#[test]
fn empty_customer_export_warns_without_failing() {
    let ws = Workspace::with_defaults();
    ws.write("customers.json", "[]");

    let doc = stdout_json(ws.command().args(["--format", "json"]));
    assert_eq!(doc["rows"], json!([]));
    assert_eq!(doc["groups"], json!([]));

    ws.command()
        .args(["--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: no customer records found"));
}

#[test]
fn later_appointment_for_a_customer_wins() {
    let ws = Workspace::with_defaults();
    let appointments = ws.write(
        "appointments.data",
        "{\"id_cust\": \"C1\", \"pelayanan\": \"Haircut\", \"total\": 50000, \"cara_pembayaran\": \"Cash\"}\n\
         {\"id_cust\": \"C1\", \"pelayanan\": \"Creambath\", \"total\": 75000, \"cara_pembayaran\": \"QRIS\"}\n",
    );

    let rows = stdout_json(
        salon_agg()
            .arg("--customers")
            .arg(ws.path().join("customers.json"))
            .arg("--appointments")
            .arg(&appointments)
            .args(["--appointments-format", "jsonl", "--format", "json", "--output-mode", "rows"]),
    );

    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["Pelayanan"], "Creambath");
    assert_eq!(rows[0]["Total"].as_f64(), Some(75_000.0));
}

#[test]
fn timings_report_join_statistics() {
    let ws = Workspace::with_defaults();

    ws.command()
        .args(["--format", "json", "--timings"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3 customers x 3 appointments"))
        .stderr(predicate::str::contains("timings: load"));
}

#[test]
fn unsupported_extension_needs_an_explicit_format() {
    let ws = Workspace::with_defaults();
    let customers = ws.write("customers.xml", "<customers/>");

    salon_agg()
        .arg("--customers")
        .arg(&customers)
        .arg("--appointments")
        .arg(ws.path().join("appointments.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported record format"));
}

#[test]
fn non_numeric_total_fails_the_range_filter() {
    let ws = Workspace::with_defaults();
    ws.write("appointments.csv", "id_cust,pelayanan,cara_pembayaran,total\nC1,Haircut,Cash,50000\nC2,Haircut,,gratis\n");

    let groups = stdout_json(ws.command().args(["--format", "json", "--output-mode", "groups", "--group-by", "pelayanan"]));

    assert_eq!(groups[0]["Total Transaksi"], 1);
    assert_eq!(groups[0]["Total Pembayaran"].as_f64(), Some(50_000.0));
}
