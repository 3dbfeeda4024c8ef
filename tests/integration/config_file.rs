use predicates::prelude::*;

use crate::common::{Workspace, salon_agg, stdout_json};

#[test]
fn config_file_supplies_inputs_and_settings() {
    let ws = Workspace::with_defaults();
    let config = ws.write(
        "salon.yaml",
        "customers: customers.json\n\
         appointments: appointments.csv\n\
         format: json\n\
         output-mode: groups\n\
         group-by: [Metode Pembayaran]\n\
         min-total: 40000\n",
    );

    let groups = stdout_json(salon_agg().arg("--config").arg(&config));

    assert_eq!(groups.as_array().map(Vec::len), Some(1));
    assert_eq!(groups[0]["Group"], "Metode Pembayaran: Cash");
}

#[test]
fn command_line_overrides_config_file() {
    let ws = Workspace::with_defaults();
    let config = ws.write(
        "salon.json",
        r#"{"customers": "customers.json", "appointments": "appointments.csv", "format": "table", "names": ["Ana"]}"#,
    );

    let rows = stdout_json(salon_agg().arg("--config").arg(&config).args([
        "--format",
        "json",
        "--output-mode",
        "rows",
        "--name",
        "Budi",
    ]));

    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["Nama Customer"], "Budi");
}

#[test]
fn unknown_config_key_is_an_error() {
    let ws = Workspace::with_defaults();
    let config = ws.write("salon.yaml", "customers: customers.json\ncolour: blue\n");

    salon_agg()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));
}
