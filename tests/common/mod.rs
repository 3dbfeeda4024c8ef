// tests/common/mod.rs
//! Shared fixtures for the CLI tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const CUSTOMERS_JSON: &str = r#"[
  {"_id": {"$oid": "6650a1"}, "id_cust": "C1", "nama_cust": "Ana", "nama_pegawai": "Dewi"},
  {"_id": {"$oid": "6650a2"}, "id_cust": "C2", "nama_cust": "Budi", "nama_pegawai": "Eka"},
  {"_id": {"$oid": "6650a3"}, "id_cust": "C3", "nama_cust": "Citra", "nama_pegawai": "Dewi"}
]"#;

pub const APPOINTMENTS_CSV: &str = "\
id_appointment,id_cust,id_pegawai,pelayanan,tanggal,cara_pembayaran,total
A1,C1,P1,Haircut,2024-05-01,Cash,50000
A2,C2,P2,Haircut,2024-05-02,Card,30000
A3,C9,P1,Facial,2024-05-03,Cash,90000
";

pub fn salon_agg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_salon-agg"))
}

/// A temporary directory holding input files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    /// The default customer and appointment exports.
    pub fn with_defaults() -> Self {
        let ws = Self::new();
        ws.write("customers.json", CUSTOMERS_JSON);
        ws.write("appointments.csv", APPOINTMENTS_CSV);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Command preloaded with `--customers`/`--appointments` for the default
    /// fixture files.
    pub fn command(&self) -> Command {
        let mut cmd = salon_agg();
        cmd.arg("--customers")
            .arg(self.path().join("customers.json"))
            .arg("--appointments")
            .arg(self.path().join("appointments.csv"));
        cmd
    }
}

pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}
