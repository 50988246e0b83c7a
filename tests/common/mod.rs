use assert_cmd::Command;
use assert_cmd::cargo_bin;
use std::io::Write;
use tempfile::NamedTempFile;

/// The counter binary with the simulated kitchen delay switched off.
pub fn counter() -> Command {
    let mut cmd = Command::new(cargo_bin!("kasir"));
    cmd.env_remove("RUST_LOG")
        .arg("--processing-delay-ms")
        .arg("0");
    cmd
}

pub fn write_menu(rows: &[[&str; 3]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "code,name,price").unwrap();
    for [code, name, price] in rows {
        writeln!(file, "{code},{name},{price}").unwrap();
    }
    file.flush().unwrap();
    file
}
