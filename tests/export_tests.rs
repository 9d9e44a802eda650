use predicates::str::contains;

mod common;
use common::{init_db_with_data, jt, setup_test_db, temp_out};

#[test]
fn test_export_companies_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    jt().args([
        "--db", &db_path, "export", "--entity", "company", "--format", "csv", "--file", &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Exported 1 record(s)"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("company_id"));
    assert!(content.contains("Acme"));
}

#[test]
fn test_export_roles_json_keeps_nulls() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    jt().args([
        "--db", &db_path, "export", "--entity", "role", "--format", "json", "--file", &out,
        "--force",
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("Backend Engineer"));
    // unset optional fields stay null in JSON
    assert!(content.contains("null"));
}

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");
    init_db_with_data(&db_path);

    jt().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup written"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compressed_gets_gz_suffix() {
    let db_path = setup_test_db("backup_gz");
    let out = temp_out("backup_gz", "sqlite");
    init_db_with_data(&db_path);

    jt().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(std::path::Path::new(&format!("{out}.gz")).exists());
}

#[test]
fn test_backup_requires_absolute_destination() {
    let db_path = setup_test_db("backup_rel");
    init_db_with_data(&db_path);

    jt().args(["--db", &db_path, "backup", "--file", "relative.sqlite"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}
