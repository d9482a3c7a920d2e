use assert_cmd::Command; // Bring Command into scope
use predicates::prelude::*; // Bring predicate traits into scope
use std::fs;
use tempfile::tempdir;

#[test]
fn test_hash_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file = temp_dir.path().join("abc.txt");
    fs::write(&file, "abc")?;

    Command::cargo_bin("filekit")?
        .arg("hash")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a9993e364706816aba3e25717850c26c9cd0d89d"));

    Ok(())
}

#[test]
fn test_copy_and_lines_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let from = temp_dir.path().join("from.txt");
    let to = temp_dir.path().join("to.txt");
    fs::write(&from, "first\nsecond\n")?;

    Command::cargo_bin("filekit")?
        .arg("copy")
        .arg(&from)
        .arg(&to)
        .assert()
        .success()
        .stdout(predicate::str::contains("copied 13 bytes"));

    Command::cargo_bin("filekit")?
        .arg("lines")
        .arg(&to)
        .assert()
        .success()
        .stdout("first\nsecond\n");

    Ok(())
}

#[test]
fn test_delete_command_removes_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let tree = temp_dir.path().join("tree");
    fs::create_dir_all(tree.join("a/b"))?;
    fs::write(tree.join("a/b/c.txt"), "x")?;

    Command::cargo_bin("filekit")?.arg("delete").arg(&tree).assert().success();

    assert!(!tree.exists());
    Ok(())
}

#[test]
fn test_name_command() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("filekit")?
        .args(["name", "out/gen/Parser.tbl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Parser"))
        .stdout(predicate::str::contains("extension: tbl"));

    Ok(())
}

#[test]
fn test_list_command_with_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    fs::create_dir_all(temp_dir.path().join("pkg"))?;
    fs::write(temp_dir.path().join("top.txt"), "")?;
    fs::write(temp_dir.path().join("pkg/inner.TXT"), "")?;
    fs::write(temp_dir.path().join("pkg/skip.log"), "")?;

    Command::cargo_bin("filekit")?
        .arg("list")
        .arg(temp_dir.path())
        .args(["--recursive", "--ext", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inner.TXT"))
        .stdout(predicate::str::contains("top.txt"))
        .stdout(predicate::str::contains("skip.log").not());

    Ok(())
}

#[test]
fn test_temp_file_honours_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let config = temp_dir.path().join("filekit.toml");
    let root = temp_dir.path().join("scratch");
    fs::create_dir_all(&root)?;
    fs::write(
        &config,
        format!("temp_root = {:?}\ntemp_file_prefix = \"cli\"\n", root.display().to_string()),
    )?;

    let output = Command::cargo_bin("filekit")?
        .arg("--config")
        .arg(&config)
        .args(["temp-file", "--suffix", "out"])
        .output()?;
    assert!(output.status.success());

    let created = std::path::PathBuf::from(String::from_utf8(output.stdout)?.trim());
    assert!(created.is_file());
    assert_eq!(created.parent(), Some(root.as_path()));
    let name = created.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("cli") && name.ends_with(".out"), "unexpected name {}", name);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_relative_command() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("filekit")?
        .args(["relative", "/work/project", "/work/project/src/Main.def"])
        .assert()
        .success()
        .stdout("src/Main.def\n");

    Command::cargo_bin("filekit")?
        .args(["relative", "/work/project", "/elsewhere/Main.def"])
        .assert()
        .success()
        .stdout("/elsewhere/Main.def\n");

    Ok(())
}

#[test]
fn test_error_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    let output = Command::cargo_bin("filekit")?
        .arg("hash")
        .arg(temp_dir.path().join("missing.bin"))
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("open_read").count(), 1, "stderr was: {}", stderr);

    Ok(())
}

#[test]
fn test_missing_file_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    Command::cargo_bin("filekit")?
        .arg("hash")
        .arg(temp_dir.path().join("missing.bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("filekit:"))
        .stderr(predicate::str::contains("open_read"));

    Ok(())
}

#[test]
fn test_resource_command() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("filekit")?
        .arg("resource")
        .assert()
        .success()
        .stdout(predicate::str::contains("filekit"));

    Ok(())
}
