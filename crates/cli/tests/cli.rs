use assert_cmd::Command;
use serde_json::Value;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env_remove("BOOKSHELF_ENV")
        .env("BOOKSHELF_CONFIG_DIR", env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn config_prints_effective_settings() {
    let settings = stdout_json(bookshelf().arg("config").env("BOOKSHELF_SERVER__PORT", "9123"));
    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["port"], 9123);
    assert_eq!(settings["books"]["not_found"], "strict");
}

#[test]
fn openapi_prints_book_routes() {
    let doc = stdout_json(bookshelf().arg("openapi"));
    assert!(doc["paths"]["/api/books"]["get"].is_object());
    assert!(doc["paths"]["/api/books/{id}"]["put"].is_object());
}

#[test]
fn unknown_environment_fails() {
    bookshelf()
        .arg("config")
        .env("BOOKSHELF_ENV", "moon")
        .assert()
        .failure();
}
