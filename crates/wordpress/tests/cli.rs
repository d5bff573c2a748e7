use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn without_wp_env(cmd: &mut Command) -> &mut Command {
    cmd.env_remove("WORDPRESS_USERNAME")
        .env_remove("WORDPRESS_PASSWORD")
        .env_remove("WORDPRESS_SITE_URL")
}

#[test]
fn categories_reports_every_missing_credential() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("wp-categories").unwrap();
    without_wp_env(cmd.current_dir(dir.path()))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("WORDPRESS_USERNAME")
                .and(predicate::str::contains("WORDPRESS_PASSWORD"))
                .and(predicate::str::contains("WORDPRESS_SITE_URL")),
        );
}

#[test]
fn categories_flags_cover_missing_environment() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("wp-categories").unwrap();
    without_wp_env(cmd.current_dir(dir.path()))
        .args(["--wp-username", "admin", "--wp-password", "secret"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("WORDPRESS_SITE_URL")
                .and(predicate::str::contains("WORDPRESS_USERNAME").not()),
        );
}

#[test]
fn publish_requires_the_api_key_before_reading_the_transcript() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("talk.txt"), "hello").unwrap();

    let mut cmd = Command::cargo_bin("wp-publish").unwrap();
    without_wp_env(cmd.current_dir(dir.path()))
        .env_remove("OPENAI_KEY")
        .arg("talk.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_KEY"));
}
