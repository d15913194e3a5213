//! Integration tests for the update-changelog binary.
//!
//! These exercise the full CLI against real git repositories, with the
//! GitHub API served by a local mock server.

mod common;

use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{released_repo, TestRepo};

/// Get a command for running the binary, isolated from the user's config.
fn update_changelog(repo: &TestRepo, api: &str) -> Command {
    let mut cmd = Command::cargo_bin("update-changelog").unwrap();
    cmd.current_dir(repo.path())
        .env("CHANGELOG_GITHUB_API_URL", api)
        .env("GITHUB_CHANGELOG_CONFIG", repo.path().join("no-such-config.toml"))
        .env_remove("CHANGELOG_GITHUB_TOKEN");
    cmd
}

async fn mount_github(server: &MockServer, feature: &str, fix: &str) {
    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "full_name": "octo/widgets",
            "html_url": "https://github.com/octo/widgets"
        })))
        .mount(server)
        .await;

    let pr = |number: u64, title: &str, sha: &str, merged_at: Option<&str>| {
        json!({
            "number": number,
            "title": title,
            "html_url": format!("https://github.com/octo/widgets/pull/{}", number),
            "merged_at": merged_at,
            "head": { "sha": sha },
            "base": { "repo": { "html_url": "https://github.com/octo/widgets" } }
        })
    };

    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pr(43, "Closed without merge", fix, None),
            pr(41, "Add feature", feature, Some("2023-12-20T09:00:00Z")),
            pr(42, "Fix bug", fix, Some("2023-12-28T17:30:00Z")),
        ])))
        .mount(server)
        .await;
}

#[test]
fn help_flag_works() {
    Command::cargo_bin("update-changelog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--old-version"))
        .stdout(predicate::str::contains("CHANGELOG_GITHUB_TOKEN"));
}

#[test]
fn new_version_is_required() {
    Command::cargo_bin("update-changelog")
        .unwrap()
        .assert()
        .failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_with_manifest_and_origin() {
    let (repo, feature, fix) = released_repo();
    repo.add_remote("origin", "git@github.com:octo/widgets.git");
    repo.write("package.json", r#"{"name": "widgets", "version": "1.2.0"}"#);
    repo.write(
        "CHANGELOG.md",
        "Unreleased\n==========\n\n * Note from the team\n\nChanges in [1.2.0](x) (2023-12-01)\n",
    );

    let server = MockServer::start().await;
    mount_github(&server, &feature, &fix).await;

    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let title = format!(
        "Changes in [1.3.0](https://github.com/octo/widgets/releases/tag/v1.3.0) ({})",
        today
    );

    update_changelog(&repo, &server.uri())
        .arg("1.3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains(title.as_str()))
        .stdout(predicate::str::contains("-".repeat(79)));

    let written = repo.read("CHANGELOG.md");
    let expected = format!(
        "{title}\n{underline}\n\
         [Full Changelog](https://github.com/octo/widgets/compare/v1.2.0...v1.3.0)\n\
         \n \
         * Note from the team\n\
         \n \
         * Fix bug\n   [\\#42](https://github.com/octo/widgets/pull/42)\n \
         * Add feature\n   [\\#41](https://github.com/octo/widgets/pull/41)\n\
         \n\
         Changes in [1.2.0](x) (2023-12-01)\n",
        title = title,
        underline = "=".repeat(title.chars().count()),
    );
    assert_eq!(written, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_flags_override_detection() {
    let (repo, feature, fix) = released_repo();

    let server = MockServer::start().await;
    mount_github(&server, &feature, &fix).await;

    update_changelog(&repo, &server.uri())
        .args(["-o", "1.2.0", "-r", "octo/widgets", "-f", "docs/CHANGES.md", "-q"])
        .arg("1.3.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs/CHANGES.md"));

    std::fs::create_dir(repo.path().join("docs")).unwrap();
    update_changelog(&repo, &server.uri())
        .args(["-o", "1.2.0", "-r", "octo/widgets", "-f", "docs/CHANGES.md", "-q"])
        .arg("1.3.0")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = repo.read("docs/CHANGES.md");
    assert!(written.contains(" * Fix bug"));
    assert!(!written.contains("Closed without merge"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_repository_fails_before_network() {
    let (repo, _, _) = released_repo();
    let server = MockServer::start().await;

    update_changelog(&repo, &server.uri())
        .args(["--old-version", "1.2.0", "1.3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not determine the repository"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
    assert!(!repo.path().join("CHANGELOG.md").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_manifest_is_reported() {
    let (repo, _, _) = released_repo();
    let server = MockServer::start().await;

    update_changelog(&repo, &server.uri())
        .args(["-r", "octo/widgets", "1.3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_logs_to_stderr() {
    let (repo, feature, fix) = released_repo();
    let server = MockServer::start().await;
    mount_github(&server, &feature, &fix).await;

    update_changelog(&repo, &server.uri())
        .args(["-d", "-o", "1.2.0", "-r", "octo/widgets", "1.3.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug] running git rev-list v1.2.0..HEAD"))
        .stderr(predicate::str::contains("2 of 3 closed pull requests merged since v1.2.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_token_is_anonymous() {
    let (repo, feature, fix) = released_repo();
    let server = MockServer::start().await;
    mount_github(&server, &feature, &fix).await;

    update_changelog(&repo, &server.uri())
        .env("CHANGELOG_GITHUB_TOKEN", "   ")
        .args(["-d", "-o", "1.2.0", "-r", "octo/widgets", "1.3.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "CHANGELOG_GITHUB_TOKEN not set, using anonymous API access",
        ));

    let requests = server.received_requests().await.unwrap();
    assert!(!requests.is_empty());
    assert!(requests
        .iter()
        .all(|r| r.headers.get("authorization").is_none()));
}

#[tokio::test(flavor = "multi_thread")]
async fn repo_config_file_is_honored() {
    let (repo, feature, fix) = released_repo();
    repo.add_remote("upstream", "https://github.com/octo/widgets.git");
    repo.write(
        ".github-changelog.toml",
        "file = \"HISTORY.md\"\nremote = \"upstream\"\n",
    );

    let server = MockServer::start().await;
    mount_github(&server, &feature, &fix).await;

    update_changelog(&repo, &server.uri())
        .args(["-o", "1.2.0", "-q", "1.3.0"])
        .assert()
        .success();

    assert!(repo.read("HISTORY.md").contains(" * Add feature"));
}
