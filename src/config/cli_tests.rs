//! Tests for CLI argument parsing.
//!
//! These tests pass every monitoring option explicitly; asserting on
//! *unset* env-backed options would couple the tests to the ambient
//! process environment.

use clap::Parser;

use super::cli::{Cli, Command};

#[test]
fn parses_all_run_options() {
    let cli = Cli::parse_from_iter([
        "ipbot",
        "--webhook-url",
        "https://discord.com/api/webhooks/1/token",
        "--ip-service",
        "https://ip.example.com/",
        "--check-interval",
        "60",
        "--dry-run",
        "--verbose",
    ]);

    assert_eq!(
        cli.webhook_url.as_deref(),
        Some("https://discord.com/api/webhooks/1/token")
    );
    assert_eq!(cli.ip_service.as_deref(), Some("https://ip.example.com/"));
    assert_eq!(cli.check_interval, Some(60));
    assert!(cli.dry_run);
    assert!(cli.verbose);
    assert!(cli.command.is_none());
}

#[test]
fn boolean_flags_default_to_false() {
    let cli = Cli::parse_from_iter(["ipbot", "--webhook-url", "https://example.com/hook"]);

    assert!(!cli.dry_run);
    assert!(!cli.verbose);
}

#[test]
fn short_flags_work() {
    let cli = Cli::parse_from_iter(["ipbot", "-v", "-c", "ipbot.toml"]);

    assert!(cli.verbose);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("ipbot.toml")));
}

#[test]
fn non_numeric_interval_is_rejected() {
    let result = Cli::try_parse_from(["ipbot", "--check-interval", "soon"]);

    assert!(result.is_err());
}

#[test]
fn init_subcommand_with_default_output() {
    let cli = Cli::parse_from_iter(["ipbot", "init"]);

    assert!(cli.is_init());
    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("ipbot.toml"));
        }
        other => panic!("expected init command, got {other:?}"),
    }
}

#[test]
fn init_subcommand_with_custom_output() {
    let cli = Cli::parse_from_iter(["ipbot", "init", "--output", "/tmp/custom.toml"]);

    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("/tmp/custom.toml"));
        }
        other => panic!("expected init command, got {other:?}"),
    }
}

#[test]
fn is_init_false_without_subcommand() {
    let cli = Cli::parse_from_iter(["ipbot", "--webhook-url", "https://example.com/hook"]);

    assert!(!cli.is_init());
}
