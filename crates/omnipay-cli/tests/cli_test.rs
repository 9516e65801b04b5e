use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn omnipay() -> Command {
    let mut cmd = Command::new(cargo_bin!("omnipay"));
    cmd.env_remove("OMNIPAY_VENDOR")
        .env_remove("OMNIPAY_GATEWAYS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_class_name() {
    omnipay()
        .args(["class-name", "PayPal_Express"])
        .assert()
        .success()
        .stdout("\\League\\Omnipay\\PayPal\\ExpressGateway\n");
}

#[test]
fn test_class_name_custom_vendor() {
    omnipay()
        .args(["class-name", "Stripe", "--vendor", "Acme"])
        .assert()
        .success()
        .stdout("\\Acme\\Omnipay\\Stripe\\Gateway\n");
}

#[test]
fn test_short_name() {
    omnipay()
        .args(["short-name", "\\League\\Omnipay\\PayPal\\ExpressGateway"])
        .assert()
        .success()
        .stdout("PayPal_Express\n");
}

#[test]
fn test_camel_case() {
    omnipay()
        .args(["camel-case", "TEST_CASE"])
        .assert()
        .success()
        .stdout("testCase\n");
}

#[test]
fn test_luhn() {
    omnipay()
        .args(["luhn", "4111111111111111"])
        .assert()
        .success()
        .stdout("valid\n");

    omnipay()
        .args(["luhn", "4111111111111110"])
        .assert()
        .failure()
        .stdout("invalid\n");

    omnipay().arg("luhn").assert().success().stdout("valid\n");
}

#[test]
fn test_to_float() {
    omnipay()
        .args(["to-float", "000009.99900000000"])
        .assert()
        .success()
        .stdout("9.999\n");

    omnipay()
        .args(["to-float", "1,99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("String is not a valid decimal number"));

    omnipay()
        .args(["to-float", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data type is not a valid decimal number"));
}

#[test]
fn test_to_float_reads_json_literals_first() {
    omnipay()
        .args(["to-float", "1e5"])
        .assert()
        .success()
        .stdout("100000\n");

    omnipay()
        .args(["to-float", "\"1e5\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("String is not a valid decimal number"));
}

#[test]
fn test_gateways_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "gateways = [\"Stripe\", \"PayPal_Express\"]")?;

    omnipay()
        .args(["gateways", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Stripe\t\\League\\Omnipay\\Stripe\\Gateway",
        ))
        .stdout(predicate::str::contains(
            "PayPal_Express\t\\League\\Omnipay\\PayPal\\ExpressGateway",
        ));

    Ok(())
}

#[test]
fn test_gateways_from_env() {
    let dir = tempfile::tempdir().unwrap();

    omnipay()
        .current_dir(dir.path())
        .env("OMNIPAY_GATEWAYS", "Stripe, Dummy")
        .arg("gateways")
        .assert()
        .success()
        .stdout("Stripe\t\\League\\Omnipay\\Stripe\\Gateway\nDummy\t\\League\\Omnipay\\Dummy\\Gateway\n");
}

#[test]
fn test_gateways_missing_config_file() {
    omnipay()
        .args(["gateways", "--config", "/nonexistent/gateways.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
