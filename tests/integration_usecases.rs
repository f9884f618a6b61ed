use std::fs;
use std::io::Cursor;

use digital_wallet::common::error::{AppError, WalletError};
use digital_wallet::worker::processor::{Outcome, Processor};

fn replay(input_csv: &str) -> (Processor, Vec<Outcome>) {
    let mut processor = Processor::new();

    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let mut outcomes = Vec::new();
    for row in digital_wallet::io::reader::read_commands(&mut csv_reader) {
        let command = row.expect("failed to parse script row");
        outcomes.push(processor.process(command).expect("script error"));
    }
    (processor, outcomes)
}

fn run_case(input_csv: &str) -> String {
    let (processor, _) = replay(input_csv);
    let wallet = processor.wallet().expect("script opened a wallet");

    let mut out = Vec::<u8>::new();
    digital_wallet::io::writer::write_wallet(&mut out, wallet)
        .expect("failed to write output CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_case(name: &str) {
    let input = fs::read_to_string(format!("tests/fixtures/{name}_input.csv")).unwrap();
    let expected = fs::read_to_string(format!("tests/fixtures/{name}_expected.csv")).unwrap();

    let actual = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn alice_pays_refunds_and_is_blocked_while_locked() {
    assert_case("alice");
}

#[test]
fn bob_deposits_unverified_but_cannot_pay() {
    assert_case("bob");
}

#[test]
fn fixed_point_amounts_do_not_drift() {
    assert_case("precision");
}

#[test]
fn alice_outcomes_in_order() {
    let input = fs::read_to_string("tests/fixtures/alice_input.csv").unwrap();
    let (_, outcomes) = replay(&input);

    assert_eq!(outcomes.len(), 8);
    assert!(outcomes[..5].iter().all(|o| *o == Outcome::Applied));
    assert_eq!(
        outcomes[5],
        Outcome::Rejected(WalletError::InvalidState("wallet is locked".into()))
    );
    assert_eq!(outcomes[6..], [Outcome::Applied, Outcome::Applied]);
}

#[test]
fn run_requires_script_path() {
    let err = digital_wallet::app::run(["digital_wallet"]).unwrap_err();
    assert!(matches!(err, AppError::MissingArg));
}

#[test]
fn run_reports_missing_file() {
    let err = digital_wallet::app::run(["digital_wallet", "tests/fixtures/does_not_exist.csv"])
        .unwrap_err();
    assert!(matches!(err, AppError::OpenInput(_)));
}

#[test]
fn run_replays_script_end_to_end() {
    digital_wallet::app::run(["digital_wallet", "tests/fixtures/alice_input.csv"])
        .expect("alice script replays cleanly");
}

#[test]
fn run_rejects_script_without_open() {
    let err = digital_wallet::app::run(["digital_wallet", "tests/fixtures/no_open_input.csv"])
        .unwrap_err();
    assert!(
        matches!(&err, AppError::Process(msg) if msg == "script never opened a wallet"),
        "{err}"
    );
}

#[test]
fn run_rejects_amount_finer_than_four_decimals() {
    let err = digital_wallet::app::run(["digital_wallet", "tests/fixtures/sub_unit_input.csv"])
        .unwrap_err();
    assert!(
        matches!(&err, AppError::Parse(msg) if msg.ends_with("more than 4 decimal places")),
        "{err}"
    );
}
