use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{CLIENTS_HEADER, OPERATIONS_HEADER, single_client, write_csv};

#[test]
fn test_malformed_operations_are_skipped() {
    let clients = single_client().unwrap();
    let ops = write_csv(
        OPERATIONS_HEADER,
        &[
            "open,1,",
            "deposit,1,1.0",
            // Unknown type
            "transfer,1,1.0",
            // Text in amount field
            "deposit,1,not_a_number",
            // Missing amount for deposit
            "deposit,1,",
            "deposit,1,2.0",
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading operation"))
        .stderr(predicate::str::contains("deposit operation is missing an amount"))
        .stdout(predicate::str::contains("0001,1,Ana,3.00"));
}

#[test]
fn test_invalid_amounts_leave_balance_unchanged() {
    let clients = single_client().unwrap();
    let ops = write_csv(
        OPERATIONS_HEADER,
        &[
            "open,1,",
            "deposit,1,-5",
            "deposit,1,0",
            "withdrawal,1,10",
            "deposit,1,20",
            "withdrawal,1,-1",
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Invalid amount: -5"))
        .stderr(predicate::str::contains("Insufficient funds"))
        .stdout(predicate::str::contains("0001,1,Ana,20.00"));
}

#[test]
fn test_duplicate_and_unknown_clients() {
    let clients = write_csv(
        CLIENTS_HEADER,
        &[
            "1,Ana,1990-04-12,Rua A 10",
            "1,Impostor,1991-01-01,Rua Z 1",
            "2,Bia,not-a-date,Rua B 2",
        ],
    )
    .unwrap();
    let ops = write_csv(
        OPERATIONS_HEADER,
        &["open,1,", "open,2,", "deposit,3,10", "deposit,1,10"],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("A client with id 1 already exists"))
        .stderr(predicate::str::contains("Error reading client"))
        .stderr(predicate::str::contains("Client not found: 3"))
        .stdout(predicate::str::contains("0001,1,Ana,10.00"))
        .stdout(predicate::str::contains("Impostor").not());
}

#[test]
fn test_operation_before_open_reports_no_account() {
    let clients = single_client().unwrap();
    let ops = write_csv(OPERATIONS_HEADER, &["deposit,1,10", "open,1,"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Client 1 has no account"))
        .stdout(predicate::str::contains("0001,1,Ana,0.00"));
}

#[test]
fn test_large_amounts_keep_full_precision() {
    let clients = single_client().unwrap();
    let ops = write_csv(
        OPERATIONS_HEADER,
        &["open,1,", "deposit,1,12345678901234567.89"],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0001,1,Ana,12345678901234567.89"));
}

#[test]
fn test_no_accounts_still_prints_header() {
    let clients = single_client().unwrap();
    let ops = write_csv(OPERATIONS_HEADER, &[]).unwrap();

    let mut cmd = Command::new(cargo_bin!("bank-ledger"));
    cmd.arg(ops.path()).arg("--clients").arg(clients.path());

    cmd.assert()
        .success()
        .stdout(predicate::eq("branch,number,holder,balance\n"));
}
