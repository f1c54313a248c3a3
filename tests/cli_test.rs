use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

fn payphone() -> Command {
    Command::new(cargo_bin!("payphone"))
}

#[test]
fn test_cli_end_to_end() {
    payphone()
        .write_stdin("LEVANTAR\nMOEDA 1e, 50c.\nT= 212345678\nABORTAR\n")
        .assert()
        .success()
        .stdout(
            "machine> Insert coins.\n\
             machine> Current balance: 1e50c\n\
             machine> Call to 212345678 made successfully. Current balance: 1e25c\n",
        );
}

#[test]
fn test_abort_ignores_remaining_input() {
    payphone()
        .write_stdin("LEVANTAR\nABORTAR\nMOEDA 2e\n")
        .assert()
        .success()
        .stdout("machine> Insert coins.\n");
}

#[test]
fn test_rejections_are_reported_and_session_continues() {
    payphone()
        .write_stdin("MOEDA 1e\nLEVANTAR\nMOEDA 3e\nT= 212345678\nMOEDA 2c\nHELLO\nABORTAR\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "machine> You need to pick up the phone.",
        ))
        .stdout(predicate::str::contains("machine> Invalid coin: 3e"))
        .stdout(predicate::str::contains("machine> Invalid command!"))
        .stdout(predicate::str::contains("machine> Current balance: 0e2c"));
}

#[test]
fn test_dial_rejections() {
    payphone()
        .write_stdin("LEVANTAR\nMOEDA 10c\nT= 641\nT= 21234\nT= 001234567\nT= 808123456\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "machine> This number is not allowed on this phone. Please dial a new number!",
        ))
        .stdout(predicate::str::contains(
            "machine> Invalid number. Please dial a new number!",
        ))
        .stdout(predicate::str::contains(
            "machine> You don't have enough balance to make this call. Please insert more coins!",
        ))
        .stdout(predicate::str::contains(
            "machine> Call to 808123456 made successfully. Current balance: 0e0c",
        ));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    payphone()
        .write_stdin("LEVANTAR\n")
        .assert()
        .success()
        .stdout("machine> Insert coins.\n");
}

#[test]
fn test_prompt_flag() {
    payphone()
        .arg("--prompt")
        .write_stdin("LEVANTAR\nABORTAR\n")
        .assert()
        .success()
        .stdout("user> machine> Insert coins.\nuser> ");
}

#[test]
fn test_logs_stay_off_stdout() {
    payphone()
        .env("RUST_LOG", "payphone=debug")
        .write_stdin("LEVANTAR\nABORTAR\n")
        .assert()
        .success()
        .stdout("machine> Insert coins.\n")
        .stderr(predicate::str::contains("receiver lifted"));
}
