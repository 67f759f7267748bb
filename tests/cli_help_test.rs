#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("m365").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        println!("CLI Help Output:\n{}", help_output);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));
        assert!(help_output.contains("Commands:"));

        assert!(help_output.contains("flow"));
        assert!(help_output.contains("planner"));
        assert!(help_output.contains("auth"));
        assert!(help_output.contains("config"));
        assert!(help_output.contains("completions"));

        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));
        assert!(help_output.contains("--output"));
    }

    #[test]
    fn test_flow_owner_add_help() {
        let mut cmd = Command::cargo_bin("m365").unwrap();
        cmd.args(["flow", "owner", "add", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Assigns/updates permissions to a Power Automate flow",
            ))
            .stdout(predicate::str::contains("--environmentName"))
            .stdout(predicate::str::contains("--flowName"))
            .stdout(predicate::str::contains("--groupName"))
            .stdout(predicate::str::contains("--asAdmin"))
            .stdout(predicate::str::contains("CanView"))
            .stdout(predicate::str::contains("CanEdit"));
    }

    #[test]
    fn test_checklist_item_add_help() {
        let mut cmd = Command::cargo_bin("m365").unwrap();
        cmd.args(["planner", "task", "checklistitem", "add", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Adds a new checklist item to a Planner task",
            ))
            .stdout(predicate::str::contains("--taskId"))
            .stdout(predicate::str::contains("--title"))
            .stdout(predicate::str::contains("--isChecked"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        let subcommands = vec!["flow", "planner", "auth", "config"];

        for subcommand in subcommands {
            let mut cmd = Command::cargo_bin("m365").unwrap();
            let assert_result = cmd.arg(subcommand).arg("--help").assert().success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            assert!(help_output.contains("Usage:"));
            assert!(help_output.contains(subcommand));

            match subcommand {
                "flow" => assert!(help_output.contains("owner")),
                "planner" => assert!(help_output.contains("task")),
                "auth" => assert!(help_output.contains("token")),
                "config" => {
                    assert!(help_output.contains("get"));
                    assert!(help_output.contains("set"));
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_completions_are_generated() {
        let mut cmd = Command::cargo_bin("m365").unwrap();
        cmd.args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("checklistitem"));
    }
}
