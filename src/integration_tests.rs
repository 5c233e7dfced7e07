#[cfg(test)]
mod tests {
    use crate::app_system::{Config, RegistrySystem};
    use crate::line_source::{run_batch_files, run_interactive};

    fn config() -> Config {
        Config {
            input_dir: ".".into(),
            pattern: "properties*.txt".into(),
            no_interactive: true,
            decimal_separator: Some('.'),
            log_filter: "warn".into(),
            buffer_size: 16,
        }
    }

    async fn run(system: &RegistrySystem, line: &str) -> String {
        system.client.execute(line.to_string()).await.unwrap().join("\n")
    }

    #[tokio::test]
    async fn test_owner_and_property_lifecycle() {
        let system = RegistrySystem::start(&config());

        // Owner creation and duplicate rejection
        let output = run(&system, "add_owner 12345678 Test_User 600000000").await;
        assert!(output.contains("Test_User"));
        assert!(output.contains('1'));
        let output = run(&system, "add_owner 12345678 Dup 600000000").await;
        assert!(output.contains("already exists"));
        assert_eq!(run(&system, "print_owners").await.matches("Owner ID:").count(), 1);

        // Property creation against a live and a missing owner
        let output = run(&system, "add_prop Studio 150000 rent 50 Madrid 1").await;
        assert!(output.contains("Property with ID 1"));
        let output = run(&system, "add_prop Studio 150000 rent 50 Madrid 999").await;
        assert!(output.contains("999"));
        assert_eq!(run(&system, "print_props").await.matches("Property ID:").count(), 1);

        // Cascade
        run(&system, "del_owner 1").await;
        assert_eq!(run(&system, "print_props").await, "");
        assert_eq!(run(&system, "print_owners").await, "");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_print_props_applies_every_filter() {
        let system = RegistrySystem::start(&config());
        run(&system, "add_owner 1 Ana 100").await;
        run(&system, "add_owner 2 Luis 200").await;
        for line in [
            "add_prop Match1 900 rent 40 Madrid 1",
            "add_prop Match2 900 rent 120 madrid 2",
            "add_prop TooSmall 900 rent 39 Madrid 1",
            "add_prop TooBig 900 rent 121 Madrid 2",
            "add_prop ForSale 900 sell 80 Madrid 1",
            "add_prop Elsewhere 900 rent 80 Toledo 2",
        ] {
            run(&system, line).await;
        }

        let output = run(&system, "print_props -type rent -minarea 40 -maxarea 120 -address Madrid").await;

        assert!(output.contains("Name: Match1"));
        assert!(output.contains("Name: Match2"));
        assert!(output.contains("Owner Name: Luis"));
        for excluded in ["TooSmall", "TooBig", "ForSale", "Elsewhere"] {
            assert!(!output.contains(excluded), "{} should be filtered out", excluded);
        }

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let system = RegistrySystem::start(&config());
        run(&system, "add_owner 1 Ana 100").await;
        run(&system, "del_owner 1").await;

        let output = run(&system, "add_owner 1 Ana 100").await;
        assert_eq!(output, "Owner Ana added successfully with ID 2!");

        run(&system, "add_prop A 1 rent 10 X 2").await;
        run(&system, "del_prop 1").await;
        let output = run(&system, "add_prop B 1 rent 10 X 2").await;
        assert_eq!(output, "Property with ID 2 has been successfully added!");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_batch_file_then_console() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("properties01.txt"),
            "add_owner 12345678 Test_User 600000000\n\nadd_prop Studio 150000 rent 50 Madrid 1\n",
        )
        .unwrap();

        let system = RegistrySystem::start(&config());
        let mut out = Vec::new();

        let files = run_batch_files(&system.client, dir.path(), "properties*.txt", &mut out).await.unwrap();
        let input: &[u8] = b"print_owners\nexit\n";
        run_interactive(&system.client, input, &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(files, 1);
        assert!(output.starts_with("Reading input file: properties01.txt\n\n"));
        assert!(output.contains("Owner Test_User added successfully with ID 1!"));
        assert!(output.contains("Starting in interactive console mode."));
        assert!(output.contains("Properties owned: 1"));

        system.shutdown().await.unwrap();
    }
}
