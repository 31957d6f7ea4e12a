#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use karel::checking;
    use karel::language::Settings;

    #[test]
    fn ensure_samples_validate() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("karel")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .karel files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = checking::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let report = checking::validate(&content, Settings::default());
            if !report
                .problems
                .is_empty()
            {
                println!("File {:?} has problems: {:?}", file, report.problems);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should validate cleanly, but {} files failed",
                failures.len()
            );
        }
    }
}
