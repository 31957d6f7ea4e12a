#[cfg(test)]
mod verify {
    use karel::checking::{validate, Category, Problem};
    use karel::language::Settings;

    fn problems(text: &str) -> Vec<Problem> {
        validate(text, Settings::default()).problems
    }

    #[test]
    fn parameter_arity() {
        let text = "define bump(x) {}\nbump();\nbump(x);\n";
        assert_eq!(
            problems(text),
            vec![Problem::MissingParameter(18, "bump".to_string())]
        );

        let text = "define bump(x) {}\nbump(x);\n";
        assert!(problems(text).is_empty());
    }

    #[test]
    fn two_arguments() {
        let text = "define bump(x) {}\nbump(x,y);\n";
        assert_eq!(
            problems(text),
            vec![
                Problem::IllegalCharacter(24, ','),
                Problem::TooManyParameters(18, "bump".to_string()),
            ]
        );
    }

    #[test]
    fn instruction_with_argument() {
        let text = "define bump(x)\n move(bump)\n";
        let report = validate(text, Settings::default());

        assert_eq!(
            report
                .table
                .get("bump")
                .map(|s| s.arity),
            Some(karel::language::Arity::Unary)
        );
        assert_eq!(report.problems.len(), 1);
        assert_eq!(
            report.problems[0],
            Problem::InstructionParameter(16, "move".to_string())
        );
        assert!(report.problems[0]
            .message()
            .contains("move"));
    }

    #[test]
    fn every_undeclared_call_reported() {
        let text = "jump();\njump();\nhop(1);\n";
        assert_eq!(
            problems(text),
            vec![
                Problem::Undeclared(0, "jump".to_string()),
                Problem::Undeclared(8, "jump".to_string()),
                Problem::Undeclared(16, "hop".to_string()),
            ]
        );
    }

    #[test]
    fn call_limit_is_independent() {
        let text = "# $\na(); b(); c();\n";
        let report = validate(text, Settings::with_limit(2));

        let calls: Vec<&Problem> = report
            .problems
            .iter()
            .filter(|p| p.category() == Category::Calls)
            .collect();

        assert_eq!(report.problems.len(), 4);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], &Problem::Undeclared(4, "a".to_string()));
        assert_eq!(calls[1], &Problem::Undeclared(9, "b".to_string()));
    }

    #[test]
    fn calls_before_declaration_are_fine() {
        // the table is complete before any call is checked
        let text = "program() { climb(); }\nvoid climb() {}\n";
        assert!(problems(text).is_empty());
    }

    #[test]
    fn problems_are_ordered_by_pass_then_offset() {
        let text = "x(); #\ndefine move()\n";
        assert_eq!(
            problems(text),
            vec![
                Problem::IllegalCharacter(5, '#'),
                Problem::ReservedWord(14, "move".to_string()),
                Problem::Undeclared(0, "x".to_string()),
            ]
        );
    }
}
