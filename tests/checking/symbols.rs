#[cfg(test)]
mod verify {
    use karel::checking::patterns::find_declarations;
    use karel::checking::{build_symbol_table, validate, Problem};
    use karel::language::{Arity, Settings};

    #[test]
    fn duplicate_declaration_keeps_first() {
        let text = r#"
define foo() {
    move();
}
define foo() {
    turnleft();
}
        "#
        .trim_ascii();

        let report = validate(text, Settings::default());

        let symbol = report
            .table
            .get("foo")
            .unwrap();
        assert_eq!(symbol.offset, 7);
        assert_eq!(symbol.arity, Arity::Nullary);

        let second = text
            .rfind("foo")
            .unwrap();
        assert_eq!(
            report.problems,
            vec![Problem::AlreadyDefined(second, "foo".to_string())]
        );
    }

    #[test]
    fn reserved_word_collision() {
        let report = validate("define move() {}", Settings::default());

        assert_eq!(
            report.problems,
            vec![Problem::ReservedWord(7, "move".to_string())]
        );
        assert!(!report
            .table
            .contains("move"));
        assert!(report.problems[0]
            .message()
            .contains("reserved word"));
    }

    #[test]
    fn keywords_cannot_be_declared() {
        let (table, problems) = build_symbol_table(&find_declarations(
            "void while() {}\nvoid frontIsClear() {}\nvoid program() {}",
        ));

        assert!(table.is_empty());
        assert_eq!(problems.len(), 3);
        assert!(problems
            .iter()
            .all(|p| matches!(p, Problem::ReservedWord(_, _))));
    }

    #[test]
    fn both_declaration_forms() {
        let (table, problems) =
            build_symbol_table(&find_declarations("define a()\nvoid b(x)\ndefine c\n"));

        assert!(problems.is_empty());
        let names: Vec<&str> = table
            .names()
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(
            table
                .get("b")
                .map(|s| s.arity),
            Some(Arity::Unary)
        );
        assert_eq!(
            table
                .get("c")
                .map(|s| s.arity),
            Some(Arity::Nullary)
        );
    }

    #[test]
    fn declaration_problems_share_limit_with_characters() {
        let text = "#\ndefine move()\ndefine turnoff()\n";
        let report = validate(text, Settings::with_limit(2));

        assert_eq!(
            report.problems,
            vec![
                Problem::IllegalCharacter(0, '#'),
                Problem::ReservedWord(9, "move".to_string()),
            ]
        );
    }
}
