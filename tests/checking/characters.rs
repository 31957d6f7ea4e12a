#[cfg(test)]
mod verify {
    use karel::checking::{illegal_characters, validate, Problem};
    use karel::language::Settings;

    #[test]
    fn every_illegal_character_reported() {
        let text = "move(); # turnleft(); $\n%";
        let problems: Vec<Problem> = illegal_characters(text).collect();

        assert_eq!(
            problems,
            vec![
                Problem::IllegalCharacter(8, '#'),
                Problem::IllegalCharacter(22, '$'),
                Problem::IllegalCharacter(24, '%'),
            ]
        );
    }

    #[test]
    fn rescanning_gives_same_result() {
        let text = "void trés() { move(); }\n-- ¿qué?";

        let first: Vec<Problem> = illegal_characters(text).collect();
        let second: Vec<Problem> = illegal_characters(text).collect();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn limit_caps_legality_problems() {
        let text = "#1 #2 #3 #4 #5";
        let report = validate(text, Settings::with_limit(2));

        assert_eq!(
            report.problems,
            vec![
                Problem::IllegalCharacter(0, '#'),
                Problem::IllegalCharacter(3, '#'),
            ]
        );
    }

    #[test]
    fn diagnostic_is_a_point() {
        let problem = Problem::IllegalCharacter(5, '@');
        assert_eq!(problem.width(), 0);
        assert!(problem
            .message()
            .contains('@'));
    }
}
