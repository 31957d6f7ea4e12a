use karel::checking::Problem;

/// Generate problem and detail messages for validation problems
pub fn generate_error_message(problem: &Problem) -> (String, String) {
    let details = match problem {
        Problem::IllegalCharacter(_, c) => format!(
            r#"
The character '{}' is not part of the Karel language. Programs are written
with ASCII letters and digits, whitespace, and the symbols

    ;  (  )  _  /  *  &  !  |  {{  }}
            "#,
            c.escape_default()
        ),
        Problem::AlreadyDefined(_, name) => format!(
            r#"
A procedure named '{}' was declared earlier in this program. The first
declaration is the one that counts; give this one a different name.
            "#,
            name
        ),
        Problem::ReservedWord(_, name) => format!(
            r#"
'{}' is one of Karel's built-in instructions or keywords, so it can't be
used as the name of a new procedure.
            "#,
            name
        ),
        Problem::UnexpectedParameter(_, name) => format!(
            r#"
The procedure '{}' was declared without a parameter, so it must be
called with empty parentheses:

    {}();
            "#,
            name, name
        ),
        Problem::MissingParameter(_, name) => format!(
            r#"
The procedure '{}' was declared with a parameter, so a value must be
supplied when calling it, for example:

    {}(5);
            "#,
            name, name
        ),
        Problem::InstructionParameter(_, name) => format!(
            r#"
Built-in instructions like '{}' never take a parameter. Call it with empty
parentheses:

    {}();
            "#,
            name, name
        ),
        Problem::TooManyParameters(_, name) => format!(
            r#"
Karel procedures accept at most one parameter, but '{}' is being called
with several. Pass a single value.
            "#,
            name
        ),
        Problem::Undeclared(_, name) => format!(
            r#"
There is no procedure named '{}'. Declare it before using it:

    void {}() {{
        ...
    }}
            "#,
            name, name
        ),
    };

    (
        problem.message(),
        details
            .trim_ascii()
            .to_string(),
    )
}
