//! The fixed words of the language. None of these can be redeclared as a
//! procedure.

/// Words that introduce a procedure declaration.
pub const DECLARATIONS: &[&str] = &["define", "void"];

/// Built-in actions. They never take a parameter.
pub const INSTRUCTIONS: &[&str] = &["move", "turnleft", "turnoff", "putbeeper", "pickbeeper"];

/// Control constructs, numeric helpers and world conditions. Exempt from
/// parameter checking.
pub const KEYWORDS: &[&str] = &[
    "class",
    "program",
    "define",
    "void",
    "if",
    "else",
    "while",
    "iterate",
    "return",
    "succ",
    "pred",
    "iszero",
    "frontIsClear",
    "frontIsBlocked",
    "leftIsClear",
    "leftIsBlocked",
    "rightIsClear",
    "rightIsBlocked",
    "nextToABeeper",
    "notNextToABeeper",
    "anyBeepersInBeeperBag",
    "noBeepersInBeeperBag",
    "facingNorth",
    "facingSouth",
    "facingEast",
    "facingWest",
    "notFacingNorth",
    "notFacingSouth",
    "notFacingEast",
    "notFacingWest",
];

pub fn is_instruction(name: &str) -> bool {
    INSTRUCTIONS.contains(&name)
}

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

pub fn is_reserved(name: &str) -> bool {
    is_instruction(name) || is_keyword(name)
}

/// A built-in word offered for completion, along with the text shown when
/// the editor asks for more about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub detail: Option<&'static str>,
    pub documentation: Option<&'static str>,
}

/// What the editor offers before any procedures are declared. Only the
/// instructions carry documentation.
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "move",
        detail: Some("move()"),
        documentation: Some("Moves Karel one corner forward in the direction it is facing."),
    },
    Builtin {
        name: "turnleft",
        detail: Some("turnleft()"),
        documentation: Some("Turns Karel 90 degrees to the left."),
    },
    Builtin {
        name: "turnoff",
        detail: Some("turnoff()"),
        documentation: Some("Ends the execution of the program."),
    },
    Builtin {
        name: "putbeeper",
        detail: Some("putbeeper()"),
        documentation: Some("Takes a beeper from the bag and leaves it on the current corner."),
    },
    Builtin {
        name: "pickbeeper",
        detail: Some("pickbeeper()"),
        documentation: Some("Picks a beeper up from the current corner and puts it in the bag."),
    },
    Builtin {
        name: "succ",
        detail: None,
        documentation: None,
    },
    Builtin {
        name: "pred",
        detail: None,
        documentation: None,
    },
    Builtin {
        name: "iszero",
        detail: None,
        documentation: None,
    },
];

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS
        .iter()
        .find(|builtin| builtin.name == name)
}
