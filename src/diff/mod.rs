use crate::tokens::tokenize;
use serde::Serialize;
use std::fmt;

pub use myers::Myers;

mod myers;

/// Produces the interleaved edit script turning `a` into `b`.
///
/// Common tokens must keep their relative order in both inputs, and deleted
/// or inserted tokens sit next to the point where the inputs diverge.
pub trait Aligner {
    fn align(&self, a: &[Token], b: &[Token]) -> Vec<Edit>;
}

pub fn tokens(document: &str) -> Vec<Token> {
    tokenize(document)
        .into_iter()
        .enumerate()
        .map(|(i, text)| Token::new(i, text))
        .collect()
}

pub fn diff(a: &str, b: &str) -> Vec<Edit> {
    diff_with(&Myers, a, b)
}

pub fn diff_with<A: Aligner + ?Sized>(aligner: &A, a: &str, b: &str) -> Vec<Edit> {
    aligner.align(&tokens(a), &tokens(b))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position of the token within its own document.
    pub number: usize,
    pub text: String,
}

impl Token {
    pub fn new(number: usize, text: &str) -> Self {
        Token {
            number,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub r#type: EditType,
    pub a_token: Option<Token>,
    pub b_token: Option<Token>,
}

impl Edit {
    pub fn new(r#type: EditType, a_token: Option<Token>, b_token: Option<Token>) -> Self {
        Edit {
            r#type,
            a_token,
            b_token,
        }
    }

    pub fn eql(a_token: Token, b_token: Token) -> Self {
        Edit::new(EditType::Eql, Some(a_token), Some(b_token))
    }

    pub fn del(a_token: Token) -> Self {
        Edit::new(EditType::Del, Some(a_token), None)
    }

    pub fn ins(b_token: Token) -> Self {
        Edit::new(EditType::Ins, None, Some(b_token))
    }

    pub fn text(&self) -> &str {
        self.a_token
            .as_ref()
            .or(self.b_token.as_ref())
            .map_or("", |token| token.text.as_str())
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.r#type, self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EditType {
    #[serde(rename = "common")]
    Eql,
    #[serde(rename = "deleted")]
    Del,
    #[serde(rename = "inserted")]
    Ins,
}

impl EditType {
    pub const ALL: [EditType; 3] = [EditType::Eql, EditType::Del, EditType::Ins];

    pub fn index(self) -> usize {
        match self {
            EditType::Eql => 0,
            EditType::Del => 1,
            EditType::Ins => 2,
        }
    }

    /// The other two types, in rotation order after `self`.
    pub fn others(self) -> [EditType; 2] {
        let i = self.index();

        [Self::ALL[(i + 1) % 3], Self::ALL[(i + 2) % 3]]
    }

    /// True for text that appears in the first document.
    pub fn in_a(self) -> bool {
        self != EditType::Ins
    }

    /// True for text that appears in the second document.
    pub fn in_b(self) -> bool {
        self != EditType::Del
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self {
            EditType::Eql => " ",
            EditType::Ins => "+",
            EditType::Del => "-",
        };

        write!(f, "{}", result)
    }
}
