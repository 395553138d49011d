// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Kinds of syntax tree items.

use std::fmt;

/// The kind of a syntax tree item: container, token, or trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    /// A unit of input that no other rule accepted
    Invalid,

    /// Compilation unit (one scanned source text)
    CompilationUnit,

    // Simple punctuation
    /// {
    OpenBraceToken,
    /// }
    CloseBraceToken,
    /// (
    OpenParenToken,
    /// )
    CloseParenToken,
    /// [
    OpenBracketToken,
    /// ]
    CloseBracketToken,
    /// .
    DotToken,
    /// ;
    SemicolonToken,
    /// ,
    CommaToken,
    /// <
    LessThanToken,
    /// >
    GreaterThanToken,
    /// +
    PlusToken,
    /// -
    MinusToken,
    /// *
    AsteriskToken,
    /// %
    PercentToken,
    /// &
    AmpersandToken,
    /// |
    BarToken,
    /// ^
    CaretToken,
    /// !
    ExclamationToken,
    /// ~
    TildeToken,
    /// ?
    QuestionToken,
    /// :
    ColonToken,
    /// =
    EqualsToken,
    /// /
    SlashToken,

    // Compound punctuation
    /// ...
    DotDotDotToken,
    /// <=
    LessThanEqualsToken,
    /// <<
    LessThanLessThanToken,
    /// <<=
    LessThanLessThanEqualsToken,
    /// >=
    GreaterThanEqualsToken,
    /// >>
    GreaterThanGreaterThanToken,
    /// >>=
    GreaterThanGreaterThanEqualsToken,
    /// >>>
    GreaterThanGreaterThanGreaterThanToken,
    /// >>>=
    GreaterThanGreaterThanGreaterThanEqualsToken,
    /// ==
    EqualsEqualsToken,
    /// ===
    EqualsEqualsEqualsToken,
    /// =>
    EqualsGreaterThanToken,
    /// !=
    ExclamationEqualsToken,
    /// !==
    ExclamationEqualsEqualsToken,
    /// +=
    PlusEqualsToken,
    /// ++
    PlusPlusToken,
    /// -=
    MinusEqualsToken,
    /// --
    MinusMinusToken,
    /// *=
    AsteriskEqualsToken,
    /// %=
    PercentEqualsToken,
    /// &=
    AmpersandEqualsToken,
    /// &&
    AmpersandAmpersandToken,
    /// |=
    BarEqualsToken,
    /// ||
    BarBarToken,
    /// ^=
    CaretEqualsToken,
    /// /=
    SlashEqualsToken,

    // Literals, names and words
    /// null
    NullLiteralToken,
    /// true / false
    BooleanLiteralToken,
    /// Decimal or radix-prefixed number
    NumericLiteralToken,
    /// Single- or double-quoted string
    StringLiteralToken,
    /// Identifier name that is not reserved
    IdentifierToken,
    /// Reserved keyword
    KeywordToken,
    /// Word reserved for future use (`enum`)
    FutureReservedWordToken,

    // Trivia
    /// `// ...`
    SingleLineCommentTrivia,
    /// `/* ... */`
    MultiLineCommentTrivia,
    /// LF, CR, CRLF, LS or PS
    EndOfLineTrivia,
    /// Run of non-line-terminator white space
    WhitespaceTrivia,
}

impl SyntaxKind {
    /// Returns true for container kinds.
    pub fn is_node(self) -> bool {
        matches!(self, SyntaxKind::CompilationUnit)
    }

    /// Returns true for trivia kinds.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::SingleLineCommentTrivia
                | SyntaxKind::MultiLineCommentTrivia
                | SyntaxKind::EndOfLineTrivia
                | SyntaxKind::WhitespaceTrivia
        )
    }

    /// Returns true for token kinds, `Invalid` included.
    pub fn is_token(self) -> bool {
        !self.is_node() && !self.is_trivia()
    }

    /// Returns true for punctuator kinds.
    pub fn is_punctuator(self) -> bool {
        self.punctuator_text().is_some()
    }

    /// Returns the source spelling of a punctuator kind.
    pub fn punctuator_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::EqualsGreaterThanToken => "=>",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::CaretEqualsToken => "^=",
            SyntaxKind::SlashEqualsToken => "/=",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Keywords that are reserved in every context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `debugger`
    Debugger,
    /// `default`
    Default,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `export`
    Export,
    /// `extends`
    Extends,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `instanceof`
    Instanceof,
    /// `new`
    New,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `switch`
    Switch,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `try`
    Try,
    /// `typeof`
    Typeof,
    /// `var`
    Var,
    /// `void`
    Void,
    /// `while`
    While,
    /// `with`
    With,
}

impl Keyword {
    /// Looks up a keyword by its spelling.
    pub fn from_text(text: &str) -> Option<Self> {
        let keyword = match text {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "debugger" => Keyword::Debugger,
            "default" => Keyword::Default,
            "delete" => Keyword::Delete,
            "do" => Keyword::Do,
            "else" => Keyword::Else,
            "export" => Keyword::Export,
            "extends" => Keyword::Extends,
            "finally" => Keyword::Finally,
            "for" => Keyword::For,
            "function" => Keyword::Function,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "in" => Keyword::In,
            "instanceof" => Keyword::Instanceof,
            "new" => Keyword::New,
            "return" => Keyword::Return,
            "super" => Keyword::Super,
            "switch" => Keyword::Switch,
            "this" => Keyword::This,
            "throw" => Keyword::Throw,
            "try" => Keyword::Try,
            "typeof" => Keyword::Typeof,
            "var" => Keyword::Var,
            "void" => Keyword::Void,
            "while" => Keyword::While,
            "with" => Keyword::With,
            _ => return None,
        };
        Some(keyword)
    }

    /// Looks up a keyword by its spelling in UTF-16 code units.
    pub fn from_units(units: &[u16]) -> Option<Self> {
        // The longest keyword is `instanceof`.
        let mut buf = [0u8; 10];
        if units.len() > buf.len() {
            return None;
        }
        for (slot, &unit) in buf.iter_mut().zip(units) {
            *slot = u8::try_from(unit).ok().filter(u8::is_ascii_lowercase)?;
        }
        std::str::from_utf8(&buf[..units.len()])
            .ok()
            .and_then(Self::from_text)
    }

    /// Returns the keyword's spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::New => "new",
            Keyword::Return => "return",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert!(SyntaxKind::CompilationUnit.is_node());
        assert!(SyntaxKind::WhitespaceTrivia.is_trivia());
        assert!(SyntaxKind::EndOfLineTrivia.is_trivia());
        assert!(SyntaxKind::Invalid.is_token());
        assert!(SyntaxKind::KeywordToken.is_token());
        assert!(!SyntaxKind::MultiLineCommentTrivia.is_token());
    }

    #[test]
    fn test_punctuator_text() {
        assert_eq!(SyntaxKind::DotDotDotToken.punctuator_text(), Some("..."));
        assert_eq!(
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken.punctuator_text(),
            Some(">>>=")
        );
        assert_eq!(SyntaxKind::IdentifierToken.punctuator_text(), None);
        assert!(SyntaxKind::SlashEqualsToken.is_punctuator());
        assert!(!SyntaxKind::SingleLineCommentTrivia.is_punctuator());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SyntaxKind::NumericLiteralToken.to_string(), "NumericLiteralToken");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_text("instanceof"), Some(Keyword::Instanceof));
        assert_eq!(Keyword::from_text("let"), None);
        assert_eq!(Keyword::from_text("enum"), None);
        assert_eq!(Keyword::Typeof.as_str(), "typeof");
    }

    #[test]
    fn test_keyword_from_units() {
        let units: Vec<u16> = "while".encode_utf16().collect();
        assert_eq!(Keyword::from_units(&units), Some(Keyword::While));
        let long: Vec<u16> = "instanceofx".encode_utf16().collect();
        assert_eq!(Keyword::from_units(&long), None);
        let upper: Vec<u16> = "If".encode_utf16().collect();
        assert_eq!(Keyword::from_units(&upper), None);
        assert_eq!(Keyword::from_units(&[0x0130, 0x66]), None);
    }
}
