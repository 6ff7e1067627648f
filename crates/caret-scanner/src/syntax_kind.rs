//! Lexical token kinds.

use serde::Serialize;

/// Kind of a lexical token.
///
/// The set is closed: every byte of a compilation unit belongs to exactly
/// one token, trivia (whitespace and comments) included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,
    DocComment,

    // Names and literals
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    // Keywords
    AbstractKeyword,
    BooleanKeyword,
    BreakKeyword,
    ByteKeyword,
    CaseKeyword,
    CatchKeyword,
    CharKeyword,
    ClassKeyword,
    ContinueKeyword,
    DefaultKeyword,
    DoKeyword,
    DoubleKeyword,
    ElseKeyword,
    EnumKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinalKeyword,
    FinallyKeyword,
    FloatKeyword,
    ForKeyword,
    IfKeyword,
    ImplementsKeyword,
    ImportKeyword,
    InstanceofKeyword,
    IntKeyword,
    InterfaceKeyword,
    LongKeyword,
    NativeKeyword,
    NewKeyword,
    NullKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReturnKeyword,
    ShortKeyword,
    StaticKeyword,
    SuperKeyword,
    SwitchKeyword,
    SynchronizedKeyword,
    ThisKeyword,
    ThrowKeyword,
    ThrowsKeyword,
    TransientKeyword,
    TrueKeyword,
    TryKeyword,
    VoidKeyword,
    VolatileKeyword,
    WhileKeyword,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    At,
    ColonColon,
    Colon,
    Question,
    Arrow,

    // Operators
    Eq,
    EqEq,
    Bang,
    BangEq,
    Tilde,
    Lt,
    LtEq,
    LtLt,
    LtLtEq,
    Gt,
    GtEq,
    GtGt,
    GtGtEq,
    GtGtGt,
    GtGtGtEq,
    Plus,
    PlusEq,
    PlusPlus,
    Minus,
    MinusEq,
    MinusMinus,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Amp,
    AmpEq,
    AmpAmp,
    Bar,
    BarEq,
    BarBar,
    Caret,
    CaretEq,

    /// A byte sequence the tokenizer could not classify.
    Unknown,
}

impl SyntaxKind {
    /// Whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace
                | SyntaxKind::LineComment
                | SyntaxKind::BlockComment
                | SyntaxKind::DocComment
        )
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::LineComment | SyntaxKind::BlockComment | SyntaxKind::DocComment
        )
    }

    /// Right angle brackets that may close a type-argument list.
    #[inline]
    pub const fn is_closing_angle(self) -> bool {
        matches!(self, SyntaxKind::Gt | SyntaxKind::GtGt | SyntaxKind::GtGtGt)
    }

    /// Keyword for the given word, if it is one.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "abstract" => SyntaxKind::AbstractKeyword,
            "boolean" => SyntaxKind::BooleanKeyword,
            "break" => SyntaxKind::BreakKeyword,
            "byte" => SyntaxKind::ByteKeyword,
            "case" => SyntaxKind::CaseKeyword,
            "catch" => SyntaxKind::CatchKeyword,
            "char" => SyntaxKind::CharKeyword,
            "class" => SyntaxKind::ClassKeyword,
            "continue" => SyntaxKind::ContinueKeyword,
            "default" => SyntaxKind::DefaultKeyword,
            "do" => SyntaxKind::DoKeyword,
            "double" => SyntaxKind::DoubleKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "enum" => SyntaxKind::EnumKeyword,
            "extends" => SyntaxKind::ExtendsKeyword,
            "false" => SyntaxKind::FalseKeyword,
            "final" => SyntaxKind::FinalKeyword,
            "finally" => SyntaxKind::FinallyKeyword,
            "float" => SyntaxKind::FloatKeyword,
            "for" => SyntaxKind::ForKeyword,
            "if" => SyntaxKind::IfKeyword,
            "implements" => SyntaxKind::ImplementsKeyword,
            "import" => SyntaxKind::ImportKeyword,
            "instanceof" => SyntaxKind::InstanceofKeyword,
            "int" => SyntaxKind::IntKeyword,
            "interface" => SyntaxKind::InterfaceKeyword,
            "long" => SyntaxKind::LongKeyword,
            "native" => SyntaxKind::NativeKeyword,
            "new" => SyntaxKind::NewKeyword,
            "null" => SyntaxKind::NullKeyword,
            "package" => SyntaxKind::PackageKeyword,
            "private" => SyntaxKind::PrivateKeyword,
            "protected" => SyntaxKind::ProtectedKeyword,
            "public" => SyntaxKind::PublicKeyword,
            "return" => SyntaxKind::ReturnKeyword,
            "short" => SyntaxKind::ShortKeyword,
            "static" => SyntaxKind::StaticKeyword,
            "super" => SyntaxKind::SuperKeyword,
            "switch" => SyntaxKind::SwitchKeyword,
            "synchronized" => SyntaxKind::SynchronizedKeyword,
            "this" => SyntaxKind::ThisKeyword,
            "throw" => SyntaxKind::ThrowKeyword,
            "throws" => SyntaxKind::ThrowsKeyword,
            "transient" => SyntaxKind::TransientKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "try" => SyntaxKind::TryKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "volatile" => SyntaxKind::VolatileKeyword,
            "while" => SyntaxKind::WhileKeyword,
            _ => return None,
        };
        Some(kind)
    }
}
