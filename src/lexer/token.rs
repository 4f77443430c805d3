//! トークン定義

use logos::Logos;
use std::fmt;

/// 変換対象JavaScriptサブセットのトークン型
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // 空白文字をスキップ
#[logos(skip r"//[^\n]*")] // 行コメント
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")] // ブロックコメント
pub enum Token {
    // キーワード
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("function")]
    Function,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("typeof")]
    Typeof,
    #[token("instanceof")]
    Instanceof,
    #[token("in")]
    In,
    #[token("void")]
    Void,
    #[token("delete")]
    Delete,
    #[token("new")]
    New,

    // 識別子（キーワードの後に来る必要がある）
    // `undefined` は予約語ではなく通常の識別子
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_owned(), priority = 1)]
    Identifier(String),

    // 数値リテラル（JavaScriptの数値は全てf64、符号は演算子として扱う）
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| super::literal_parser::parse_hex_number(lex.slice()))]
    Number(f64),

    // 文字列リテラル（二重引用符・単一引用符）
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        super::literal_parser::unescape_string(&s[1..s.len()-1])
    })]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| {
        let s = lex.slice();
        super::literal_parser::unescape_string(&s[1..s.len()-1])
    })]
    String(String),

    // 演算子
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    LtLt,
    #[token(">>>")]
    GtGtGt,
    #[token(">>")]
    GtGt,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Or,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,

    // デリミタ
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,

    // エラートークン
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var => write!(f, "var"),
            Token::Let => write!(f, "let"),
            Token::Const => write!(f, "const"),
            Token::Function => write!(f, "function"),
            Token::Return => write!(f, "return"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::While => write!(f, "while"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Null => write!(f, "null"),
            Token::Typeof => write!(f, "typeof"),
            Token::Instanceof => write!(f, "instanceof"),
            Token::In => write!(f, "in"),
            Token::Void => write!(f, "void"),
            Token::Delete => write!(f, "delete"),
            Token::New => write!(f, "new"),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::EqEqEq => write!(f, "==="),
            Token::NotEqEq => write!(f, "!=="),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Assign => write!(f, "="),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::LtLt => write!(f, "<<"),
            Token::GtGtGt => write!(f, ">>>"),
            Token::GtGt => write!(f, ">>"),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::PlusPlus => write!(f, "++"),
            Token::MinusMinus => write!(f, "--"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Ampersand => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Caret => write!(f, "^"),
            Token::Tilde => write!(f, "~"),
            Token::Bang => write!(f, "!"),
            Token::Question => write!(f, "?"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Colon => write!(f, ":"),
            Token::Dot => write!(f, "."),
            Token::Error => write!(f, "error"),
        }
    }
}
