use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Handles a pattern match at the lexer cursor. Receives the matched text and
/// returns the token to emit, or `None` if the text is skipped.
pub type RegexHandler = fn(&mut Lexer, String) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; two character operators must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\n\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

/// On-demand tokenizer over a single source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the
/// source is exhausted every further call returns an `EOF` token. As an
/// [`Iterator`] the lexer yields the final `EOF` once and then stops.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        'scan: loop {
            let Some(ch) = self.remainder().chars().next() else {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span(0));
            };

            for pattern in PATTERNS.iter() {
                let Some(found) = pattern.regex.find(self.remainder()) else {
                    continue;
                };

                let matched = found.as_str().to_string();
                match (pattern.handler)(self, matched) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            let token = MK_TOKEN!(TokenKind::Illegal, ch.to_string(), self.span(ch.len_utf8()));
            self.advance_n(ch.len_utf8());
            return token;
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Span covering `len` bytes from the cursor.
    pub fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            self.finished = true;
        }
        Some(token)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn number_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    let span = lexer.span(matched.len());
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Int, matched, span))
}

fn symbol_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    let span = lexer.span(matched.len());
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(lookup_identifier(&matched), matched, span))
}

/// Scans a whole source, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
