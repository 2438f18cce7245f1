// ABOUTME: Tokenizer module converting source text into a token stream using nom combinators

use std::collections::VecDeque;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace1, none_of, one_of},
    combinator::{opt, recognize, value},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};

use crate::error::EvalError;
use crate::token::Token;

/// Characters that end an unquoted identifier/number lexeme even without
/// intervening whitespace.
fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '\'' | '`' | ',' | '"')
}

fn line_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = nom::bytes::complete::take_while(|c| c != '\n')(input)?;
    Ok((input, ()))
}

fn block_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("#|")(input)?;
    let mut rest = input;
    loop {
        if rest.is_empty() {
            return Err(nom::Err::Failure(nom::error::Error::new(
                rest,
                nom::error::ErrorKind::Eof,
            )));
        }
        if let Some(stripped) = rest.strip_prefix("|#") {
            return Ok((stripped, ()));
        }
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str();
    }
}

fn skip_trivia(input: &str) -> IResult<&str, ()> {
    let (input, _) = many0(alt((value((), multispace1), line_comment, block_comment))).parse(input)?;
    Ok((input, ()))
}

fn hash_literal(input: &str) -> IResult<&str, Token> {
    preceded(
        char('#'),
        alt((
            value(Token::Boolean(true), char('t')),
            value(Token::Boolean(false), char('f')),
        )),
    )
    .parse(input)
}

fn single_char_token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LeftParen, char('(')),
        value(Token::RightParen, char(')')),
        value(Token::Quote, char('\'')),
        value(Token::Quasiquote, char('`')),
        value(Token::Unquote, char(',')),
    ))
    .parse(input)
}

fn string_literal(input: &str) -> IResult<&str, Token> {
    let (mut input, _) = char('"')(input)?;
    let mut out = String::new();
    loop {
        match input.chars().next() {
            None => {
                return Err(nom::Err::Failure(nom::error::Error::new(
                    input,
                    nom::error::ErrorKind::Eof,
                )))
            }
            Some('"') => {
                input = &input[1..];
                return Ok((input, Token::StringLit(out)));
            }
            Some('\\') => {
                let rest = &input[1..];
                match rest.chars().next() {
                    None => {
                        return Err(nom::Err::Failure(nom::error::Error::new(
                            input,
                            nom::error::ErrorKind::Eof,
                        )))
                    }
                    Some('n') => {
                        out.push('\n');
                        input = &rest[1..];
                    }
                    Some(other) => {
                        out.push(other);
                        input = &rest[other.len_utf8()..];
                    }
                }
            }
            Some(c) => {
                out.push(c);
                input = &input[c.len_utf8()..];
            }
        }
    }
}

/// Identifier/number lexeme: runs until whitespace or a delimiter.
fn bare_lexeme(input: &str) -> IResult<&str, &str> {
    recognize(nom::multi::many1(none_of(" \t\r\n();'`,\""))).parse(input)
}

fn try_number(text: &str) -> Option<f64> {
    fn is_number_shaped(input: &str) -> IResult<&str, &str> {
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), opt(digit1))))),
                recognize((char('.'), digit1)),
            )),
        ))
        .parse(input)
    }

    match is_number_shaped(text) {
        Ok((rest, matched)) if rest.is_empty() => matched.parse::<f64>().ok(),
        _ => None,
    }
}

fn bare_token(input: &str) -> IResult<&str, Token> {
    let (input, text) = bare_lexeme(input)?;
    if text == "." {
        return Ok((input, Token::Dot));
    }
    if let Some(n) = try_number(text) {
        return Ok((input, Token::Numeric(n)));
    }
    Ok((input, Token::Identifier(text.to_string())))
}

fn next_token(input: &str) -> IResult<&str, Token> {
    alt((hash_literal, single_char_token, string_literal, bare_token)).parse(input)
}

/// Converts source text into an ordered token stream.
pub fn tokenize(input: &str) -> Result<VecDeque<Token>, EvalError> {
    let mut tokens = VecDeque::new();
    let mut rest = input;

    loop {
        let (after_trivia, _) = skip_trivia(rest)
            .map_err(|_| EvalError::syntax("unterminated block comment"))?;
        rest = after_trivia;
        if rest.is_empty() {
            break;
        }

        if rest.starts_with('#') && !rest.starts_with("#t") && !rest.starts_with("#f") {
            return Err(EvalError::syntax(format!(
                "unexpected character after '#' near '{}'",
                rest.chars().take(10).collect::<String>()
            )));
        }

        match next_token(rest) {
            Ok((remaining, token)) => {
                tokens.push_back(token);
                rest = remaining;
            }
            Err(_) => {
                return Err(EvalError::syntax(format!(
                    "unexpected character near '{}'",
                    rest.chars().take(10).collect::<String>()
                )))
            }
        }
    }

    Ok(tokens)
}
