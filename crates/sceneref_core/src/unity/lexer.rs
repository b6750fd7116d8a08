use logos::{Lexer, Logos};

/// Skip to the end of a `/* ... */` comment; unterminated comments run to end of input.
fn block_comment(lex: &mut Lexer<Token>) {
	let rest = lex.remainder();
	let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
	lex.bump(len);
}

/// C# token kinds, just enough to find declarations.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum Token {
	#[regex(r"//[^\n]*")]
	LineComment,
	#[token("/*", block_comment)]
	BlockComment,
	/// Preprocessor line (`#if`, `#region`, ...).
	#[regex(r"#[^\n]*")]
	Directive,

	#[regex(r"@?[\p{L}_][\p{L}\p{N}_]*")]
	Ident,
	#[regex(r#""([^"\\\n]|\\.)*""#)]
	Str,
	#[regex(r#"@"([^"]|"")*""#)]
	VerbatimStr,
	#[regex(r"'([^'\\\n]|\\.)*'")]
	Char,
	#[regex(r"[0-9][0-9A-Za-z_.]*")]
	Number,

	#[token("{")]
	LBrace,
	#[token("}")]
	RBrace,
	#[token("(")]
	LParen,
	#[token(")")]
	RParen,
	#[token("[")]
	LBracket,
	#[token("]")]
	RBracket,
	#[token("<")]
	Lt,
	#[token(">")]
	Gt,
	#[token(",")]
	Comma,
	#[token(";")]
	Semi,
	#[token(":")]
	Colon,
	#[token("=")]
	Eq,
	#[token(".")]
	Dot,
	#[token("?")]
	Question,
	#[regex(r"[+\-*/%&|^!~$]")]
	Op,
}

impl Token {
	fn is_trivia(self) -> bool {
		matches!(self, Self::LineComment | Self::BlockComment | Self::Directive)
	}
}

/// One significant token with its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme<'a> {
	pub kind: Token,
	pub text: &'a str,
}

/// Tokenize C# source, dropping comments, preprocessor lines, and unknown characters.
pub(crate) fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
	let mut lexer = Token::lexer(source);
	let mut out = Vec::new();
	while let Some(result) = lexer.next() {
		let Ok(kind) = result else {
			continue;
		};
		if kind.is_trivia() {
			continue;
		}
		out.push(Lexeme { kind, text: lexer.slice() });
	}
	out
}

#[cfg(test)]
mod tests {
	use super::{Token, tokenize};

	fn kinds(source: &str) -> Vec<Token> {
		tokenize(source).into_iter().map(|item| item.kind).collect()
	}

	#[test]
	fn comments_and_directives_are_dropped() {
		let source = "#if UNITY_EDITOR\n// note { \n/* block } */ int /* unterminated {";
		assert_eq!(kinds(source), vec![Token::Ident]);
	}

	#[test]
	fn braces_inside_literals_stay_inside_literals() {
		let source = r#"x = "}{" + '{' + @"a""}";"#;
		assert_eq!(
			kinds(source),
			vec![Token::Ident, Token::Eq, Token::Str, Token::Op, Token::Char, Token::Op, Token::VerbatimStr, Token::Semi]
		);
	}

	#[test]
	fn identifiers_keep_their_text() {
		let lexemes = tokenize("public @class _név2;");
		let texts: Vec<&str> = lexemes.iter().map(|item| item.text).collect();
		assert_eq!(texts, vec!["public", "@class", "_név2", ";"]);
	}

	#[test]
	fn generic_closers_are_single_tokens() {
		assert_eq!(
			kinds("List<List<int>>"),
			vec![Token::Ident, Token::Lt, Token::Ident, Token::Lt, Token::Ident, Token::Gt, Token::Gt]
		);
	}
}
