use crate::unity::lexer::{Lexeme, Token, tokenize};

const MODIFIERS: &[&str] = &[
	"public", "private", "protected", "internal", "static", "const", "readonly", "volatile", "new", "abstract", "sealed", "virtual",
	"override", "extern", "unsafe", "partial", "async", "required", "fixed", "ref",
];

/// Kind of a C# type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
	/// `class`.
	Class,
	/// `struct`.
	Struct,
	/// `interface`.
	Interface,
	/// `record`, `record class`, or `record struct`.
	Record,
}

impl TypeKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Class => "class",
			Self::Struct => "struct",
			Self::Interface => "interface",
			Self::Record => "record",
		}
	}
}

/// One field declaration statement, possibly declaring several names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
	/// Attribute names as written (`SerializeField`, `UnityEngine.Header`, ...).
	pub attributes: Vec<String>,
	/// Modifier keywords in source order.
	pub modifiers: Vec<String>,
	/// Declared type as written, without whitespace.
	pub type_name: String,
	/// Declared variable names (`a, b` yields two).
	pub names: Vec<String>,
}

impl FieldDecl {
	/// Whether the `public` keyword is present.
	pub fn is_public(&self) -> bool {
		self.has_modifier("public")
	}

	/// Whether the field is `static` or `const`.
	pub fn is_static(&self) -> bool {
		self.has_modifier("static") || self.has_modifier("const")
	}

	/// Whether any attribute name contains `needle`.
	pub fn has_attribute(&self, needle: &str) -> bool {
		self.attributes.iter().any(|name| name.contains(needle))
	}

	fn has_modifier(&self, word: &str) -> bool {
		self.modifiers.iter().any(|item| item == word)
	}
}

/// One type declaration with its direct base list and direct fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
	/// Declared type name (without generic parameters).
	pub name: String,
	/// Declaration keyword.
	pub kind: TypeKind,
	/// Direct supertypes as written.
	pub bases: Vec<String>,
	/// Fields declared directly in this type's body.
	pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
	/// Whether the direct base list contains `base` by textual equality.
	pub fn extends(&self, base: &str) -> bool {
		self.bases.iter().any(|item| item == base)
	}
}

/// All type declarations found in one source file, nested types included, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDecls {
	/// Flattened type declarations.
	pub types: Vec<TypeDecl>,
}

/// Parse C# source into type and field declarations.
///
/// Best effort: constructs the parser does not understand are skipped up to
/// the next `;` or balanced `{}` block, and parsing resumes from there.
pub fn parse_declarations(source: &str) -> SourceDecls {
	let mut parser = Parser {
		tokens: tokenize(source),
		pos: 0,
		types: Vec::new(),
	};
	while parser.peek().is_some() {
		parser.parse_members(None);
		// Stray closing brace at file scope.
		parser.bump();
	}
	SourceDecls { types: parser.types }
}

struct Parser<'a> {
	tokens: Vec<Lexeme<'a>>,
	pos: usize,
	types: Vec<TypeDecl>,
}

impl<'a> Parser<'a> {
	fn peek(&self) -> Option<Lexeme<'a>> {
		self.peek_at(0)
	}

	fn peek_at(&self, offset: usize) -> Option<Lexeme<'a>> {
		self.tokens.get(self.pos + offset).copied()
	}

	fn bump(&mut self) -> Option<Lexeme<'a>> {
		let item = self.peek()?;
		self.pos += 1;
		Some(item)
	}

	fn at(&self, kind: Token) -> bool {
		self.peek().is_some_and(|item| item.kind == kind)
	}

	fn at_word(&self, word: &str) -> bool {
		self.peek().is_some_and(|item| item.kind == Token::Ident && item.text == word)
	}

	fn nth_is(&self, offset: usize, kind: Token) -> bool {
		self.peek_at(offset).is_some_and(|item| item.kind == kind)
	}

	fn eat(&mut self, kind: Token) -> bool {
		if self.at(kind) {
			self.pos += 1;
			return true;
		}
		false
	}

	fn ident(&mut self) -> Option<&'a str> {
		if !self.at(Token::Ident) {
			return None;
		}
		self.bump().map(|item| item.text.trim_start_matches('@'))
	}

	/// Parse members until a closing brace (left unconsumed) or end of input.
	fn parse_members(&mut self, owner: Option<usize>) {
		while let Some(item) = self.peek() {
			if item.kind == Token::RBrace {
				return;
			}
			let start = self.pos;
			self.parse_member(owner);
			if self.pos == start {
				self.pos += 1;
			}
		}
	}

	fn parse_member(&mut self, owner: Option<usize>) {
		if self.eat(Token::Semi) {
			return;
		}

		let attributes = self.parse_attributes();
		let modifiers = self.parse_modifiers();
		let Some(item) = self.peek() else {
			return;
		};

		match (item.kind, item.text) {
			(Token::Ident, "namespace") => self.parse_namespace(),
			(Token::Ident, "using") => self.skip_statement(),
			(Token::Ident, "class" | "struct" | "interface" | "record") => self.parse_type(),
			(Token::Ident, "enum" | "delegate" | "event") => self.skip_member(),
			(Token::Ident, _) | (Token::LParen, _) => self.parse_typed_member(owner, attributes, modifiers),
			_ => self.skip_member(),
		}
	}

	fn parse_attributes(&mut self) -> Vec<String> {
		let mut names = Vec::new();
		while self.eat(Token::LBracket) {
			// Target specifier: `[field: SerializeField]`.
			if self.at(Token::Ident) && self.nth_is(1, Token::Colon) && !self.nth_is(2, Token::Colon) {
				self.pos += 2;
			}
			loop {
				let Some(name) = self.qualified_name() else {
					break;
				};
				names.push(name);
				if self.at(Token::LParen) {
					self.skip_balanced(Token::LParen, Token::RParen);
				}
				if !self.eat(Token::Comma) {
					break;
				}
			}
			self.skip_past_close(Token::LBracket, Token::RBracket);
		}
		names
	}

	fn parse_modifiers(&mut self) -> Vec<String> {
		let mut out = Vec::new();
		while let Some(item) = self.peek() {
			if item.kind != Token::Ident || !MODIFIERS.contains(&item.text) {
				break;
			}
			out.push(item.text.to_owned());
			self.pos += 1;
		}
		out
	}

	fn parse_namespace(&mut self) {
		self.bump();
		let _ = self.qualified_name();
		if self.eat(Token::LBrace) {
			self.parse_members(None);
			self.eat(Token::RBrace);
		} else {
			// File-scoped namespace: members follow at this level.
			self.eat(Token::Semi);
		}
	}

	fn parse_type(&mut self) {
		let Some(keyword) = self.bump() else {
			return;
		};
		let kind = match keyword.text {
			"class" => TypeKind::Class,
			"struct" => TypeKind::Struct,
			"interface" => TypeKind::Interface,
			_ => {
				if self.at_word("class") || self.at_word("struct") {
					self.bump();
				}
				TypeKind::Record
			}
		};

		let Some(name) = self.ident() else {
			self.skip_member();
			return;
		};
		if self.at(Token::Lt) {
			self.skip_balanced(Token::Lt, Token::Gt);
		}
		if self.at(Token::LParen) {
			self.skip_balanced(Token::LParen, Token::RParen);
		}

		let mut bases = Vec::new();
		if self.eat(Token::Colon) {
			while let Some(base) = self.type_name() {
				bases.push(base);
				if self.at(Token::LParen) {
					self.skip_balanced(Token::LParen, Token::RParen);
				}
				if !self.eat(Token::Comma) {
					break;
				}
			}
		}

		// Generic constraints up to the body.
		while let Some(item) = self.peek() {
			if matches!(item.kind, Token::LBrace | Token::Semi | Token::RBrace) {
				break;
			}
			self.pos += 1;
		}

		let idx = self.types.len();
		self.types.push(TypeDecl {
			name: name.to_owned(),
			kind,
			bases,
			fields: Vec::new(),
		});

		if self.eat(Token::LBrace) {
			self.parse_members(Some(idx));
			self.eat(Token::RBrace);
		}
		self.eat(Token::Semi);
	}

	fn parse_typed_member(&mut self, owner: Option<usize>, attributes: Vec<String>, modifiers: Vec<String>) {
		// Constructor: `Name(`.
		if self.nth_is(1, Token::LParen) {
			self.skip_member();
			return;
		}
		let Some(type_name) = self.type_name() else {
			self.skip_member();
			return;
		};
		if self.at_word("this") || self.at_word("operator") {
			self.skip_member();
			return;
		}
		let Some(first) = self.ident() else {
			self.skip_member();
			return;
		};

		let Some(next) = self.peek() else {
			return;
		};
		match next.kind {
			Token::LBrace => {
				self.skip_balanced(Token::LBrace, Token::RBrace);
				if self.at(Token::Eq) {
					self.skip_statement();
				}
			}
			Token::Eq if self.nth_is(1, Token::Gt) => self.skip_statement(),
			Token::Eq | Token::Comma | Token::Semi | Token::LBracket => {
				let names = self.parse_declarators(first);
				if let Some(idx) = owner {
					self.types[idx].fields.push(FieldDecl {
						attributes,
						modifiers,
						type_name,
						names,
					});
				}
			}
			_ => self.skip_member(),
		}
	}

	fn parse_declarators(&mut self, first: &str) -> Vec<String> {
		let mut names = vec![first.to_owned()];
		loop {
			if self.at(Token::LBracket) {
				self.skip_balanced(Token::LBracket, Token::RBracket);
			}
			if self.eat(Token::Eq) {
				self.skip_initializer();
			}
			if !self.eat(Token::Comma) {
				break;
			}
			let Some(name) = self.ident() else {
				break;
			};
			names.push(name.to_owned());
		}
		self.eat(Token::Semi);
		names
	}

	/// `Ident(.Ident)*` with optional `global::` prefix.
	fn qualified_name(&mut self) -> Option<String> {
		let mut out = self.ident()?.to_owned();
		loop {
			if self.at(Token::Colon) && self.nth_is(1, Token::Colon) && self.nth_is(2, Token::Ident) {
				self.pos += 2;
				out.push_str("::");
			} else if self.at(Token::Dot) && self.nth_is(1, Token::Ident) {
				self.pos += 1;
				out.push('.');
			} else {
				return Some(out);
			}
			out.push_str(self.ident()?);
		}
	}

	/// Render a type reference as written, without whitespace except after commas.
	fn type_name(&mut self) -> Option<String> {
		let mut out = if self.at(Token::LParen) {
			self.render_balanced(Token::LParen, Token::RParen)
		} else {
			let mut out = self.qualified_name()?;
			while self.at(Token::Lt) {
				out.push_str(&self.render_balanced(Token::Lt, Token::Gt));
				if self.at(Token::Dot) && self.nth_is(1, Token::Ident) {
					self.pos += 1;
					out.push('.');
					out.push_str(&self.qualified_name()?);
				}
			}
			out
		};

		loop {
			if self.eat(Token::Question) {
				out.push('?');
			} else if self.at(Token::LBracket) && (self.nth_is(1, Token::RBracket) || self.nth_is(1, Token::Comma)) {
				out.push_str(&self.render_balanced(Token::LBracket, Token::RBracket));
			} else if self.peek().is_some_and(|item| item.kind == Token::Op && item.text == "*") {
				self.pos += 1;
				out.push('*');
			} else {
				return Some(out);
			}
		}
	}

	fn render_balanced(&mut self, open: Token, close: Token) -> String {
		let start = self.pos;
		self.skip_balanced(open, close);
		let mut out = String::new();
		for item in &self.tokens[start..self.pos] {
			out.push_str(item.text);
			if item.kind == Token::Comma {
				out.push(' ');
			}
		}
		out
	}

	/// Consume `open ... close`, counting nesting of the same pair.
	fn skip_balanced(&mut self, open: Token, close: Token) {
		if !self.eat(open) {
			return;
		}
		self.skip_past_close(open, close);
	}

	/// Consume up to and including the `close` matching an already consumed `open`.
	fn skip_past_close(&mut self, open: Token, close: Token) {
		let mut depth = 1_usize;
		while let Some(item) = self.bump() {
			if item.kind == open {
				depth += 1;
			} else if item.kind == close {
				depth -= 1;
				if depth == 0 {
					return;
				}
			}
		}
	}

	/// Skip a field initializer, stopping before `,` `;` or `}` at nesting depth zero.
	fn skip_initializer(&mut self) {
		let mut depth = 0_usize;
		while let Some(item) = self.peek() {
			match item.kind {
				Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
				Token::RParen | Token::RBracket | Token::RBrace if depth > 0 => depth -= 1,
				Token::RBrace | Token::Comma | Token::Semi if depth == 0 => return,
				Token::Ident if self.nth_is(1, Token::Lt) => {
					self.pos += 1;
					if !self.try_skip_type_args() {
						self.pos += 1;
					}
					continue;
				}
				_ => {}
			}
			self.pos += 1;
		}
	}

	/// Skip `<...>` when it only holds type-like tokens; otherwise leave the position untouched.
	fn try_skip_type_args(&mut self) -> bool {
		let mut depth = 0_usize;
		for (offset, item) in self.tokens[self.pos..].iter().enumerate() {
			match item.kind {
				Token::Lt => depth += 1,
				Token::Gt => {
					depth -= 1;
					if depth == 0 {
						self.pos += offset + 1;
						return true;
					}
				}
				Token::Ident | Token::Dot | Token::Comma | Token::Question | Token::LBracket | Token::RBracket => {}
				_ => return false,
			}
		}
		false
	}

	/// Skip to the end of the current statement (`;` consumed) at nesting depth zero.
	fn skip_statement(&mut self) {
		let mut depth = 0_usize;
		while let Some(item) = self.peek() {
			match item.kind {
				Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
				Token::RParen | Token::RBracket | Token::RBrace if depth > 0 => depth -= 1,
				Token::RBrace => return,
				Token::Semi if depth == 0 => {
					self.pos += 1;
					return;
				}
				_ => {}
			}
			self.pos += 1;
		}
	}

	/// Skip an unrecognized member: up to `;`, or through the first balanced `{}` body.
	fn skip_member(&mut self) {
		let mut depth = 0_usize;
		while let Some(item) = self.peek() {
			match item.kind {
				Token::LParen | Token::LBracket => depth += 1,
				Token::RParen | Token::RBracket if depth > 0 => depth -= 1,
				Token::LBrace if depth == 0 => {
					self.skip_balanced(Token::LBrace, Token::RBrace);
					return;
				}
				Token::RBrace if depth == 0 => return,
				Token::Semi if depth == 0 => {
					self.pos += 1;
					return;
				}
				_ => {}
			}
			self.pos += 1;
		}
	}
}

#[cfg(test)]
mod tests;
