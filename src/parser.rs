//! Lenient tokenizer for `product/version (comment)` sequences.
//!
//! Only the subset of the User-Agent grammar that this crate renders is
//! understood. Anything else is reported as [`Token::Malformed`] rather than
//! failing the whole string:
//!
//! - `name` without a `/` is a product with an empty version.
//! - `/1.0` (empty name) is malformed.
//! - A comment with no product in front of it is malformed.
//! - The first `)` closes a comment. A `(` inside a comment is kept as-is.
//! - An unterminated comment runs to the end of the input.

use crate::types::Product;

/// One item produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Product(Product),
    /// Raw text that could not be read as a product.
    Malformed(&'a str),
}

/// Iterator over the tokens of a User-Agent string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

/// Split `ua` into products and malformed fragments, in input order.
pub fn tokenize(ua: &str) -> Tokens<'_> {
    Tokens { input: ua, pos: 0 }
}

/// Parse `ua` into its products, dropping malformed fragments.
///
/// Empty or whitespace-only input yields an empty list.
pub fn parse_user_agent(ua: &str) -> Vec<Product> {
    tokenize(ua)
        .filter_map(|token| match token {
            Token::Product(product) => Some(product),
            Token::Malformed(raw) => {
                tracing::debug!(token = raw, "skipping malformed User-Agent token");
                None
            }
        })
        .collect()
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input: &'a str = self.input;
        let rest = input[self.pos..].trim_start();
        if rest.is_empty() {
            self.pos = input.len();
            return None;
        }
        let start = input.len() - rest.len();

        if rest.starts_with('(') {
            let (_, consumed) = read_comment(rest);
            self.pos = start + consumed;
            return Some(Token::Malformed(&input[start..self.pos]));
        }

        let word_len = rest
            .find(|c: char| c.is_whitespace() || c == '(')
            .unwrap_or(rest.len());
        let word = &rest[..word_len];
        self.pos = start + word_len;

        let (name, version) = word.split_once('/').unwrap_or((word, ""));
        if name.is_empty() {
            return Some(Token::Malformed(word));
        }

        let mut product = Product::new(name, version);

        let after = input[self.pos..].trim_start();
        if after.starts_with('(') {
            let comment_start = input.len() - after.len();
            let (comment, consumed) = read_comment(after);
            product.comment = comment.to_owned();
            self.pos = comment_start + consumed;
        }

        Some(Token::Product(product))
    }
}

/// `s` starts with `(`. Returns the comment body and the bytes consumed.
fn read_comment(s: &str) -> (&str, usize) {
    let body = &s[1..];
    match body.find(')') {
        Some(end) => (&body[..end], end + 2),
        None => (body.trim_end(), s.len()),
    }
}
