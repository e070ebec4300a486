//! # Command Tokenizer
//!
//! Splits the command string given on the command line into the argument
//! list handed to the external tool. Arguments are separated by single
//! spaces; a span wrapped in double quotes is kept together as one argument
//! with the quotes removed.
//!
//! ```
//! use multi_git::command::tokenize;
//!
//! let args = tokenize(r#"commit -m "first commit""#).unwrap();
//! assert_eq!(args, vec!["commit", "-m", "first commit"]);
//! ```
//!
//! There is no escaping: a quote character inside a quoted span cannot be
//! expressed. A span that is opened but never closed is rejected.

use std::fmt;

use crate::error::{Error, Result};

/// Split `command` into arguments.
///
/// Splitting happens on every single space, so an empty command yields one
/// empty argument and consecutive spaces yield empty arguments.
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut quoted: Option<Vec<&str>> = None;

    for piece in command.split(' ') {
        match quoted.take() {
            Some(mut words) => {
                if let Some(last) = piece.strip_suffix('"') {
                    words.push(last);
                    tokens.push(words.join(" "));
                } else {
                    words.push(piece);
                    quoted = Some(words);
                }
            }
            None => match piece.strip_prefix('"') {
                Some(rest) => match rest.strip_suffix('"') {
                    Some(inner) => tokens.push(inner.to_string()),
                    None => quoted = Some(vec![rest]),
                },
                None => tokens.push(piece.to_string()),
            },
        }
    }

    if quoted.is_some() {
        return Err(Error::UnbalancedQuotes {
            command: command.to_string(),
        });
    }

    Ok(tokens)
}

/// A command string together with its tokenized arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Tokenize `raw`, failing on unbalanced quotes.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self {
            raw: raw.to_string(),
            args: tokenize(raw)?,
        })
    }

    /// The arguments to pass to the tool, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
