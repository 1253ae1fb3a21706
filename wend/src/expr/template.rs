//! Template segments: literal text interleaved with formatted values.
//!
//! A template renders to a single path segment such as
//! `chunk_0007-of-0100.parquet`. Interpolations hold either a [`Param`],
//! looked up at resolution time, or a fixed [`Value`]. Each carries a
//! format specifier (see [`crate::format`]).
//!
//! # Examples
//!
//! ```
//! use wend::{Bindings, Template};
//!
//! let parsed = Template::parse("chunk_{idx:04d}-of-{total:04d}.parquet").unwrap();
//! let built = Template::builder()
//!     .text("chunk_")
//!     .param_with("idx", "04d")
//!     .text("-of-")
//!     .param_with("total", "04d")
//!     .text(".parquet")
//!     .build();
//! assert_eq!(parsed, built);
//!
//! let bindings = Bindings::from([("idx", 7), ("total", 100)]);
//! assert_eq!(parsed.render(&bindings).unwrap(), "chunk_0007-of-0100.parquet");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::bindings::Bindings;
use crate::error::{Error, Result};
use crate::format::format_value;
use crate::param::Param;
use crate::value::Value;

/// What an interpolation substitutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolated {
    /// A param looked up in the bindings.
    Param(Param),
    /// A value fixed at construction time.
    Value(Value),
}

/// A formatted substitution inside a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpolation {
    /// The substituted param or value.
    pub value: Interpolated,
    /// Format specifier applied to the value; empty for plain display.
    pub spec: String,
}

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// Text copied verbatim.
    Text(String),
    /// A formatted substitution.
    Interpolation(Interpolation),
}

/// An ordered sequence of text and interpolations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    fragments: Vec<Fragment>,
}

impl Template {
    /// Start building a template fragment by fragment.
    #[must_use]
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// Parse template source text.
    ///
    /// Placeholders are written `{name}` or `{name:spec}` and each name
    /// becomes a [`Param`]. Literal braces are written `{{` and `}}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`] for unbalanced braces or a
    /// placeholder name that is not an identifier.
    pub fn parse(source: &str) -> Result<Self> {
        let syntax = |position: usize, reason: &str| Error::TemplateSyntax {
            template: source.to_string(),
            position,
            reason: reason.to_string(),
        };

        let mut builder = TemplateBuilder::new();
        let mut chars = source.char_indices().peekable();
        while let Some((pos, c)) = chars.next() {
            let next = chars.peek().map(|&(_, next)| next);
            match c {
                '{' if next == Some('{') => {
                    chars.next();
                    builder = builder.text("{");
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    while let Some((inner_pos, inner)) = chars.next() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(syntax(inner_pos, "nested '{' in placeholder")),
                            _ => body.push(inner),
                        }
                    }
                    if !closed {
                        return Err(syntax(pos, "unclosed placeholder"));
                    }
                    let (name, spec) = body.split_once(':').unwrap_or((body.as_str(), ""));
                    if !is_identifier(name) {
                        return Err(syntax(pos, "placeholder name must be an identifier"));
                    }
                    builder = builder.param_with(name, spec);
                }
                '}' if next == Some('}') => {
                    chars.next();
                    builder = builder.text("}");
                }
                '}' => return Err(syntax(pos, "single '}' outside a placeholder")),
                _ => builder = builder.text(c.to_string()),
            }
        }
        Ok(builder.build())
    }

    /// The fragments in order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The params interpolated by this template, in order of appearance.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Interpolation(Interpolation {
                value: Interpolated::Param(param),
                ..
            }) => Some(param),
            _ => None,
        })
    }

    /// Names of the params this template needs.
    #[must_use]
    pub fn required_params(&self) -> BTreeSet<String> {
        self.params().map(|param| param.name().to_string()).collect()
    }

    /// Render the template against bindings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBindings`] if an interpolated param has no
    /// binding, or [`Error::Format`] if a specifier does not apply to the
    /// bound value.
    pub fn render(&self, bindings: &Bindings) -> Result<String> {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => out.push_str(text),
                Fragment::Interpolation(Interpolation { value, spec }) => {
                    let value = match value {
                        Interpolated::Param(param) => {
                            bindings.get(param.name()).ok_or_else(|| Error::MissingBindings {
                                missing: [param.name().to_string()].into(),
                            })?
                        }
                        Interpolated::Value(value) => value,
                    };
                    out.push_str(&format_value(value, spec)?);
                }
            }
        }
        Ok(out)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => f.write_str(&escape_braces(text))?,
                Fragment::Interpolation(Interpolation { value, spec }) => {
                    let shown = match value {
                        Interpolated::Param(param) => param.name().to_string(),
                        Interpolated::Value(value) => value.to_string(),
                    };
                    if spec.is_empty() {
                        write!(f, "{{{shown}}}")?;
                    } else {
                        write!(f, "{{{shown}:{spec}}}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builds a [`Template`] one fragment at a time.
///
/// Adjacent text fragments are merged and empty text is dropped.
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    fragments: Vec<Fragment>,
}

impl TemplateBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        if let Some(Fragment::Text(last)) = self.fragments.last_mut() {
            last.push_str(&text);
        } else {
            self.fragments.push(Fragment::Text(text));
        }
        self
    }

    /// Append a param rendered with its plain display form.
    #[must_use]
    pub fn param(self, param: impl Into<Param>) -> Self {
        self.param_with(param, "")
    }

    /// Append a param rendered with a format specifier.
    #[must_use]
    pub fn param_with(self, param: impl Into<Param>, spec: impl Into<String>) -> Self {
        self.interpolate(Interpolated::Param(param.into()), spec.into())
    }

    /// Append a fixed value rendered with its plain display form.
    #[must_use]
    pub fn value(self, value: impl Into<Value>) -> Self {
        self.value_with(value, "")
    }

    /// Append a fixed value rendered with a format specifier.
    #[must_use]
    pub fn value_with(self, value: impl Into<Value>, spec: impl Into<String>) -> Self {
        self.interpolate(Interpolated::Value(value.into()), spec.into())
    }

    fn interpolate(mut self, value: Interpolated, spec: String) -> Self {
        self.fragments
            .push(Fragment::Interpolation(Interpolation { value, spec }));
        self
    }

    /// Finish the template.
    #[must_use]
    pub fn build(self) -> Template {
        Template {
            fragments: self.fragments,
        }
    }
}
