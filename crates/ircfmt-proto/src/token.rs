//! Tokens and the table that gives toggle codes their HTML.
//!
//! The tokenizer produces a flat list of [`Token`]s. Toggle tags become
//! integer [`TokenId`]s whose HTML fragments live in a [`TokenTable`]; the
//! nesting of the output is only implied by matching open/close ids.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::colors::{ColorSpec, Palette};
use crate::error::{Result, TableError};
use crate::format::TagKind;

/// Numeric id of an open or close code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u8);

impl TokenId {
    /// Wrap a raw id.
    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw id.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One element of a tokenized message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Plain text, not yet escaped.
    Literal(String),
    /// An open or close code from the [`TokenTable`].
    Code(TokenId),
    /// A color change.
    Color(ColorSpec),
}

impl Token {
    /// Returns true for [`Token::Literal`].
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true for [`Token::Color`].
    #[inline]
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// The id of a [`Token::Code`].
    #[inline]
    pub fn code(&self) -> Option<TokenId> {
        match self {
            Self::Code(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_owned())
    }
}

/// HTML element (and optional class) a toggle tag renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagStyle {
    /// Element name, e.g. `b`.
    pub element: String,
    /// Value of the `class` attribute, if any.
    pub class: Option<String>,
}

impl TagStyle {
    /// Style with a bare element.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            class: None,
        }
    }

    /// Add a class attribute.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn validate(&self, tag: TagKind) -> Result<()> {
        let mut chars = self.element.chars();
        let element_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric());
        if !element_ok {
            return Err(TableError::InvalidElement {
                tag,
                element: self.element.clone(),
            });
        }

        if let Some(class) = &self.class {
            let class_ok = !class.trim().is_empty()
                && !class
                    .chars()
                    .any(|c| matches!(c, '"' | '<' | '>' | '&') || c.is_control());
            if !class_ok {
                return Err(TableError::InvalidClass {
                    tag,
                    class: class.clone(),
                });
            }
        }

        Ok(())
    }

    fn open_fragment(&self) -> String {
        match &self.class {
            Some(class) => format!("<wbr><{} class=\"{}\">", self.element, class),
            None => format!("<wbr><{}>", self.element),
        }
    }

    fn close_fragment(&self) -> String {
        format!("</{}>", self.element)
    }
}

/// The element used for each toggle tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagStyles([TagStyle; 5]);

impl TagStyles {
    /// Style for `kind`.
    pub fn get(&self, kind: TagKind) -> &TagStyle {
        &self.0[kind.index()]
    }

    /// Replace the style for `kind`.
    pub fn set(&mut self, kind: TagKind, style: TagStyle) {
        self.0[kind.index()] = style;
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        Self([
            TagStyle::new("b"),
            TagStyle::new("tt"),
            TagStyle::new("span").with_class("inverse"),
            TagStyle::new("i"),
            TagStyle::new("u"),
        ])
    }
}

/// Immutable mapping between token ids and their HTML fragments.
///
/// Ids are handed out by a counter walking [`TagKind::ALL`]: each tag gets
/// an open id followed by a close id, and one final id closes a color span.
/// With the default order that is BOLD 1/2, MONOSPACE 3/4, INVERSE 5/6,
/// ITALIC 7/8, UNDERLINE 9/10 and CLOSE_COLOR 11.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTable {
    open: [TokenId; 5],
    close: [TokenId; 5],
    close_color: TokenId,
    /// Fragment for id `n` is at index `n - 1`.
    fragments: Vec<String>,
    palette: Palette,
}

impl TokenTable {
    /// Table with the default elements and the mIRC palette.
    pub fn new() -> Self {
        Self::build(&TagStyles::default(), Palette::default())
    }

    /// Table with custom elements and palette.
    pub fn with_styles(styles: &TagStyles, palette: Palette) -> Result<Self> {
        for kind in TagKind::ALL {
            styles.get(kind).validate(kind)?;
        }
        Ok(Self::build(styles, palette))
    }

    /// Process-wide default table, built on first use.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<TokenTable>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(TokenTable::new())))
    }

    fn build(styles: &TagStyles, palette: Palette) -> Self {
        let mut counter = 0u8;
        let mut open = [TokenId(0); 5];
        let mut close = [TokenId(0); 5];
        let mut fragments = Vec::with_capacity(TagKind::ALL.len() * 2 + 1);

        for kind in TagKind::ALL {
            let style = styles.get(kind);

            counter += 1;
            open[kind.index()] = TokenId(counter);
            fragments.push(style.open_fragment());

            counter += 1;
            close[kind.index()] = TokenId(counter);
            fragments.push(style.close_fragment());
        }

        counter += 1;
        fragments.push("</span>".to_owned());

        Self {
            open,
            close,
            close_color: TokenId(counter),
            fragments,
            palette,
        }
    }

    /// Id that opens `kind`.
    #[inline]
    pub fn open(&self, kind: TagKind) -> TokenId {
        self.open[kind.index()]
    }

    /// Id that closes `kind`.
    #[inline]
    pub fn close(&self, kind: TagKind) -> TokenId {
        self.close[kind.index()]
    }

    /// Id that closes a color span.
    #[inline]
    pub fn close_color(&self) -> TokenId {
        self.close_color
    }

    /// HTML for `id`, or `None` if the id is not in the table.
    pub fn fragment(&self, id: TokenId) -> Option<&str> {
        let index = usize::from(id.0).checked_sub(1)?;
        self.fragments.get(index).map(String::as_str)
    }

    /// Palette used to resolve color codes.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::new()
    }
}
