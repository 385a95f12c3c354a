//! Text views and the decompiled documents bound to them.
//!
//! A [`TextView`] is whatever editor surface shows the breakpoint glyph. It
//! may or may not be showing decompiled code; when it is, it exposes a
//! [`DocumentViewer`] that knows which statement produced which IL range.
//! Not having a document viewer is normal and only means the formatter has no
//! statement to annotate the location with.

use std::ops::RangeInclusive;

use crate::decompiler::Decompiler;
use crate::types::{MethodRef, ModuleTokenId};

/// A decompiled statement and the method that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodStatement
{
    /// Method containing the statement
    pub method: MethodRef,
    /// IL offsets covered by the statement (end inclusive)
    pub il_span: RangeInclusive<u32>,
}

impl MethodStatement
{
    /// Whether `il_offset` falls inside this statement.
    #[must_use]
    pub fn contains(&self, il_offset: u32) -> bool
    {
        self.il_span.contains(&il_offset)
    }
}

/// A view showing decompiled code for one document tab
pub trait DocumentViewer
{
    /// Find the statement of `method` whose IL span covers `il_offset`.
    fn find_by_code_offset(&self, method: &ModuleTokenId, il_offset: u32) -> Option<MethodStatement>;

    /// Decompiler that produced the tab's content, if the tab has one.
    fn decompiler(&self) -> Option<&dyn Decompiler>;
}

/// Editor surface hosting the breakpoint glyph
pub trait TextView
{
    /// Decompiled document shown in this view, if any.
    fn document_viewer(&self) -> Option<&dyn DocumentViewer>;
}

/// A view with no decompiled document (plain source file, output window)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextView;

impl TextView for PlainTextView
{
    fn document_viewer(&self) -> Option<&dyn DocumentViewer>
    {
        None
    }
}

/// Document viewer backed by a fixed list of statements
///
/// Useful for hosts that compute statement maps eagerly, and for the CLI.
#[derive(Default)]
pub struct StatementMap
{
    statements: Vec<MethodStatement>,
    decompiler: Option<Box<dyn Decompiler>>,
}

impl StatementMap
{
    /// Create an empty map with no tab decompiler.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Bind the decompiler that produced this document.
    #[must_use]
    pub fn with_decompiler(mut self, decompiler: impl Decompiler + 'static) -> Self
    {
        self.decompiler = Some(Box::new(decompiler));
        self
    }

    /// Add a statement.
    pub fn insert(&mut self, statement: MethodStatement)
    {
        self.statements.push(statement);
    }

    /// Number of statements
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.statements.len()
    }

    /// Whether the map holds no statements
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.statements.is_empty()
    }
}

impl std::fmt::Debug for StatementMap
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("StatementMap")
            .field("statements", &self.statements)
            .field("decompiler", &self.decompiler.as_ref().map(|d| d.name().to_string()))
            .finish()
    }
}

impl DocumentViewer for StatementMap
{
    fn find_by_code_offset(&self, method: &ModuleTokenId, il_offset: u32) -> Option<MethodStatement>
    {
        self.statements
            .iter()
            .find(|statement| statement.method.id == *method && statement.contains(il_offset))
            .cloned()
    }

    fn decompiler(&self) -> Option<&dyn Decompiler>
    {
        self.decompiler.as_deref()
    }
}

/// A text view showing a [`StatementMap`]
#[derive(Debug, Default)]
pub struct DecompiledTextView
{
    document: StatementMap,
}

impl DecompiledTextView
{
    /// Show `document` in a view.
    #[must_use]
    pub fn new(document: StatementMap) -> Self
    {
        Self { document }
    }

    /// The bound document
    #[must_use]
    pub fn document(&self) -> &StatementMap
    {
        &self.document
    }
}

impl TextView for DecompiledTextView
{
    fn document_viewer(&self) -> Option<&dyn DocumentViewer>
    {
        Some(&self.document)
    }
}
