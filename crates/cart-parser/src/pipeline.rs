//! # File Pipeline
//!
//! Composes the file gateway with the pure core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartParser::parse(path)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gateway.read_to_string ── io error ──► ParseError::Read               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_core::validate ── errors? ──► log each, ParseError::Validation   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_core::parse_line for every data line ──► Vec<CartItem>           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that want partial results should use [`CartParser::validate_file`]
//! and `cart_core::parse_line` directly: `parse` is all-or-nothing.

use std::path::Path;

use cart_core::{parse_line, validate, CartItem, ValidationError};
use tracing::{debug, error, info};

use crate::error::{ParseError, ParseResult};
use crate::gateway::{FileGateway, FsGateway};
use crate::report::CartSummary;

/// Reads, validates and parses cart files through a [`FileGateway`].
#[derive(Debug, Clone, Default)]
pub struct CartParser<G = FsGateway> {
    gateway: G,
}

impl CartParser<FsGateway> {
    /// Parser over the local file system.
    pub fn new() -> Self {
        CartParser { gateway: FsGateway }
    }
}

impl<G: FileGateway> CartParser<G> {
    /// Parser over a custom content source.
    pub fn with_gateway(gateway: G) -> Self {
        CartParser { gateway }
    }

    fn read(&self, path: &Path) -> ParseResult<String> {
        debug!(path = %path.display(), "Reading cart file");

        let content = self
            .gateway
            .read_to_string(path)
            .map_err(|source| ParseError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), bytes = content.len(), "Read cart file");
        Ok(content)
    }

    /// Reads a file and returns its validation errors.
    ///
    /// Invalid content is not an error here: it is the returned list.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ParseResult<Vec<ValidationError>> {
        let path = path.as_ref();
        let content = self.read(path)?;
        let errors = validate(&content);

        debug!(path = %path.display(), errors = errors.len(), "Validated cart file");
        Ok(errors)
    }

    /// Reads, validates and parses a file into items.
    ///
    /// ## Errors
    /// - [`ParseError::Read`] if the gateway fails
    /// - [`ParseError::Validation`] if any validation error is found
    pub fn parse(&self, path: impl AsRef<Path>) -> ParseResult<Vec<CartItem>> {
        let path = path.as_ref();
        let content = self.read(path)?;

        let errors = validate(&content);
        if !errors.is_empty() {
            for err in &errors {
                error!(
                    path = %path.display(),
                    kind = %err.kind,
                    row = err.row,
                    column = err.column_index(),
                    "{}",
                    err.message
                );
            }
            return Err(ParseError::Validation {
                path: path.to_path_buf(),
                errors,
            });
        }

        let items: Vec<CartItem> = content.lines().skip(1).map(parse_line).collect();

        info!(path = %path.display(), items = items.len(), "Parsed cart file");
        Ok(items)
    }

    /// Parses a file and totals it.
    pub fn parse_cart(&self, path: impl AsRef<Path>) -> ParseResult<CartSummary> {
        self.parse(path).map(CartSummary::from_items)
    }
}

/// Parses a file from the local file system.
///
/// ## Example
/// ```rust,no_run
/// let items = cart_parser::parse("samples/cart.csv")?;
/// println!("{} items", items.len());
/// # Ok::<(), cart_parser::ParseError>(())
/// ```
pub fn parse(path: impl AsRef<Path>) -> ParseResult<Vec<CartItem>> {
    CartParser::new().parse(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
