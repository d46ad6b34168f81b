//! # cart-parser: File Access for Cart Files
//!
//! Wraps the pure `cart-core` logic with everything that touches the outside
//! world: reading files, logging, configuration and report printing.
//!
//! ## Modules
//!
//! - [`gateway`] - Where file content comes from (disk or memory)
//! - [`pipeline`] - Read → validate → parse composition
//! - [`report`] - Text/JSON rendering of results
//! - [`config`] - Environment configuration for the binary
//! - [`error`] - Fatal pipeline errors
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_parser::{CartParser, MemoryGateway};
//!
//! let gateway = MemoryGateway::new()
//!     .with_file("cart.csv", "Product name,Price,Quantity\nTea,2.5,4\n");
//! let summary = CartParser::with_gateway(gateway).parse_cart("cart.csv")?;
//!
//! assert_eq!(summary.total, 10.0);
//! # Ok::<(), cart_parser::ParseError>(())
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod pipeline;
pub mod report;

pub use config::{CliConfig, ConfigError};
pub use error::{ParseError, ParseResult};
pub use gateway::{FileGateway, FsGateway, MemoryGateway};
pub use pipeline::{parse, CartParser};
pub use report::{CartSummary, OutputFormat, ValidationReport};
