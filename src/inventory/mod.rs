//! Inventory parsing and address syntax.
//!
//! - [`parser`] - The section/key-value dialect ([`InventoryParser`], [`ParsedInventory`])
//! - [`address`] - Host name, hostname and IP literal checks
//!
//! # Example
//!
//! ```
//! use invlint::inventory::{InventoryParser, is_valid_ip};
//!
//! let inventory = InventoryParser::parse("[web]\n10.0.0.5\n").unwrap();
//! let section = inventory.section("web").unwrap();
//! let (host, _) = section.options().next().unwrap();
//! assert!(is_valid_ip(host));
//! ```

pub mod address;
pub mod parser;

pub use address::{
    extract_variable, is_host_token, is_valid_hostname, is_valid_ip, MAX_HOSTNAME_LENGTH,
};
pub use parser::{InventoryParser, ParseError, ParsedInventory, Section, VARS_MARKER};
