//! Inventory file parsing.
//!
//! This module turns the section/key-value inventory dialect into a
//! [`ParsedInventory`]: an ordered set of named [`Section`]s, each holding
//! an ordered mapping of option name to optional raw value.

use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::{InvlintError, Result};

/// Substring that marks a section as a variable-definition block.
pub const VARS_MARKER: &str = ":vars";

/// A syntax error in an inventory file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// Line number (1-indexed).
    pub line: usize,
    /// What was wrong with the line.
    pub message: String,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A named group of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: IndexMap<String, Option<String>>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    /// Add an option, replacing the value of an existing option with the same name.
    pub fn with_option(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.set(name.into(), value.map(str::to_string));
        self
    }

    /// Section name as written between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this section defines variables rather than listing hosts.
    pub fn is_vars(&self) -> bool {
        self.name.contains(VARS_MARKER)
    }

    /// Iterate over options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Look up an option. The outer `None` means the option is not declared.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.options.get(name).map(|v| v.as_deref())
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the section declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn set(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value);
    }
}

/// An inventory file after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInventory {
    sections: IndexMap<String, Section>,
}

impl ParsedInventory {
    /// Create an inventory with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, replacing any section with the same name in place.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.insert(section.name.clone(), section);
        self
    }

    /// Iterate over sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Look up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Whether a section with this exact name exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the inventory has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Parses inventory files into a [`ParsedInventory`].
///
/// # Supported Formats
///
/// - Section headers: `[webservers]`, `[webservers:vars]`
/// - Bare keys: `web1.example.com`
/// - Key with inline variables: `web1 ansible_host=10.0.0.5 ansible_port=2222`
/// - Assignments: `key=value` or `key = value`, plus `key: value` in `:vars` sections
/// - Option names are folded to lowercase; section names keep their case
/// - Comments: lines starting with `#` or `;`, and ` # trailing` comments
///
/// A repeated section header re-opens the earlier section; a repeated
/// option keeps its first position and takes the later value.
///
/// # Example
///
/// ```
/// use invlint::inventory::InventoryParser;
///
/// let content = r#"
/// [wordpress_servers]
/// web1 ansible_host=10.0.0.5
///
/// [wordpress_servers:vars]
/// wordpress_db_password=Xk9#mPqz2A
/// "#;
///
/// let inventory = InventoryParser::parse(content).unwrap();
/// let hosts = inventory.section("wordpress_servers").unwrap();
/// assert_eq!(hosts.get("web1"), Some(Some("ansible_host=10.0.0.5")));
/// assert!(inventory.section("wordpress_servers:vars").unwrap().is_vars());
/// ```
pub struct InventoryParser;

impl InventoryParser {
    /// Parse inventory content.
    pub fn parse(content: &str) -> std::result::Result<ParsedInventory, ParseError> {
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        let mut current: Option<String> = None;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            // Skip empty lines and full-line comments
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let line = Self::strip_inline_comment(line);

            if line.starts_with('[') {
                let name = Self::parse_header(line, line_no)?;
                sections
                    .entry(name.clone())
                    .or_insert_with(|| Section::new(name.clone()));
                current = Some(name);
                continue;
            }

            let Some(section_name) = current.as_ref() else {
                return Err(ParseError::new(
                    line_no,
                    format!("option '{}' appears before any section header", line),
                ));
            };

            if let Some(section) = sections.get_mut(section_name) {
                let (name, value) = Self::parse_option(line, line_no, section.is_vars())?;
                section.set(name, value);
            }
        }

        tracing::debug!("Parsed inventory with {} section(s)", sections.len());

        Ok(ParsedInventory { sections })
    }

    /// Load and parse an inventory file from a path.
    ///
    /// # Errors
    ///
    /// Returns `InventoryNotFound` if the file doesn't exist,
    /// `InventoryUnreadable` if it cannot be read as UTF-8 text, and
    /// `InventoryParseError` if the content is malformed.
    pub fn load(path: &Path) -> Result<ParsedInventory> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InvlintError::InventoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                InvlintError::InventoryUnreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::parse(&content).map_err(|source| InvlintError::InventoryParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a `[name]` header line.
    fn parse_header(line: &str, line_no: usize) -> std::result::Result<String, ParseError> {
        let inner = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                ParseError::new(line_no, format!("malformed section header '{}'", line))
            })?;

        let name = inner.trim();
        if name.is_empty() {
            return Err(ParseError::new(line_no, "empty section header"));
        }

        Ok(name.to_string())
    }

    /// Split an option line into its name and optional raw value.
    ///
    /// The name ends at the first whitespace or `=`, or also at `:` inside a
    /// `:vars` section (host names may be IPv6 literals). Everything after
    /// it, minus one leading delimiter, is the raw value. Names are folded
    /// to lowercase.
    fn parse_option(
        line: &str,
        line_no: usize,
        in_vars: bool,
    ) -> std::result::Result<(String, Option<String>), ParseError> {
        let is_delimiter = |c: char| c == '=' || (in_vars && c == ':');

        let Some(split) = line.find(|c: char| c.is_whitespace() || is_delimiter(c)) else {
            return Ok((line.to_lowercase(), None));
        };

        if split == 0 {
            return Err(ParseError::new(
                line_no,
                format!("option '{}' has no name", line),
            ));
        }

        let name = line[..split].to_lowercase();
        let rest = line[split..].trim_start();
        let value = rest
            .strip_prefix(is_delimiter)
            .map(str::trim_start)
            .unwrap_or(rest);

        Ok((name, Some(value.to_string())))
    }

    /// Drop a trailing ` # comment`. A `#` glued to a value is kept.
    fn strip_inline_comment(line: &str) -> &str {
        let mut prev_is_space = false;
        for (idx, c) in line.char_indices() {
            if c == '#' && prev_is_space {
                return line[..idx].trim_end();
            }
            prev_is_space = c.is_whitespace();
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_sections_in_order() {
        let content = r#"
[wordpress_servers]
web1

[database_servers]
db1

[all:vars]
ansible_user=deploy
"#;

        let inventory = InventoryParser::parse(content).unwrap();
        let names: Vec<&str> = inventory.sections().map(|s| s.name()).collect();

        assert_eq!(
            names,
            vec!["wordpress_servers", "database_servers", "all:vars"]
        );
    }

    #[test]
    fn bare_key_has_no_value() {
        let inventory = InventoryParser::parse("[web]\nweb1.example.com\n").unwrap();
        let web = inventory.section("web").unwrap();

        assert_eq!(web.get("web1.example.com"), Some(None));
    }

    #[test]
    fn host_line_keeps_inline_variables_as_value() {
        let content = "[web]\nweb1 ansible_host=10.0.0.5 ansible_user=root\n";

        let inventory = InventoryParser::parse(content).unwrap();
        let web = inventory.section("web").unwrap();

        assert_eq!(
            web.get("web1"),
            Some(Some("ansible_host=10.0.0.5 ansible_user=root"))
        );
    }

    #[test]
    fn handles_assignments_with_and_without_spaces() {
        let content = r#"
[web:vars]
tight=value
loose = spaced value
empty=
"#;

        let inventory = InventoryParser::parse(content).unwrap();
        let vars = inventory.section("web:vars").unwrap();

        assert_eq!(vars.get("tight"), Some(Some("value")));
        assert_eq!(vars.get("loose"), Some(Some("spaced value")));
        assert_eq!(vars.get("empty"), Some(Some("")));
    }

    #[test]
    fn values_with_equals_are_kept_whole() {
        let content = "[all:vars]\nansible_ssh_common_args=-o StrictHostKeyChecking=no\n";

        let inventory = InventoryParser::parse(content).unwrap();
        let vars = inventory.section("all:vars").unwrap();

        assert_eq!(
            vars.get("ansible_ssh_common_args"),
            Some(Some("-o StrictHostKeyChecking=no"))
        );
    }

    #[test]
    fn skips_comments() {
        let content = r#"
# full line comment
; another comment
[web]
web1 # trailing comment
web2 ansible_host=10.0.0.6
"#;

        let inventory = InventoryParser::parse(content).unwrap();
        let web = inventory.section("web").unwrap();

        assert_eq!(web.len(), 2);
        assert_eq!(web.get("web1"), Some(None));
    }

    #[test]
    fn hash_inside_value_is_not_a_comment() {
        let content = "[app:vars]\nwordpress_db_password=Xk9#mPqz2A\n";

        let inventory = InventoryParser::parse(content).unwrap();

        assert_eq!(
            inventory
                .section("app:vars")
                .unwrap()
                .get("wordpress_db_password"),
            Some(Some("Xk9#mPqz2A"))
        );
    }

    #[test]
    fn empty_section_is_kept() {
        let inventory = InventoryParser::parse("[empty]\n[web]\nweb1\n").unwrap();

        assert!(inventory.section("empty").unwrap().is_empty());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn repeated_section_reopens_earlier_one() {
        let content = r#"
[web]
web1 ansible_port=22
[db]
db1
[web]
web2
web1 ansible_port=2222
"#;

        let inventory = InventoryParser::parse(content).unwrap();
        let names: Vec<&str> = inventory.sections().map(|s| s.name()).collect();
        let web = inventory.section("web").unwrap();
        let hosts: Vec<&str> = web.options().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["web", "db"]);
        assert_eq!(hosts, vec!["web1", "web2"]);
        assert_eq!(web.get("web1"), Some(Some("ansible_port=2222")));
    }

    #[test]
    fn keeps_section_case_and_lowercases_options() {
        let inventory =
            InventoryParser::parse("[Web]\nWeb1.Example.com\n[Web:vars]\nWP_Admin_Password=Ab\n")
                .unwrap();

        assert!(inventory.has_section("Web"));
        assert!(!inventory.has_section("web"));
        let web = inventory.section("Web").unwrap();
        assert!(web.get("web1.example.com").is_some());
        assert!(web.get("Web1.Example.com").is_none());
        assert_eq!(
            inventory.section("Web:vars").unwrap().get("wp_admin_password"),
            Some(Some("Ab"))
        );
    }

    #[test]
    fn colon_delimits_options_in_vars_sections() {
        let content = "[all:vars]\nwordpress_db_password: Xk9#mPqz2A\nansible_user : deploy\n";

        let inventory = InventoryParser::parse(content).unwrap();
        let vars = inventory.section("all:vars").unwrap();

        assert_eq!(vars.get("wordpress_db_password"), Some(Some("Xk9#mPqz2A")));
        assert_eq!(vars.get("ansible_user"), Some(Some("deploy")));
    }

    #[test]
    fn colon_is_part_of_host_names() {
        let content = "[web]\n2001:db8::1 ansible_port=22\nfe80::\n";

        let inventory = InventoryParser::parse(content).unwrap();
        let web = inventory.section("web").unwrap();

        assert_eq!(web.get("2001:db8::1"), Some(Some("ansible_port=22")));
        assert_eq!(web.get("fe80::"), Some(None));
    }

    #[test]
    fn option_before_section_is_an_error() {
        let err = InventoryParser::parse("web1\n[web]\n").unwrap_err();

        assert_eq!(err.line, 1);
        assert!(err.message.contains("before any section header"));
    }

    #[test]
    fn unclosed_header_is_an_error() {
        let err = InventoryParser::parse("[web]\nweb1\n[broken\n").unwrap_err();

        assert_eq!(err.line, 3);
        assert!(err.message.contains("malformed section header"));
    }

    #[test]
    fn empty_header_is_an_error() {
        let err = InventoryParser::parse("[ ]\n").unwrap_err();

        assert_eq!(err.message, "empty section header");
    }

    #[test]
    fn nameless_option_is_an_error() {
        let err = InventoryParser::parse("[web]\n= value\n").unwrap_err();

        assert_eq!(err.line, 2);
    }

    #[test]
    fn vars_marker_detection() {
        assert!(Section::new("web:vars").is_vars());
        assert!(Section::new("all:vars").is_vars());
        assert!(!Section::new("web").is_vars());
        assert!(!Section::new("web:children").is_vars());
    }

    #[test]
    fn builder_replaces_section_with_same_name() {
        let inventory = ParsedInventory::new()
            .with_section(Section::new("web").with_option("web1", None))
            .with_section(Section::new("web").with_option("web2", None));

        assert_eq!(inventory.len(), 1);
        assert!(inventory.section("web").unwrap().get("web1").is_none());
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts.ini");
        fs::write(&path, "[web]\nweb1\n").unwrap();

        let inventory = InventoryParser::load(&path).unwrap();

        assert!(inventory.has_section("web"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();

        let err = InventoryParser::load(&temp.path().join("missing.ini")).unwrap_err();

        assert!(matches!(err, InvlintError::InventoryNotFound { .. }));
    }

    #[test]
    fn load_directory_is_unreadable() {
        let temp = TempDir::new().unwrap();

        let err = InventoryParser::load(temp.path()).unwrap_err();

        assert!(matches!(err, InvlintError::InventoryUnreadable { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hosts.ini");
        fs::write(&path, "orphan\n").unwrap();

        let err = InventoryParser::load(&path).unwrap_err();

        assert!(matches!(err, InvlintError::InventoryParseError { .. }));
    }
}
