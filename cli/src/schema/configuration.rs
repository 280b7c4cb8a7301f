//! # cmdconf Command Configuration
//!
//! File: cli/src/schema/configuration.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `CommandConfiguration` is the metadata a tool author attaches to a command:
//! its name, help text, version, subcommand tree, and help layout parameters.
//! It is built once per command and read, never written, by the parsing and
//! help engine.
//!
//! ## Architecture
//!
//! There are three ways to build one:
//!
//! - [`CommandConfiguration::new`]: the canonical constructor. Takes a
//!   [`ConfigurationArgs`], whose `Default` carries every documented default.
//! - [`CommandConfiguration::with_super_command`]: the same, plus a required
//!   super-command name.
//! - [`CommandConfiguration::legacy`] (deprecated): the parameter set from
//!   before usage overrides existed. It always stores [`Usage::Suppressed`],
//!   because commands written against it never printed a usage line. The
//!   canonical constructor stores [`Usage::Auto`] when `usage` is omitted.
//!
//! No constructor validates anything. In particular, `default_subcommand` is
//! supposed to be one of `subcommands`; that is a contract on the caller, and
//! [`crate::schema::validate`] is where a consumer checks it.
//!
//! ## Examples
//!
//! ```rust
//! use cmdconf::schema::{CommandConfiguration, ConfigurationArgs, Example, Usage};
//!
//! let config = CommandConfiguration::new(ConfigurationArgs {
//!     command_name: Some("math".into()),
//!     r#abstract: "A utility for performing maths.".into(),
//!     version: "1.0.0".into(),
//!     help_message_indent: Some(4),
//!     examples: vec![Example::new("math add 1 2")],
//!     ..Default::default()
//! });
//!
//! assert_eq!(config.usage(), &Usage::Auto);
//! assert_eq!(config.help_message_indent(), 4);
//! assert_eq!(config.help_message_label_column_width(), 26);
//! assert!(config.version_flag_enabled());
//! ```
//!
use crate::schema::{command::CommandRef, example::Example, names::NameSpecification, usage::Usage};

/// Help text indentation used when the caller does not supply one.
pub const DEFAULT_HELP_MESSAGE_INDENT: usize = 2;
/// Label column width used when the caller does not supply one.
pub const DEFAULT_HELP_MESSAGE_LABEL_COLUMN_WIDTH: usize = 26;

/// Metadata describing one command and its direct subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfiguration {
    command_name: Option<String>,
    super_command_name: Option<String>,
    r#abstract: String,
    usage: Usage,
    discussion: String,
    version: String,
    should_display: bool,
    subcommands: Vec<CommandRef>,
    default_subcommand: Option<CommandRef>,
    help_names: Option<NameSpecification>,
    aliases: Vec<String>,
    help_message_indent: usize,
    help_message_label_column_width: usize,
    always_compact_usage_options: bool,
    examples: Vec<Example>,
}

/// Parameters of the canonical constructor.
///
/// `Default` yields the documented defaults. The two layout parameters are
/// optional here and concrete on the built configuration; leaving one as `None`
/// and passing the default value explicitly produce the same configuration.
#[derive(Debug, Clone)]
pub struct ConfigurationArgs {
    /// Literal command-line name. `None` derives it from the type identifier.
    pub command_name: Option<String>,
    /// One-line summary for help output.
    pub r#abstract: String,
    /// `None` generates the usage line, `Some("")` suppresses it, anything else
    /// replaces it verbatim.
    pub usage: Option<String>,
    /// Extended description.
    pub discussion: String,
    /// Non-empty enables the engine's version flag.
    pub version: String,
    /// Whether the command is listed under its parent.
    pub should_display: bool,
    /// Direct subcommands in display order.
    pub subcommands: Vec<CommandRef>,
    /// Dispatched to when no subcommand is named. Must be one of `subcommands`.
    pub default_subcommand: Option<CommandRef>,
    /// `None` inherits from the parent, or `-h, --help` at the root.
    pub help_names: Option<NameSpecification>,
    /// Alternate names the command also answers to.
    pub aliases: Vec<String>,
    pub help_message_indent: Option<usize>,
    pub help_message_label_column_width: Option<usize>,
    /// Forces the compact options group in the usage line.
    pub always_compact_usage_options: bool,
    /// Rendered verbatim, in order.
    pub examples: Vec<Example>,
}

impl Default for ConfigurationArgs {
    fn default() -> Self {
        Self {
            command_name: None,
            r#abstract: String::new(),
            usage: None,
            discussion: String::new(),
            version: String::new(),
            should_display: true,
            subcommands: Vec::new(),
            default_subcommand: None,
            help_names: None,
            aliases: Vec::new(),
            help_message_indent: None,
            help_message_label_column_width: None,
            always_compact_usage_options: false,
            examples: Vec::new(),
        }
    }
}

/// Parameters of the deprecated constructor: [`ConfigurationArgs`] without
/// `usage`.
#[derive(Debug, Clone)]
pub struct LegacyConfigurationArgs {
    pub command_name: Option<String>,
    pub r#abstract: String,
    pub discussion: String,
    pub version: String,
    pub should_display: bool,
    pub subcommands: Vec<CommandRef>,
    pub default_subcommand: Option<CommandRef>,
    pub help_names: Option<NameSpecification>,
    pub aliases: Vec<String>,
    pub help_message_indent: Option<usize>,
    pub help_message_label_column_width: Option<usize>,
    pub always_compact_usage_options: bool,
    pub examples: Vec<Example>,
}

impl Default for LegacyConfigurationArgs {
    fn default() -> Self {
        let ConfigurationArgs {
            command_name,
            r#abstract,
            usage: _,
            discussion,
            version,
            should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases,
            help_message_indent,
            help_message_label_column_width,
            always_compact_usage_options,
            examples,
        } = ConfigurationArgs::default();
        Self {
            command_name,
            r#abstract,
            discussion,
            version,
            should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases,
            help_message_indent,
            help_message_label_column_width,
            always_compact_usage_options,
            examples,
        }
    }
}

impl CommandConfiguration {
    /// Canonical constructor.
    pub fn new(args: ConfigurationArgs) -> Self {
        Self::build(None, args)
    }

    /// Canonical constructor for a command belonging to the dash-prefixed
    /// command family `super_command_name`.
    pub fn with_super_command(super_command_name: impl Into<String>, args: ConfigurationArgs) -> Self {
        Self::build(Some(super_command_name.into()), args)
    }

    /// Constructor predating usage overrides.
    ///
    /// Always stores [`Usage::Suppressed`]: commands built this way keep
    /// printing no usage line. Migrating to [`CommandConfiguration::new`]
    /// without setting `usage` switches them to a generated usage line.
    #[deprecated(
        since = "0.1.0",
        note = "use `CommandConfiguration::new`; pass `usage: Some(String::new())` to keep the usage line suppressed"
    )]
    pub fn legacy(args: LegacyConfigurationArgs) -> Self {
        let LegacyConfigurationArgs {
            command_name,
            r#abstract,
            discussion,
            version,
            should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases,
            help_message_indent,
            help_message_label_column_width,
            always_compact_usage_options,
            examples,
        } = args;
        Self::new(ConfigurationArgs {
            command_name,
            r#abstract,
            usage: Some(String::new()),
            discussion,
            version,
            should_display,
            subcommands,
            default_subcommand,
            help_names,
            aliases,
            help_message_indent,
            help_message_label_column_width,
            always_compact_usage_options,
            examples,
        })
    }

    fn build(super_command_name: Option<String>, args: ConfigurationArgs) -> Self {
        let mut config = Self {
            command_name: args.command_name,
            super_command_name,
            r#abstract: args.r#abstract,
            usage: Usage::from(args.usage),
            discussion: args.discussion,
            version: args.version,
            should_display: args.should_display,
            subcommands: args.subcommands,
            default_subcommand: args.default_subcommand,
            help_names: args.help_names,
            aliases: args.aliases,
            help_message_indent: DEFAULT_HELP_MESSAGE_INDENT,
            help_message_label_column_width: DEFAULT_HELP_MESSAGE_LABEL_COLUMN_WIDTH,
            always_compact_usage_options: args.always_compact_usage_options,
            examples: args.examples,
        };
        if let Some(indent) = args.help_message_indent {
            config.help_message_indent = indent;
        }
        if let Some(width) = args.help_message_label_column_width {
            config.help_message_label_column_width = width;
        }
        config
    }

    pub fn command_name(&self) -> Option<&str> {
        self.command_name.as_deref()
    }

    /// Experimental. Informational only.
    pub fn super_command_name(&self) -> Option<&str> {
        self.super_command_name.as_deref()
    }

    pub fn r#abstract(&self) -> &str {
        &self.r#abstract
    }

    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    pub fn discussion(&self) -> &str {
        &self.discussion
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn should_display(&self) -> bool {
        self.should_display
    }

    pub fn subcommands(&self) -> &[CommandRef] {
        &self.subcommands
    }

    pub fn default_subcommand(&self) -> Option<&CommandRef> {
        self.default_subcommand.as_ref()
    }

    /// Explicit help names. `None` means inherited; see
    /// [`crate::schema::resolve::resolve_help_names`].
    pub fn help_names(&self) -> Option<&NameSpecification> {
        self.help_names.as_ref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn help_message_indent(&self) -> usize {
        self.help_message_indent
    }

    pub fn help_message_label_column_width(&self) -> usize {
        self.help_message_label_column_width
    }

    pub fn always_compact_usage_options(&self) -> bool {
        self.always_compact_usage_options
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Whether the engine offers a version flag for this command.
    pub fn version_flag_enabled(&self) -> bool {
        !self.version.is_empty()
    }

    /// Subcommands eligible for extended listings, in stored order.
    pub fn displayed_subcommands(&self) -> impl Iterator<Item = &CommandRef> {
        self.subcommands
            .iter()
            .filter(|sub| sub.configuration().should_display())
    }

    /// Position of the default subcommand within `subcommands`.
    ///
    /// `None` when there is no default, or when the default is not one of the
    /// subcommands; dispatch then behaves as if no default were set.
    pub fn default_subcommand_index(&self) -> Option<usize> {
        let default = self.default_subcommand.as_ref()?;
        self.subcommands.iter().position(|sub| sub == default)
    }
}

impl Default for CommandConfiguration {
    fn default() -> Self {
        Self::new(ConfigurationArgs::default())
    }
}
