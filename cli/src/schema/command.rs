//! # cmdconf Command References
//!
//! File: cli/src/schema/command.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Subcommand lists and default subcommands do not own commands; they point at
//! them. The set of commands is open (every tool defines its own), so a command
//! reference is an opaque handle over anything implementing
//! [`CommandDescriptor`], not a closed enum.
//!
//! ## Architecture
//!
//! - [`ParsableCommand`]: implemented by a tool's command types. Supplies the
//!   static configuration and the execution entry point.
//! - [`CommandDescriptor`]: the object-safe capability a reference needs:
//!   identity, identifier, and configuration. Every `ParsableCommand` gets one
//!   through [`CommandRef::of`]; manifest-defined commands implement it
//!   directly.
//! - [`CommandRef`]: a cheap, cloneable handle. Handles to Rust types are equal
//!   when they name the same `TypeId`; other handles compare by identity.
//!
//! ```rust
//! use cmdconf::schema::{CommandConfiguration, CommandRef, ConfigurationArgs, ParsableCommand};
//!
//! struct Add;
//! impl ParsableCommand for Add {}
//!
//! struct Math;
//! impl ParsableCommand for Math {
//!     fn configuration() -> CommandConfiguration {
//!         CommandConfiguration::new(ConfigurationArgs {
//!             subcommands: vec![CommandRef::of::<Add>()],
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! let math = CommandRef::of::<Math>();
//! assert_eq!(math.command_name(), "math");
//! assert_eq!(math.configuration().subcommands()[0], CommandRef::of::<Add>());
//! ```
//!
use crate::core::error::Result;
use crate::schema::configuration::CommandConfiguration;
use crate::schema::naming::hyphenated;
use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::Arc,
};

/// A command type: static metadata plus an execution entry point.
pub trait ParsableCommand: 'static {
    /// The command's metadata. Defaults to an all-default configuration.
    fn configuration() -> CommandConfiguration {
        CommandConfiguration::default()
    }

    /// Runs the command after the engine has parsed it.
    fn run(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The capability a [`CommandRef`] wraps.
pub trait CommandDescriptor: fmt::Debug + Send + Sync {
    /// A key unique among all commands of a tool (a type path, a manifest path).
    fn identity(&self) -> &str;

    /// The bare type-like name used for name derivation.
    fn identifier(&self) -> &str {
        bare_identifier(self.identity())
    }

    fn configuration(&self) -> CommandConfiguration;

    /// The Rust type behind this command, when there is one. Equality uses it
    /// in place of `identity`, which is only a readable name for such types.
    fn type_id(&self) -> Option<TypeId> {
        None
    }
}

/// Descriptor for a Rust type implementing [`ParsableCommand`].
struct TypeDescriptor<C> {
    _command: PhantomData<fn() -> C>,
}

impl<C: ParsableCommand> fmt::Debug for TypeDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor")
            .field(&std::any::type_name::<C>())
            .finish()
    }
}

impl<C: ParsableCommand> CommandDescriptor for TypeDescriptor<C> {
    fn identity(&self) -> &str {
        std::any::type_name::<C>()
    }

    fn configuration(&self) -> CommandConfiguration {
        C::configuration()
    }

    fn type_id(&self) -> Option<TypeId> {
        Some(TypeId::of::<C>())
    }
}

/// Opaque, cloneable reference to a command.
#[derive(Clone)]
pub struct CommandRef(Arc<dyn CommandDescriptor>);

impl CommandRef {
    /// Reference to the command type `C`.
    pub fn of<C: ParsableCommand>() -> Self {
        Self(Arc::new(TypeDescriptor::<C> {
            _command: PhantomData,
        }))
    }

    /// Reference to an arbitrary descriptor.
    pub fn new(descriptor: impl CommandDescriptor + 'static) -> Self {
        Self(Arc::new(descriptor))
    }

    pub fn identity(&self) -> &str {
        self.0.identity()
    }

    pub fn identifier(&self) -> &str {
        self.0.identifier()
    }

    /// Fetches the referenced command's configuration.
    pub fn configuration(&self) -> CommandConfiguration {
        self.0.configuration()
    }

    /// The configured command name, or the hyphenated identifier when unset.
    pub fn command_name(&self) -> String {
        self.configuration()
            .command_name()
            .map(str::to_string)
            .unwrap_or_else(|| hyphenated(self.identifier()))
    }
}

impl fmt::Debug for CommandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandRef").field(&self.identity()).finish()
    }
}

impl PartialEq for CommandRef {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.type_id(), other.0.type_id()) {
            (Some(this), Some(that)) => this == that,
            (None, None) => self.identity() == other.identity(),
            _ => false,
        }
    }
}

impl Eq for CommandRef {}

impl Hash for CommandRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0.type_id() {
            Some(type_id) => type_id.hash(state),
            None => self.identity().hash(state),
        }
    }
}

/// Last path segment of a type path, without generic arguments.
fn bare_identifier(identity: &str) -> &str {
    let base = identity.split('<').next().unwrap_or(identity);
    base.rsplit("::").next().unwrap_or(base)
}
