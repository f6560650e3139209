//! Named commands a scripting engine can call.

use indexmap::IndexMap;
use tracing::{trace, warn};

use hexmap_world::World;

use crate::builtins;
use crate::error::ScriptError;
use crate::host::ScriptHost;
use crate::value::{ScriptArgs, ScriptValue};

/// What a command gets to work with during one call.
pub struct ScriptContext<'a> {
    /// The world the script runs in.
    pub world: &'a mut World,
    /// The economy and messaging side of the session.
    pub host: &'a mut dyn ScriptHost,
}

/// Signature of a registered command.
pub type CommandFn = fn(&mut ScriptContext<'_>, &ScriptArgs<'_>) -> Result<ScriptValue, ScriptError>;

/// Commands by name, in registration order.
///
/// ```
/// use hexmap_script::{CommandTable, ScriptValue};
///
/// let mut table = CommandTable::new();
/// table.register("Answer", |_, _| Ok(ScriptValue::Int(42)));
/// assert!(table.contains("Answer"));
/// assert_eq!(CommandTable::with_builtins().names().count(), 20);
/// ```
#[derive(Clone, Default)]
pub struct CommandTable {
    commands: IndexMap<&'static str, CommandFn>,
}

impl CommandTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in commands.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        builtins::register_all(&mut table);
        table
    }

    /// Register `f` under `name`, returning the command it replaces.
    pub fn register(&mut self, name: &'static str, f: CommandFn) -> Option<CommandFn> {
        self.commands.insert(name, f)
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Run the command `name` with `args`.
    pub fn call(
        &self,
        name: &str,
        ctx: &mut ScriptContext<'_>,
        args: &[ScriptValue],
    ) -> Result<ScriptValue, ScriptError> {
        let Some(f) = self.commands.get(name) else {
            warn!(command = name, "unknown script command");
            return Err(ScriptError::UnknownCommand { name: name.to_owned() });
        };
        trace!(command = name, args = args.len(), "script command");
        f(ctx, &ScriptArgs::new(name, args))
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTable")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}
