//! Values passed between a scripting engine and the command table.

use std::fmt;

use hexmap_core::{BuildingKind, MapPoint, PlayerId, RawPoint};
use hexmap_world::World;

use crate::error::ScriptError;

/// A dynamically typed script value.
///
/// ```
/// use hexmap_script::ScriptValue;
///
/// assert_eq!(ScriptValue::from(3), ScriptValue::Int(3));
/// assert_eq!(ScriptValue::from("hi").to_string(), "hi");
/// assert!(ScriptValue::Nil.is_nil());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScriptValue {
    /// No value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
}

impl ScriptValue {
    /// True for [`ScriptValue::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ScriptValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ScriptValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for ScriptValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<&str> for ScriptValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for ScriptValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// The arguments of one command call, with typed accessors that report
/// errors against the command name and argument position.
#[derive(Clone, Copy, Debug)]
pub struct ScriptArgs<'a> {
    command: &'a str,
    values: &'a [ScriptValue],
}

impl<'a> ScriptArgs<'a> {
    /// Wrap the raw values passed to `command`.
    pub fn new(command: &'a str, values: &'a [ScriptValue]) -> Self {
        Self { command, values }
    }

    /// Name of the command being called.
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail unless the argument count lies in `min..=max`.
    pub fn expect_len(&self, min: usize, max: usize) -> Result<(), ScriptError> {
        if (min..=max).contains(&self.values.len()) {
            Ok(())
        } else {
            Err(ScriptError::Arity {
                command: self.command.to_owned(),
                min,
                max,
                got: self.values.len(),
            })
        }
    }

    fn bad(&self, index: usize, expected: &'static str) -> ScriptError {
        ScriptError::BadArgument {
            command: self.command.to_owned(),
            index,
            expected,
        }
    }

    /// Argument `index` as an integer.
    pub fn int(&self, index: usize) -> Result<i64, ScriptError> {
        match self.values.get(index) {
            Some(ScriptValue::Int(v)) => Ok(*v),
            _ => Err(self.bad(index, "an integer")),
        }
    }

    /// Argument `index` as an integer, or `default` if it is missing.
    pub fn int_or(&self, index: usize, default: i64) -> Result<i64, ScriptError> {
        match self.values.get(index) {
            None | Some(ScriptValue::Nil) => Ok(default),
            Some(_) => self.int(index),
        }
    }

    /// Argument `index` as an unsigned integer no larger than `max`.
    pub fn uint(&self, index: usize, max: u32) -> Result<u32, ScriptError> {
        let v = self.int(index)?;
        u32::try_from(v)
            .ok()
            .filter(|&v| v <= max)
            .ok_or_else(|| self.bad(index, "a non-negative integer in range"))
    }

    /// Argument `index` as a string.
    pub fn str(&self, index: usize) -> Result<&'a str, ScriptError> {
        match self.values.get(index) {
            Some(ScriptValue::Str(s)) => Ok(s),
            _ => Err(self.bad(index, "a string")),
        }
    }

    /// Argument `index` as a player of `world`.
    pub fn player(&self, index: usize, world: &World) -> Result<PlayerId, ScriptError> {
        let v = self.int(index)?;
        match u8::try_from(v) {
            Ok(p) if p < world.player_count() => Ok(PlayerId(p)),
            _ => Err(ScriptError::InvalidPlayer { player: v }),
        }
    }

    /// Arguments `index` and `index + 1` as a point, folded onto the map.
    pub fn point(&self, index: usize, world: &World) -> Result<MapPoint, ScriptError> {
        let x = self.int(index)?;
        let y = self.int(index + 1)?;
        let x = i32::try_from(x).map_err(|_| self.bad(index, "a coordinate"))?;
        let y = i32::try_from(y).map_err(|_| self.bad(index + 1, "a coordinate"))?;
        Ok(world.make_point(RawPoint::new(x, y)))
    }

    /// Argument `index` as a building kind, by index or by name.
    pub fn building(&self, index: usize) -> Result<BuildingKind, ScriptError> {
        let kind = match self.values.get(index) {
            Some(ScriptValue::Int(v)) => usize::try_from(*v).ok().and_then(BuildingKind::from_index),
            Some(ScriptValue::Str(s)) => BuildingKind::from_name(s),
            _ => None,
        };
        kind.ok_or_else(|| self.bad(index, "a building type"))
    }
}
