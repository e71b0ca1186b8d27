use crate::{
    Result,
    constants::{
        DIRECT_COMMAND, NO_REPLY_FLAG, PORT_A, PORT_ALL, PORT_B, PORT_C, PORT_FOUR, PORT_ONE,
        PORT_THREE, PORT_TWO, REPLY_COMMAND, SYSTEM_COMMAND,
    },
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Telegram command category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CommandType {
    Direct = DIRECT_COMMAND,
    System = SYSTEM_COMMAND,
    Reply = REPLY_COMMAND,
}

impl CommandType {
    /// Every command category, in table order.
    pub const ALL: [CommandType; 3] = [Self::Direct, Self::System, Self::Reply];

    /// Look up a category by its symbolic name.
    ///
    /// # Errors
    /// Returns `Error::UnknownCommandType` for any name outside the table.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "direct" => Ok(Self::Direct),
            "system" => Ok(Self::System),
            "reply" => Ok(Self::Reply),
            _ => Err(Error::UnknownCommandType {
                name: name.to_string(),
            }),
        }
    }

    /// Symbolic name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::System => "system",
            Self::Reply => "reply",
        }
    }

    /// Command-type byte as it appears on the wire.
    #[inline]
    #[must_use]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Command-type byte with the no-reply bit applied when no reply is wanted.
    ///
    /// Reply telegrams are never flagged.
    ///
    /// # Examples
    ///
    /// ```
    /// use nxt_core::CommandType;
    ///
    /// assert_eq!(CommandType::Direct.as_byte_with_reply(true), 0x00);
    /// assert_eq!(CommandType::Direct.as_byte_with_reply(false), 0x80);
    /// assert_eq!(CommandType::Reply.as_byte_with_reply(false), 0x02);
    /// ```
    #[must_use]
    pub fn as_byte_with_reply(self, reply_required: bool) -> u8 {
        match self {
            Self::Reply => self.as_byte(),
            _ if reply_required => self.as_byte(),
            _ => self.as_byte() | NO_REPLY_FLAG,
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CommandType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CommandType::from_name(s)
    }
}

/// Physical connector on the brick, or the `all` broadcast address.
///
/// Actuator and sensor names are distinct variants even where they share a
/// wire byte, because each is its own attachment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Port {
    A,
    B,
    C,
    One,
    Two,
    Three,
    Four,
    All,
}

impl Port {
    /// Every port name in the byte table, aliases and `all` included.
    pub const ALL: [Port; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::All,
    ];

    /// The seven ports a handler can occupy, in slot order.
    pub const ATTACHABLE: [Port; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
    ];

    /// Look up a port by its symbolic name.
    ///
    /// # Errors
    /// Returns `Error::UnknownPort` for any name outside the table.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "three" => Ok(Self::Three),
            "four" => Ok(Self::Four),
            "all" => Ok(Self::All),
            _ => Err(Error::UnknownPort {
                name: name.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::All => "all",
        }
    }

    /// Port byte as it appears on the wire.
    #[inline]
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::A => PORT_A,
            Self::B => PORT_B,
            Self::C => PORT_C,
            Self::One => PORT_ONE,
            Self::Two => PORT_TWO,
            Self::Three => PORT_THREE,
            Self::Four => PORT_FOUR,
            Self::All => PORT_ALL,
        }
    }

    /// Returns `true` for the seven ports a handler can be attached to.
    #[inline]
    #[must_use]
    pub fn is_attachable(self) -> bool {
        !matches!(self, Self::All)
    }

    /// Returns `true` for the actuator ports `a`, `b` and `c`.
    #[inline]
    #[must_use]
    pub fn is_actuator(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C)
    }

    /// Returns `true` for the sensor ports `one` through `four`.
    #[inline]
    #[must_use]
    pub fn is_sensor(self) -> bool {
        matches!(self, Self::One | Self::Two | Self::Three | Self::Four)
    }

    /// Position of the port in [`Port::ATTACHABLE`], `None` for `all`.
    #[must_use]
    pub fn slot_index(self) -> Option<usize> {
        Self::ATTACHABLE.iter().position(|port| *port == self)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Port {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Port::from_name(s)
    }
}

/// Caller-chosen name a handler is registered under.
///
/// Always a symbolic name: an ASCII letter or underscore followed by ASCII
/// letters, digits or underscores. Names with spaces, punctuation or
/// non-ASCII letters (`"hello world"`, `"motör"`) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier, validating that it is a symbolic name.
    ///
    /// # Errors
    /// Returns `Error::InvalidIdentifierFormat` if the name is empty, starts
    /// with a digit or contains anything but ASCII alphanumerics and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };

        if !valid {
            return Err(Error::InvalidIdentifierFormat { identifier: name });
        }
        Ok(Identifier(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Identifier::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Identifier::new(value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Values convertible to a canonical [`Identifier`].
///
/// This is the boundary check for every registry operation taking a name.
pub trait IntoIdentifier {
    fn into_identifier(self) -> Result<Identifier>;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        Ok(self)
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        Ok(self.clone())
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self)
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self.as_str())
    }
}

/// Values convertible to a [`Port`].
pub trait IntoPort {
    fn into_port(self) -> Result<Port>;
}

impl IntoPort for Port {
    fn into_port(self) -> Result<Port> {
        Ok(self)
    }
}

impl IntoPort for &str {
    fn into_port(self) -> Result<Port> {
        Port::from_name(self)
    }
}

impl IntoPort for String {
    fn into_port(self) -> Result<Port> {
        Port::from_name(&self)
    }
}

/// Values convertible to a [`CommandType`].
pub trait IntoCommandType {
    fn into_command_type(self) -> Result<CommandType>;
}

impl IntoCommandType for CommandType {
    fn into_command_type(self) -> Result<CommandType> {
        Ok(self)
    }
}

impl IntoCommandType for &str {
    fn into_command_type(self) -> Result<CommandType> {
        CommandType::from_name(self)
    }
}

impl IntoCommandType for String {
    fn into_command_type(self) -> Result<CommandType> {
        CommandType::from_name(&self)
    }
}
