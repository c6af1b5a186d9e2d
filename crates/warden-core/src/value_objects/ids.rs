//! Typed identifiers for the three kinds of platform objects warden touches
//!
//! Communities (guilds), subjects (users), and channels all share the same
//! snowflake wire format, which makes them trivially easy to mix up in a
//! dictionary-of-dictionaries design. Wrapping each in its own newtype moves
//! that mistake from runtime to compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::snowflake::{Snowflake, SnowflakeParseError};

/// Identifier of a community (guild) - the top-level partition key for all
/// persisted state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GuildId(Snowflake);

/// Identifier of a user - both warned subjects and moderators
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(Snowflake);

/// Identifier of a text channel - the audit-log destination
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChannelId(Snowflake);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            /// Create from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(Snowflake::new(id))
            }

            /// Get the underlying snowflake
            #[inline]
            pub const fn snowflake(self) -> Snowflake {
                self.0
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0.into_inner()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Snowflake> for $name {
            fn from(id: Snowflake) -> Self {
                Self(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(Snowflake::new(id))
            }
        }

        impl std::str::FromStr for $name {
            type Err = SnowflakeParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Snowflake>().map(Self)
            }
        }
    };
}

id_impls!(GuildId);
id_impls!(UserId);
id_impls!(ChannelId);
