//! Value objects - immutable types that represent domain concepts

mod duration;
mod ids;
mod snowflake;

pub use duration::{DurationParseError, TimeoutDuration};
pub use ids::{ChannelId, GuildId, UserId};
pub use snowflake::{Snowflake, SnowflakeParseError};
