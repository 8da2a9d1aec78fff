//! Avatar sizes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Named avatar size with a fixed square dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
}

impl AvatarSize {
    /// All sizes, smallest first.
    pub const ALL: [AvatarSize; 6] = [
        AvatarSize::Sm,
        AvatarSize::Md,
        AvatarSize::Lg,
        AvatarSize::Xl,
        AvatarSize::Xl2,
        AvatarSize::Xl3,
    ];

    /// Edge length in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            AvatarSize::Sm => 32,
            AvatarSize::Md => 40,
            AvatarSize::Lg => 48,
            AvatarSize::Xl => 64,
            AvatarSize::Xl2 => 80,
            AvatarSize::Xl3 => 176,
        }
    }

    /// The size's name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
            AvatarSize::Xl => "xl",
            AvatarSize::Xl2 => "2xl",
            AvatarSize::Xl3 => "3xl",
        }
    }

    /// Parse a size name, falling back to the default for unknown names.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown avatar size {:?}, using default", name);
            AvatarSize::default()
        })
    }
}

impl FromStr for AvatarSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvatarSize::ALL
            .into_iter()
            .find(|size| size.name() == s)
            .ok_or_else(|| Error::invalid(format!("unknown avatar size: {}", s)))
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
