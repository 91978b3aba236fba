use crate::core::colour_mapping::errors::GradientError;
use std::fmt;

/// The seven colour schemes, numbered 1 to 7 as they are offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gradient {
    #[default]
    Ember,
    Ice,
    SineBands,
    Ramps,
    Tiers,
    Mixed,
    Inverted,
}

impl Gradient {
    pub const ALL: &'static [Self] = &[
        Self::Ember,
        Self::Ice,
        Self::SineBands,
        Self::Ramps,
        Self::Tiers,
        Self::Mixed,
        Self::Inverted,
    ];

    pub fn from_id(id: u8) -> Result<Self, GradientError> {
        id.checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(GradientError::UnknownId { id })
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Ember => 1,
            Self::Ice => 2,
            Self::SineBands => 3,
            Self::Ramps => 4,
            Self::Tiers => 5,
            Self::Mixed => 6,
            Self::Inverted => 7,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ember => "Ember",
            Self::Ice => "Ice",
            Self::SineBands => "Sine bands",
            Self::Ramps => "Root/log/square ramps",
            Self::Tiers => "Tiers",
            Self::Mixed => "Mixed sums",
            Self::Inverted => "Inverted",
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", (*self).display_name(), self.id())
    }
}
