use crate::core::backends::errors::BackendError;
use crate::core::data::precision::Precision;
use std::fmt;
use std::str::FromStr;

/// How many points one call of the escape loop advances together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// One point per call.
    Scalar,
    /// 128-bit lanes: 4 × f32 or 2 × f64.
    Narrow,
    /// 256-bit lanes: 8 × f32 or 4 × f64.
    #[default]
    Wide,
}

impl Backend {
    pub const ALL: &'static [Self] = &[Self::Wide, Self::Narrow, Self::Scalar];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }

    #[must_use]
    pub const fn lanes(self, precision: Precision) -> usize {
        match (self, precision) {
            (Self::Scalar, _) => 1,
            (Self::Narrow, Precision::Single) => 4,
            (Self::Narrow, Precision::Double) => 2,
            (Self::Wide, Precision::Single) => 8,
            (Self::Wide, Precision::Double) => 4,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for Backend {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(Self::Scalar),
            "narrow" | "sse" => Ok(Self::Narrow),
            "wide" | "avx" => Ok(Self::Wide),
            _ => Err(BackendError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}
