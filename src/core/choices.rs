//! Closed enumerations for the profile selectors.
//!
//! Stored values come from an external registration process and are not guaranteed to
//! be clean, so reading is a total function: anything unrecognized or NULL lands on a
//! safe default instead of failing.

/// Customer sex as offered in the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// `F`
    Female,
    /// `M`
    Male,
    /// `Otro`, also the fallback
    Other,
}

impl Sex {
    /// Maps a stored value to an option. Accepts both the stored codes and the display
    /// labels; anything else, NULL included, is [`Sex::Other`].
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("F" | "Femenino") => Self::Female,
            Some("M" | "Masculino") => Self::Male,
            _ => Self::Other,
        }
    }

    /// Code written to the `sexo` column.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
            Self::Other => "Otro",
        }
    }

    /// Label shown to the customer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Femenino",
            Self::Male => "Masculino",
            Self::Other => "Otro",
        }
    }
}

/// Flavor preference as offered in the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// `Dulce`, also the fallback
    Sweet,
    /// `Amargo`
    Bitter,
    /// `Equilibrado`
    Balanced,
}

impl Preference {
    /// Maps a stored value to an option; anything unrecognized or NULL is
    /// [`Preference::Sweet`].
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("Amargo") => Self::Bitter,
            Some("Equilibrado") => Self::Balanced,
            _ => Self::Sweet,
        }
    }

    /// Value written to the `preferencias` column. Same as the label.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.label()
    }

    /// Label shown to the customer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweet => "Dulce",
            Self::Bitter => "Amargo",
            Self::Balanced => "Equilibrado",
        }
    }
}
