#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{GenerateProfile, ProfileWire};

/// Notice shown after a successful save.
pub const PROFILE_SAVED_TEXT: &str = "Profile saved!";

/// The fixed set of cuisine preferences the product offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CuisinePref {
    #[default]
    Any,
    Italian,
    Mexican,
    Asian,
    Indian,
}

impl CuisinePref {
    pub const ALL: [Self; 5] = [Self::Any, Self::Italian, Self::Mexican, Self::Asian, Self::Indian];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Italian => "Italian",
            Self::Mexican => "Mexican",
            Self::Asian => "Asian",
            Self::Indian => "Indian",
        }
    }

    /// Parse a wire value, falling back to `Any` for anything unrecognized
    /// so a surprising service echo cannot wedge the editor.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == raw.trim())
            .unwrap_or(Self::Any)
    }
}

/// The user's dietary preference profile.
///
/// `allergens` stays a comma-separated string exactly as typed; the split
/// and trimmed list is derived on demand. `cooking_time` is edited and
/// persisted but not part of generation constraints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub allergens: String,
    pub calorie_limit: u32,
    pub cuisine_pref: CuisinePref,
    pub cooking_time: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            allergens: String::new(),
            calorie_limit: 500,
            cuisine_pref: CuisinePref::Any,
            cooking_time: 30,
        }
    }
}

impl Profile {
    /// The allergen field split on commas, entries trimmed, empties dropped.
    #[must_use]
    pub fn allergen_list(&self) -> Vec<String> {
        self.allergens
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// The derived constraints sent with every generation request.
    #[must_use]
    pub fn constraints(&self) -> GenerateProfile {
        GenerateProfile {
            calorie_limit: self.calorie_limit,
            allergens: self.allergen_list(),
            cuisine_pref: self.cuisine_pref.label().to_owned(),
        }
    }

    #[must_use]
    pub fn from_wire(wire: &ProfileWire) -> Self {
        Self {
            allergens: wire.allergens.clone(),
            calorie_limit: wire.calorie_limit,
            cuisine_pref: CuisinePref::from_label(&wire.cuisine_pref),
            cooking_time: wire.cooking_time,
        }
    }

    #[must_use]
    pub fn to_wire(&self) -> ProfileWire {
        ProfileWire {
            allergens: self.allergens.clone(),
            calorie_limit: self.calorie_limit,
            cuisine_pref: self.cuisine_pref.label().to_owned(),
            cooking_time: self.cooking_time,
        }
    }
}

/// Profile editor state: the in-memory profile plus save/load bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub profile: Profile,
    /// Set once a fetch has been attempted for the current session, so the
    /// profile is loaded exactly once per sign-in.
    pub loaded: bool,
    pub saving: bool,
    pub notice: Option<String>,
}

impl ProfileState {
    /// Adopt the fetched profile. A fetch failure still marks the state
    /// loaded; the defaults stay in place.
    pub fn load(&mut self, wire: Option<&ProfileWire>) {
        if let Some(wire) = wire {
            self.profile = Profile::from_wire(wire);
        }
        self.loaded = true;
    }

    /// Start a save. Returns `false` if one is already in flight.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.notice = None;
        true
    }

    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.notice = Some(PROFILE_SAVED_TEXT.to_owned());
    }

    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.notice = Some(message.into());
    }
}
