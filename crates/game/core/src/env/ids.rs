//! String-keyed identifiers for catalog entries.
//!
//! Content files refer to skills, items, and enemies by short snake_case keys
//! (`power_strike`, `health_potion`, `orc_warrior`).

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

catalog_id!(
    /// Key of a [`super::SkillDefinition`].
    SkillId
);

catalog_id!(
    /// Key of an [`super::ItemDefinition`].
    ItemId
);

catalog_id!(
    /// Key of an [`super::EnemyTemplate`].
    EnemyId
);
