use serde::{Deserialize, Serialize};
use std::fmt;

/// Declare a closed set of legal values.
///
/// Each variant is paired with its exact wire name. The generated enum
/// gets `ALL`, `as_str`, `from_name` (exact, case-sensitive), `Display`,
/// `FromStr` and serde support keyed on the wire name, so adding a legal
/// value is a single line here.
///
/// ```
/// grinder_common::closed_set! {
///     #[derive(Default)]
///     pub enum Mood {
///         #[default]
///         Calm => "calm",
///         Loud => "loud",
///     }
/// }
///
/// assert_eq!(Mood::from_name("loud"), Some(Mood::Loud));
/// assert_eq!(Mood::from_name("Loud"), None);
/// assert_eq!(Mood::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every legal value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire names of every legal value, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Exact-match lookup by wire name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::types::ClosedSet for $name {
            fn from_name(name: &str) -> Option<Self> {
                $name::from_name(name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::types::UnknownName;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::types::UnknownName(s.to_owned()))
            }
        }

        impl $crate::types::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::types::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::types::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::types::__private::serde::Deserializer<'de>,
            {
                let name: ::std::string::String =
                    $crate::types::__private::serde::Deserialize::deserialize(deserializer)?;
                Self::from_name(&name).ok_or_else(|| {
                    <D::Error as $crate::types::__private::serde::de::Error>::unknown_variant(
                        &name,
                        Self::NAMES,
                    )
                })
            }
        }
    };
}

/// Implemented by every enum declared with [`closed_set!`].
pub trait ClosedSet: Sized {
    /// Exact-match lookup by wire name.
    fn from_name(name: &str) -> Option<Self>;

    fn contains(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

/// Returned by `FromStr` on a closed set when the name is not a member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: {0}")]
pub struct UnknownName(pub String);

/// A value drawn from a closed set, or the raw text that failed to match.
///
/// Deserializes as `Known` for an exact member name and `Raw` otherwise,
/// so a bad value reaches the validator instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice<T> {
    Known(T),
    Raw(String),
}

impl<T> Choice<T> {
    /// The member value, if the input matched one.
    pub fn known(&self) -> Option<&T> {
        match self {
            Choice::Known(value) => Some(value),
            Choice::Raw(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Choice::Known(_))
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Known(value)
    }
}

impl<T: Default> Default for Choice<T> {
    fn default() -> Self {
        Choice::Known(T::default())
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Known(value) => value.fmt(f),
            Choice::Raw(raw) => f.write_str(raw),
        }
    }
}
