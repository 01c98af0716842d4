// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the model types.
//!
//! - [`word_enum!`]: `Display` and `FromStr` for enums written as fixed words in exports
//! - [`builder!`]: test builder with defaults, chained setters and `build()`

/// Map a unit-variant enum to and from its export words.
///
/// One table drives both directions, so a kind written to a timeline CSV can
/// always be read back. `FromStr` fails with `$err(String)` for foreign words.
///
/// ```ignore
/// crate::word_enum! {
///     EventKind / UnknownEventKind {
///         Queued => "queued",
///         Shutdown => "shutdown",
///     }
/// }
/// ```
#[macro_export]
macro_rules! word_enum {
    ($enum:ident / $err:ident { $( $variant:ident => $word:literal ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( $enum::$variant => $word, )+
                })
            }
        }

        impl std::str::FromStr for $enum {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $word => Ok($enum::$variant), )+
                    other => Err($err(other.to_string())),
                }
            }
        }
    };
}

/// Generate a test builder for a plain-field struct.
///
/// Everything generated is gated behind `#[cfg(any(test, feature = "test-support"))]`.
///
/// - `fields { name: Type = default }`: setter takes `Type`
/// - `optional { name: Type }`: target field is `Option<Type>`, starts as
///   `None`, and the setter wraps `impl Into<Type>` in `Some`
///
/// Every field of the target must appear in exactly one group.
#[macro_export]
macro_rules! builder {
    (
        $builder:ident => $target:ident {
            fields { $( $field:ident : $ty:ty = $default:expr ),* $(,)? }
            optional { $( $opt:ident : $opt_ty:ty ),* $(,)? }
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            $( $field: $ty, )*
            $( $opt: Option<$opt_ty>, )*
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $(
                pub fn $field(mut self, v: $ty) -> Self {
                    self.$field = v;
                    self
                }
            )*

            $(
                pub fn $opt(mut self, v: impl Into<$opt_ty>) -> Self {
                    self.$opt = Some(v.into());
                    self
                }
            )*

            pub fn build(self) -> $target {
                $target {
                    $( $field: self.$field, )*
                    $( $opt: self.$opt, )*
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            /// Builder starting from test defaults, every optional field unset.
            pub fn builder() -> $builder {
                $builder {
                    $( $field: $default, )*
                    $( $opt: None, )*
                }
            }
        }
    };
}
