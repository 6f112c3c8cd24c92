//! Macros for ergonomic symbol construction.

/// Generate a Symbol implementation for a simple enum.
///
/// The `none:` variant becomes the distinguished `NONE` symbol and is
/// added to the enum automatically.
///
/// # Example
///
/// ```
/// use mimicry::core::Symbol;
/// use mimicry::symbol_enum;
///
/// symbol_enum! {
///     pub enum Direction {
///         Up,
///         Down,
///         Left,
///         Right,
///     }
///     none: Idle
/// }
///
/// assert!(Direction::Idle.is_none());
/// assert_eq!(Direction::Left.name(), "Left");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        none: $none:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $none,
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant except the `NONE` one, in declaration order.
            #[allow(dead_code)]
            $vis const ACTIONS: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::Symbol for $name {
            fn name(&self) -> &str {
                match self {
                    Self::$none => stringify!($none),
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn none() -> Self {
                Self::$none
            }
        }
    };
}
