//! Macros for declaring state enums.

/// Generate a serde-derived enum together with its `State` implementation.
///
/// Variants listed under the optional `final:` clause report
/// `is_final() == true`; every other variant is non-terminal.
///
/// # Example
///
/// ```
/// use dispenser::state_enum;
/// use dispenser::core::State;
///
/// state_enum! {
///     pub enum LockState {
///         Locked,
///         Unlocked,
///         Jammed,
///     }
///     final: [Jammed]
/// }
///
/// assert_eq!(LockState::Unlocked.name(), "Unlocked");
/// assert!(LockState::Jammed.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
