/// Define a mirror store from named slices.
///
/// Each slice becomes a plain struct whose `Default` impl (written by hand)
/// holds that slice's defaults. The store merges every slice into one struct
/// of typed [`Slot`](crate::Slot)s, and the key enum closes the set of names.
///
/// Each entry reads `Variant("wireName") => field: Type = compare`, where
/// `compare` is `shallow` (`PartialEq`) or `identity` (reference identity).
///
/// ```
/// use mirror_core::{Action, MirrorRegistry, mirror_store};
///
/// mirror_store! {
///     pub struct CounterStore keyed by CounterKey;
///
///     slice state: CounterState {
///         Count("count") => count: u32 = shallow,
///     }
///     slice utils: CounterUtils {
///         Reset("reset") => reset: Action = identity,
///     }
/// }
///
/// impl Default for CounterState {
///     fn default() -> Self {
///         Self { count: 0 }
///     }
/// }
///
/// impl Default for CounterUtils {
///     fn default() -> Self {
///         Self { reset: Action::noop() }
///     }
/// }
///
/// let registry = MirrorRegistry::new(CounterStore::default());
/// registry.register(|s| &s.count, 3);
/// assert_eq!(registry.mirror().subscribe(|s| &s.count), 3);
/// assert!("missing".parse::<CounterKey>().is_err());
/// ```
#[macro_export]
macro_rules! mirror_store {
    (
        $(#[$smeta:meta])*
        $svis:vis struct $store:ident keyed by $key:ident;
        $(
            $(#[$slmeta:meta])*
            slice $slice_var:ident : $slice:ident {
                $(
                    $(#[$fmeta:meta])*
                    $variant:ident ( $name:literal ) => $field:ident : $fty:ty = $cmp:ident
                ),* $(,)?
            }
        )+
    ) => {
        $(
            $(#[$slmeta])*
            $svis struct $slice {
                $( $(#[$fmeta])* pub $field: $fty, )*
            }
        )+

        $(#[$smeta])*
        $svis struct $store {
            $( $( $(#[$fmeta])* pub $field: $crate::Slot<$fty>, )* )+
        }

        impl $store {
            /// Merge slice defaults into a fresh set of unset slots.
            pub fn from_slices($( $slice_var: $slice ),+) -> Self {
                Self {
                    $( $( $field: $crate::Slot::$cmp($name, $slice_var.$field), )* )+
                }
            }
        }

        impl ::std::default::Default for $store {
            fn default() -> Self {
                Self::from_slices($( <$slice as ::std::default::Default>::default() ),+)
            }
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $svis enum $key {
            $( $( $variant, )* )+
        }

        impl $key {
            pub const ALL: &'static [$key] = &[ $( $( $key::$variant, )* )+ ];

            pub fn name(self) -> &'static str {
                match self {
                    $( $( $key::$variant => $name, )* )+
                }
            }
        }

        impl ::std::fmt::Display for $key {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $key {
            type Err = $crate::MirrorError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $( $name => Ok($key::$variant), )* )+
                    other => Err($crate::MirrorError::UnknownKey(other.to_string())),
                }
            }
        }

        impl $crate::Store for $store {
            type Key = $key;

            fn keys() -> &'static [$key] {
                $key::ALL
            }

            fn slot(&self, key: $key) -> &dyn $crate::AnySlot {
                match key {
                    $( $( $key::$variant => &self.$field, )* )+
                }
            }
        }
    };
}
