//! Union-family declaration macro.
//!
//! Each tagged-union family in the schema is a closed (token → payload type)
//! table. `tagged_union!` expands one table into the enum itself, its wire
//! metadata (`TOKENS`, `discriminator()`), per-variant accessors, and the
//! `Serialize`/`Deserialize` impls that plug into [`crate::codec`].
//!
//! The tables are the grammar: everything else about a family is mechanical.

/// Declare a tagged-union family.
///
/// ```ignore
/// tagged_union! {
///     /// Width of a node.
///     pub enum DimensionWidthValue, payload_key = "value" {
///         "fixed" => Fixed(f32),
///         "percentage" => Percentage(f32),
///         "fit" => Fit(DimensionWidthFitValue),
///     }
/// }
/// ```
///
/// # Generated per family
/// - the enum, with `Debug`/`Clone`/`PartialEq`
/// - `TOKENS` — the closed discriminator table, in declaration order
/// - `discriminator()` — the literal token a value encodes as
/// - `is_xxx()` / `as_xxx()` accessors per variant
/// - `Serialize` writing `{"type": token, "<payload_key>": payload}`
/// - `Deserialize` doing discriminator-first dispatch through
///   [`crate::codec`], with depth guarding
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, payload_key = $key:literal {
            $( $token:literal => $variant:ident($payload:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                #[doc = concat!("Wire token `\"", $token, "\"`")]
                $variant($payload),
            )+
        }

        impl $name {
            /// Wire discriminator tokens accepted by this family, in table
            /// order.
            $vis const TOKENS: &'static [&'static str] = &[ $( $token ),+ ];

            /// The literal wire token this value encodes as.
            $vis fn discriminator(&self) -> &'static str {
                match self { $( Self::$variant(_) => $token, )+ }
            }

            ::paste::paste! {
                $(
                    #[doc = concat!("Check if this is a `", $token, "` value")]
                    $vis fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    #[doc = concat!("Get the `", $token, "` payload, if that is the active variant")]
                    $vis fn [<as_ $variant:snake>](&self) -> Option<&$payload> {
                        match self {
                            Self::$variant(payload) => Some(payload),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        }
                    }
                )+
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $(
                        Self::$variant(payload) => {
                            crate::codec::serialize_tagged(serializer, $token, $key, payload)
                        }
                    )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                const FAMILY: &str = stringify!($name);
                let crate::codec::Envelope { tag, fields } =
                    crate::codec::read_envelope(FAMILY, deserializer)?;
                let _depth = crate::codec::DepthGuard::enter::<D::Error>(FAMILY)?;
                $(
                    if tag == $token {
                        return crate::codec::decode_payload::<$payload, D::Error>(
                            FAMILY, $token, $key, fields,
                        )
                        .map(Self::$variant);
                    }
                )+
                Err(crate::codec::unrecognized::<D::Error>(FAMILY, tag))
            }
        }
    };
}

pub(crate) use tagged_union;
