//! Declarative helpers shared by domain types.
//!
//! `define_port_error!` declares a `thiserror` enum whose variants list their
//! context fields and display message, plus one snake_case constructor per
//! variant accepting anything convertible into the field types.
//!
//! `define_numeric_id!` declares a transparent `u32` identifier newtype.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

macro_rules! define_numeric_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw id.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Raw numeric value.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_numeric_id;

#[cfg(test)]
mod tests {
    //! Constructor generation coverage.
    use super::{define_numeric_id, define_port_error};

    define_port_error! {
        pub enum LookupError {
            Missing { key: String } => "no entry for {key}",
            Overflow { limit: u32 } => "limit {limit} exceeded",
            Mismatch { key: String, limit: u32 } => "{key} is over {limit}",
            Closed => "lookup closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(LookupError::missing("votes").to_string(), "no entry for votes");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(LookupError::overflow(7_u32).to_string(), "limit 7 exceeded");
    }

    #[test]
    fn mixed_fields_render_in_order() {
        assert_eq!(LookupError::mismatch("seats", 3_u32).to_string(), "seats is over 3");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(LookupError::closed(), LookupError::Closed);
    }

    define_numeric_id!(TicketId);

    #[test]
    fn numeric_ids_serialise_transparently() {
        let id = TicketId::from(42);
        assert_eq!(serde_json::to_value(id).expect("serialise"), serde_json::json!(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.get(), 42);
    }
}
