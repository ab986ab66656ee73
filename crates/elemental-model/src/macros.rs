//! Declarative generators for shapes and open enumerations.
//!
//! Every MediaConvert shape follows the same contract, so the boilerplate is
//! produced here rather than written out hundreds of times:
//!
//! - `shape!` declares a record of optional fields together with its
//!   accessors, a fluent builder, `Display`, [`Render`] and
//!   [`UnknownValues`].
//! - `open_enums!` declares a block of closed value sets, each with an
//!   `Other(String)` fallback, plus the module's `ENUMERATIONS` catalog slice.
//!
//! Field kinds decide the storage type and the accessor signatures:
//!
//! | kind        | stored as                 | getter returns          |
//! |-------------|---------------------------|-------------------------|
//! | `copy(T)`   | `T`                       | `Option<T>`             |
//! | `float(f64)`| [`Float`]                 | `Option<f64>`           |
//! | `string(String)` | `String`             | `Option<&str>`          |
//! | `value(T)`  | `T` (enum or shape)       | `Option<&T>`            |
//! | `list(T)`   | `Vec<T>`                  | `Option<&[T]>`          |
//! | `map(T)`    | `BTreeMap<String, T>`     | `Option<&BTreeMap<..>>` |
//!
//! Labels default to the field name in UpperCamelCase and JSON keys to the
//! field name in lowerCamelCase. `as "Label" / "key"` overrides both when the
//! API's member name does not follow from the Rust field name.
//!
//! [`Render`]: elemental_common::Render
//! [`UnknownValues`]: crate::walk::UnknownValues
//! [`Float`]: elemental_common::Float

macro_rules! field_storage {
    (float $ty:ty) => { ::elemental_common::Float };
    (list $ty:ty) => { ::std::vec::Vec<$ty> };
    (map $ty:ty) => { ::std::collections::BTreeMap<::std::string::String, $ty> };
    (copy $ty:ty) => { $ty };
    (string $ty:ty) => { $ty };
    (value $ty:ty) => { $ty };
}

macro_rules! field_label {
    ($field:ident) => {
        ::paste::paste!(stringify!([<$field:camel>]))
    };
    ($field:ident $label:literal) => {
        $label
    };
}

macro_rules! field_getter {
    (copy $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> ::std::option::Option<$ty> {
            self.$field
        }
    };
    (float $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> ::std::option::Option<f64> {
            self.$field.map(::elemental_common::Float::get)
        }
    };
    (string $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    (value $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (list $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
    (map $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(
            &self,
        ) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
            self.$field.as_ref()
        }
    };
}

macro_rules! field_setter {
    (copy $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(mut self, input: $ty) -> Self {
            self.$field = ::std::option::Option::Some(input);
            self
        }

        ::paste::paste! {
            /// Sets or clears the field; `None` leaves it unset.
            pub fn [<set_ $field>](mut self, input: ::std::option::Option<$ty>) -> Self {
                self.$field = input;
                self
            }

            /// Returns the value currently held by the builder.
            pub fn [<get_ $field>](&self) -> &::std::option::Option<$ty> {
                &self.$field
            }
        }
    };
    (float $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(mut self, input: f64) -> Self {
            self.$field = ::std::option::Option::Some(::elemental_common::Float::new(input));
            self
        }

        ::paste::paste! {
            /// Sets or clears the field; `None` leaves it unset.
            pub fn [<set_ $field>](mut self, input: ::std::option::Option<f64>) -> Self {
                self.$field = input.map(::elemental_common::Float::new);
                self
            }

            /// Returns the value currently held by the builder.
            pub fn [<get_ $field>](&self) -> ::std::option::Option<f64> {
                self.$field.map(::elemental_common::Float::get)
            }
        }
    };
    (string $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        ::paste::paste! {
            /// Sets or clears the field; `None` leaves it unset.
            pub fn [<set_ $field>](
                mut self,
                input: ::std::option::Option<::std::string::String>,
            ) -> Self {
                self.$field = input;
                self
            }

            /// Returns the value currently held by the builder.
            pub fn [<get_ $field>](&self) -> &::std::option::Option<::std::string::String> {
                &self.$field
            }
        }
    };
    (value $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        ::paste::paste! {
            /// Sets or clears the field; `None` leaves it unset.
            pub fn [<set_ $field>](mut self, input: ::std::option::Option<$ty>) -> Self {
                self.$field = input;
                self
            }

            /// Returns the value currently held by the builder.
            pub fn [<get_ $field>](&self) -> &::std::option::Option<$ty> {
                &self.$field
            }
        }
    };
    (list $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        ///
        /// Appends one element; use the `set_` form to replace the whole list.
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .push(input.into());
            self
        }

        ::paste::paste! {
            /// Replaces or clears the list; `None` leaves it unset.
            pub fn [<set_ $field>](
                mut self,
                input: ::std::option::Option<::std::vec::Vec<$ty>>,
            ) -> Self {
                self.$field = input;
                self
            }

            /// Returns the list currently held by the builder.
            pub fn [<get_ $field>](&self) -> &::std::option::Option<::std::vec::Vec<$ty>> {
                &self.$field
            }
        }
    };
    (map $field:ident: $ty:ty, [$($doc:literal)*]) => {
        $(#[doc = $doc])*
        ///
        /// Inserts one entry; use the `set_` form to replace the whole map.
        pub fn $field(
            mut self,
            key: impl ::std::convert::Into<::std::string::String>,
            value: impl ::std::convert::Into<$ty>,
        ) -> Self {
            self.$field
                .get_or_insert_with(::std::collections::BTreeMap::new)
                .insert(key.into(), value.into());
            self
        }

        ::paste::paste! {
            /// Replaces or clears the map; `None` leaves it unset.
            pub fn [<set_ $field>](
                mut self,
                input: ::std::option::Option<
                    ::std::collections::BTreeMap<::std::string::String, $ty>,
                >,
            ) -> Self {
                self.$field = input;
                self
            }

            /// Returns the map currently held by the builder.
            pub fn [<get_ $field>](
                &self,
            ) -> &::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
            {
                &self.$field
            }
        }
    };
}

/// Declare one shape: the record, its accessors and its builder.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $kind:ident ( $ty:ty ) $(as $label:literal / $key:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        pub struct $name {
            $(
                $(#[cfg_attr(feature = "serde", serde(rename = $key))])?
                #[cfg_attr(
                    feature = "serde",
                    serde(default, skip_serializing_if = "Option::is_none")
                )]
                $field: ::std::option::Option<field_storage!($kind $ty)>,
            )*
        }

        ::paste::paste! {
            impl $name {
                /// Creates an empty builder.
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// Creates a builder pre-populated with this value's fields.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] {
                        $( $field: self.$field.clone(), )*
                    }
                }

                $( field_getter!($kind $field: $ty, [$($doc)*]); )*
            }

            /// Fluent builder for the shape of the same name.
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct [<$name Builder>] {
                $( $field: ::std::option::Option<field_storage!($kind $ty)>, )*
            }

            impl [<$name Builder>] {
                $( field_setter!($kind $field: $ty, [$($doc)*]); )*

                /// Builds the value. Nothing is validated.
                pub fn build(self) -> $name {
                    $name {
                        $( $field: self.$field, )*
                    }
                }
            }

            impl ::std::convert::From<[<$name Builder>]> for $name {
                fn from(builder: [<$name Builder>]) -> Self {
                    builder.build()
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut fields = ::elemental_common::FieldList::new(f)?;
                $( fields.entry(field_label!($field $($label)?), self.$field.as_ref())?; )*
                fields.finish()
            }
        }

        impl ::elemental_common::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::walk::UnknownValues for $name {
            #[allow(unused_variables)]
            fn collect_unknown(
                &self,
                path: &str,
                out: &mut ::std::vec::Vec<$crate::walk::UnknownValue>,
            ) {
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        let child = $crate::walk::child_path(path, field_label!($field $($label)?));
                        $crate::walk::UnknownValues::collect_unknown(value, &child, out);
                    }
                )*
            }
        }
    };
}

macro_rules! open_enum {
    (
        [$($doc:literal)*]
        $name:ident {
            $( [$($vdoc:literal)*] $variant:ident = $value:literal ),*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                $(#[doc = $vdoc])*
                $variant,
            )*
            /// A value this crate does not model yet, kept verbatim.
            Other(::std::string::String),
        }

        impl $name {
            /// Every wire value this enumeration models.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Whether the value belongs to the modelled set.
            pub fn is_known(&self) -> bool {
                Self::lookup(self.as_str()).is_some()
            }

            /// Strict parse that rejects values outside the modelled set.
            pub fn parse_known(value: &str) -> ::elemental_common::Result<Self> {
                Self::lookup(value).ok_or_else(|| {
                    ::elemental_common::Error::unknown_variant(stringify!($name), value)
                })
            }

            fn lookup(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $( $value => ::std::option::Option::Some(Self::$variant), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::lookup(value).unwrap_or_else(|| {
                    tracing::debug!(
                        enumeration = stringify!($name),
                        value,
                        "unmodelled enumeration value"
                    );
                    Self::Other(value.to_owned())
                })
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match Self::lookup(&value) {
                    ::std::option::Option::Some(known) => known,
                    ::std::option::Option::None => {
                        tracing::debug!(
                            enumeration = stringify!($name),
                            value = value.as_str(),
                            "unmodelled enumeration value"
                        );
                        Self::Other(value)
                    }
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(Self::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl ::elemental_common::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::walk::UnknownValues for $name {
            fn collect_unknown(
                &self,
                path: &str,
                out: &mut ::std::vec::Vec<$crate::walk::UnknownValue>,
            ) {
                if !self.is_known() {
                    out.push($crate::walk::UnknownValue {
                        path: path.to_owned(),
                        enumeration: stringify!($name),
                        value: self.as_str().to_owned(),
                    });
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                <::std::string::String as serde::Deserialize>::deserialize(deserializer)
                    .map(Self::from)
            }
        }
    };
}

/// Declare a module's enumerations and its `ENUMERATIONS` catalog slice.
macro_rules! open_enums {
    ($(
        $(#[doc = $doc:literal])*
        $name:ident {
            $( $(#[doc = $vdoc:literal])* $variant:ident = $value:literal ),* $(,)?
        }
    )*) => {
        $(
            open_enum! {
                [$($doc)*]
                $name {
                    $( [$($vdoc)*] $variant = $value ),*
                }
            }
        )*

        /// Enumerations declared in this module, for the crate catalog.
        pub(crate) const ENUMERATIONS: &[$crate::catalog::EnumInfo] = &[
            $(
                $crate::catalog::EnumInfo {
                    name: stringify!($name),
                    values: $name::VALUES,
                },
            )*
        ];
    };
}
