/// Declares a closed code set: a fieldless enum plus its static [`CodedValue`] table.
///
/// Each variant maps to `(code, display name, code system)` and may carry an alternate
/// name. Variants are serialised by their symbolic name.
///
/// ```rust,ignore
/// code_set! {
///     /// Sex of a person.
///     pub enum Sex {
///         Male => ("M", "Male", AS5017_SEX),
///         Female => ("F", "Female", AS5017_SEX),
///     }
/// }
/// ```
///
/// [`CodedValue`]: crate::CodedValue
macro_rules! code_set {
    (@alt) => {
        None
    };
    (@alt $alt:literal) => {
        Some($alt)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($code:literal, $display:literal, $system:ident $(, alt = $alt:literal)?)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            const VALUES: &'static [$name] = &[$($name::$variant),+];

            const CODED: &'static [$crate::CodedValue] = &[
                $(
                    $crate::CodedValue {
                        name: stringify!($variant),
                        code: $code,
                        code_system: $system.oid,
                        code_system_name: $system.name,
                        display_name: $display,
                        alternate_name: code_set!(@alt $($alt)?),
                    }
                ),+
            ];
        }

        impl $crate::CodeSet for $name {
            const CODE_SET: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                Self::VALUES
            }

            fn coded_values() -> &'static [$crate::CodedValue] {
                Self::CODED
            }

            fn coded_value(self) -> &'static $crate::CodedValue {
                &Self::CODED[self as usize]
            }

            fn table() -> &'static $crate::CodeTable<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::CodeTable<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::CodeTable::build()
                            .expect(concat!(stringify!($name), " code table is unique"))
                    });
                &TABLE
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CodeSet::display_name(*self))
            }
        }
    };
}
