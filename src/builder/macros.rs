//! Macros for declaring endpoint catalogs.

/// Declare a catalog of endpoints.
///
/// Expands to a unit struct implementing `Default`, with one accessor per
/// entry returning a fresh [`Endpoint`](crate::core::Endpoint), plus `all()`
/// listing every entry in declaration order. Accessors can be passed
/// directly as selectors (`ReviewStates::expert_review`).
///
/// # Example
///
/// ```
/// use flowtable::catalog;
///
/// catalog! {
///     pub struct ReviewStates {
///         form_submission = 1 => "Initial submission",
///         expert_review = 2 => "Expert review submission",
///         end = 4 => "Completion",
///     }
/// }
///
/// let states = ReviewStates;
/// assert_eq!(states.expert_review().code(), 2);
/// assert_eq!(states.all().len(), 3);
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$item_meta:meta])*
                $item:ident = $code:literal => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$item_meta])*
                #[allow(dead_code)]
                pub fn $item(&self) -> $crate::core::Endpoint {
                    $crate::core::Endpoint::new($code, $label)
                }
            )*

            /// Every endpoint in this catalog, in declaration order.
            #[allow(dead_code)]
            pub fn all(&self) -> ::std::vec::Vec<$crate::core::Endpoint> {
                ::std::vec![$(self.$item()),*]
            }
        }
    };
}
