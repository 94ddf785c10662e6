mod identifiable;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Identifiable)]
// ============================================================================

/// Derive macro implementing `crud_service::Identifiable` for a struct with an
/// optional numeric identity.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Identifiable)]
/// #[identifiable(collection = "customers")]
/// struct Customer {
///     id: Option<u64>,
///     name: String,
/// }
/// ```
///
/// The identity field is the one marked `#[identifiable(id)]`, or else the
/// field named `id`. It must be an `Option<u64>`.
///
/// When no collection is given, the snake_case struct name plus `s` is used
/// (`OrderLine` -> `"order_lines"`).
///
/// The generated `identified_by` clones the struct and replaces the identity,
/// so the type must implement `Clone`.
#[proc_macro_derive(Identifiable, attributes(identifiable))]
pub fn derive_identifiable(input: TokenStream) -> TokenStream {
    identifiable::derive_identifiable(input)
}
