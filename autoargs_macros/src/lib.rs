use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

/// Derive `autoargs::RouteArgs` for a named-field struct.
///
/// Emits a `const` descriptor table pairing each field name with its wire
/// kind, classified from the field's declared type:
///
/// - `String` → `Str`
/// - `i32` → `Int`
/// - `i64` → `Long`
/// - `f32` / `f64` → `Float`
/// - `bool` → `Bool`
/// - `Option<T>` → the classification of `T`
/// - anything else → `Complex` (carried as an opaque escaped string)
///
/// Unit structs produce an empty table. Tuple structs and enums are
/// rejected at compile time.
#[proc_macro_derive(RouteArgs)]
pub fn derive_route_args(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "RouteArgs requires named fields; tuple structs are not supported",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "RouteArgs can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let descriptors = fields.iter().map(|field| {
        // Named fields are guaranteed by the match above.
        let ident = field.ident.as_ref().map(|i| i.to_string()).unwrap_or_default();
        let kind = classify(&field.ty);
        quote! {
            ::autoargs::FieldDescriptor {
                name: #ident,
                kind: ::autoargs::FieldKind::#kind,
            }
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::autoargs::RouteArgs for #name #ty_generics #where_clause {
            fn field_descriptors() -> &'static [::autoargs::FieldDescriptor] {
                const FIELDS: &[::autoargs::FieldDescriptor] = &[
                    #(#descriptors),*
                ];
                FIELDS
            }
        }
    };
    TokenStream::from(expanded)
}

/// Map a field's declared type to its `FieldKind` variant name.
fn classify(ty: &Type) -> proc_macro2::Ident {
    let complex = || proc_macro2::Ident::new("Complex", proc_macro2::Span::call_site());

    let path = match ty {
        Type::Path(p) => &p.path,
        _ => return complex(),
    };
    let segment = match path.segments.last() {
        Some(seg) => seg,
        None => return complex(),
    };

    // Option<T> carries the same wire kind as T (null decodes to None).
    if segment.ident == "Option" {
        if let PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                return classify(inner);
            }
        }
        return complex();
    }

    let variant = match segment.ident.to_string().as_str() {
        "String" => "Str",
        "i32" => "Int",
        "i64" => "Long",
        "f32" | "f64" => "Float",
        "bool" => "Bool",
        _ => "Complex",
    };
    proc_macro2::Ident::new(variant, proc_macro2::Span::call_site())
}
