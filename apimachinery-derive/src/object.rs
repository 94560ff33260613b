use darling::{ast, FromDeriveInput, FromField, FromMeta};
use proc_macro2::TokenStream;
use syn::{parse_quote, DeriveInput, Generics, Ident, Path, Type};

#[derive(FromField)]
#[darling(attributes(object))]
struct ObjectField {
    ident: Option<Ident>,
    ty: Type,
    #[darling(default)]
    kind: bool,
    #[darling(default)]
    meta: bool,
}

#[derive(FromDeriveInput)]
#[darling(attributes(object), supports(struct_named))]
struct ObjectAttrs {
    ident: Ident,
    generics: Generics,
    data: ast::Data<(), ObjectField>,
    #[darling(default)]
    crates: Crates,
}

#[derive(Debug, FromMeta)]
struct Crates {
    #[darling(default = "Self::default_apimachinery_core")]
    apimachinery_core: Path,
}

// Default is required when the subattribute isn't mentioned at all
// Delegate to darling rather than deriving, so that we can piggyback off the `#[darling(default)]` clauses
impl Default for Crates {
    fn default() -> Self {
        Self::from_list(&[]).unwrap()
    }
}

impl Crates {
    fn default_apimachinery_core() -> Path {
        parse_quote! { ::apimachinery::core } // by default must work well with people using facade crate
    }
}

// At most one field may carry each marker
fn marked<'a>(
    fields: &'a [ObjectField],
    is_marked: impl Fn(&ObjectField) -> bool,
    marker: &str,
) -> Result<Option<&'a ObjectField>, syn::Error> {
    let mut found = fields.iter().filter(|f| is_marked(f));
    let first = found.next();
    if let Some(dup) = found.next() {
        return Err(syn::Error::new_spanned(
            &dup.ident,
            format!("only one field can be marked #[object({marker})]"),
        ));
    }
    Ok(first)
}

pub(crate) fn derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = match syn::parse2(input) {
        Err(err) => return err.to_compile_error(),
        Ok(di) => di,
    };
    let ObjectAttrs {
        ident,
        generics,
        data,
        crates: Crates { apimachinery_core },
    } = match ObjectAttrs::from_derive_input(&ast) {
        Err(err) => return err.write_errors(),
        Ok(attrs) => attrs,
    };
    let fields = match data {
        ast::Data::Struct(fields) => fields.fields,
        ast::Data::Enum(_) => return quote! {},
    };
    let (kind_field, meta_field) = match (
        marked(&fields, |f| f.kind, "kind"),
        marked(&fields, |f| f.meta, "meta"),
    ) {
        (Ok(kind), Ok(meta)) => (kind, meta),
        (Err(err), _) | (_, Err(err)) => return err.to_compile_error(),
    };

    // objects are resolved through their runtime type, which needs `'static`
    let mut generics = generics;
    let params = generics.type_params().map(|p| p.ident.clone()).collect::<Vec<_>>();
    let predicates = &mut generics.make_where_clause().predicates;
    for param in params {
        predicates.push(parse_quote! { #param: 'static });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let object_impl = if let Some(ObjectField { ident: field, .. }) = kind_field {
        quote! {
            impl #impl_generics #apimachinery_core::Object for #ident #ty_generics #where_clause {
                fn object_kind(&self) -> &dyn #apimachinery_core::ObjectKind {
                    &self.#field
                }

                fn object_kind_mut(&mut self) -> &mut dyn #apimachinery_core::ObjectKind {
                    &mut self.#field
                }
            }
        }
    } else {
        // Without an envelope field the type is its own (inert) envelope
        quote! {
            impl #impl_generics #apimachinery_core::ObjectKind for #ident #ty_generics #where_clause {
                fn set_group_version_kind(
                    &mut self,
                    gvk: ::core::option::Option<#apimachinery_core::GroupVersionKind>,
                ) {
                    <#apimachinery_core::EmptyObjectKind as #apimachinery_core::ObjectKind>::set_group_version_kind(
                        &mut #apimachinery_core::EmptyObjectKind,
                        gvk,
                    )
                }

                fn group_version_kind(&self) -> ::core::option::Option<#apimachinery_core::GroupVersionKind> {
                    <#apimachinery_core::EmptyObjectKind as #apimachinery_core::ObjectKind>::group_version_kind(
                        &#apimachinery_core::EmptyObjectKind,
                    )
                }
            }

            impl #impl_generics #apimachinery_core::Object for #ident #ty_generics #where_clause {
                fn object_kind(&self) -> &dyn #apimachinery_core::ObjectKind {
                    self
                }

                fn object_kind_mut(&mut self) -> &mut dyn #apimachinery_core::ObjectKind {
                    self
                }
            }
        }
    };

    let meta_impl = meta_field.map(|ObjectField { ident: field, ty, .. }| {
        quote! {
            impl #impl_generics #apimachinery_core::HasObjectMeta for #ident #ty_generics #where_clause {
                fn meta(&self) -> &#ty {
                    &self.#field
                }

                fn meta_mut(&mut self) -> &mut #ty {
                    &mut self.#field
                }
            }
        }
    });

    quote! {
        #object_impl
        #meta_impl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_field_is_delegated_to() {
        let input = quote! {
            struct Widget {
                #[object(kind)]
                types: TypeMeta,
                #[object(meta)]
                metadata: ObjectMeta,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains("impl :: apimachinery :: core :: Object for Widget"));
        assert!(output.contains("& self . types"));
        assert!(output.contains("impl :: apimachinery :: core :: HasObjectMeta for Widget"));
        assert!(output.contains("& self . metadata"));
        assert!(!output.contains("EmptyObjectKind"));
    }

    #[test]
    fn missing_envelope_delegates_to_empty_kind() {
        let input = quote! {
            struct Scratch {
                value: u32,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains("impl :: apimachinery :: core :: ObjectKind for Scratch"));
        assert!(output.contains("EmptyObjectKind"));
        assert!(!output.contains("HasObjectMeta"));
    }

    #[test]
    fn crate_path_can_be_overridden() {
        let input = quote! {
            #[object(crates(apimachinery_core = "::apimachinery_core"))]
            struct Widget {
                #[object(kind)]
                types: TypeMeta,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains("impl :: apimachinery_core :: Object for Widget"));
    }

    #[test]
    fn type_params_must_be_static() {
        let input = quote! {
            struct Wrapper<T: Default> {
                #[object(kind)]
                types: TypeMeta,
                value: T,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains(":: apimachinery :: core :: Object for Wrapper < T > where T :"));
        assert!(output.contains("static"));
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        let input = quote! {
            struct Widget {
                #[object(kind)]
                types: TypeMeta,
                #[object(kind)]
                other: TypeMeta,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains("compile_error"));
        assert!(output.contains("only one field can be marked #[object(kind)]"));
    }

    #[test]
    fn enums_are_rejected() {
        let input = quote! {
            enum Widget {
                A,
            }
        };
        let output = derive(input).to_string();
        assert!(output.contains("compile_error"));
    }
}
