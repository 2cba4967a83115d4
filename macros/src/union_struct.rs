//! Implementation of the `union_struct!` macro

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Ident, Token, Visibility, braced,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// Names a member getter would shadow: items the generated type defines,
/// `UnionInstance` methods reached through `Deref`, and methods of the
/// derived and implemented traits. Members may not reuse them.
const RESERVED: &[&str] = &[
    // generated
    "new",
    "union_type",
    "instantiate",
    "set",
    "assign",
    "clear",
    "as_instance",
    "into_instance",
    "TYPE_NAME",
    "MEMBERS",
    // through `Deref`
    "get",
    "members",
    "active",
    "active_member",
    "active_value",
    "is_empty",
    "iter",
    "into_active",
    // traits
    "clone",
    "clone_from",
    "eq",
    "ne",
    "fmt",
    "deref",
    "default",
    "to_string",
];

pub fn union_struct_impl(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as UnionDef);

    if let Err(err) = validate(&def) {
        return err.to_compile_error().into();
    }

    generate_code(&def).into()
}

/// A parsed `union Name { a, b, c }` declaration
pub(crate) struct UnionDef {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    members: Vec<Member>,
}

struct Member {
    /// Identifier as written, possibly raw (`r#type`)
    ident: Ident,
    /// Member name used for lookups (`type`)
    name: String,
}

impl Parse for UnionDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![union]>()?;
        let name: Ident = input.parse()?;

        let content;
        braced!(content in input);
        let members = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?
            .into_iter()
            .map(|ident| Member {
                name: ident.unraw().to_string(),
                ident,
            })
            .collect();

        Ok(UnionDef {
            attrs,
            vis,
            name,
            members,
        })
    }
}

/// Reject definitions the runtime would reject, plus names that would
/// collide with generated methods
pub(crate) fn validate(def: &UnionDef) -> syn::Result<()> {
    let type_name = def.name.unraw().to_string();
    if !is_type_name(&type_name) {
        return Err(syn::Error::new_spanned(
            &def.name,
            format!("`{}` is not a valid union name", type_name),
        ));
    }

    if def.members.is_empty() {
        return Err(syn::Error::new_spanned(
            &def.name,
            "a union must declare at least one member",
        ));
    }

    let mut seen: Vec<&str> = Vec::new();
    for member in &def.members {
        if seen.contains(&member.name.as_str()) {
            return Err(syn::Error::new_spanned(
                &member.ident,
                format!("duplicate member `{}`", member.name),
            ));
        }
        if RESERVED.contains(&member.name.as_str()) {
            return Err(syn::Error::new_spanned(
                &member.ident,
                format!(
                    "member `{}` would shadow a method every union already has",
                    member.name
                ),
            ));
        }
        seen.push(&member.name);
    }

    // `set_<member>` must not shadow another member's getter
    for member in &def.members {
        let setter = format!("set_{}", member.name);
        if let Some(other) = def.members.iter().find(|other| other.name == setter) {
            return Err(syn::Error::new_spanned(
                &other.ident,
                format!(
                    "member `{}` collides with the setter generated for `{}`",
                    other.name, member.name
                ),
            ));
        }
    }

    Ok(())
}

/// Same rule `UnionType::new` applies to type names
fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Generate the wrapper struct and its inherent and trait impls
fn generate_code(def: &UnionDef) -> TokenStream2 {
    let UnionDef {
        attrs,
        vis,
        name,
        members,
    } = def;
    let type_name = name.unraw().to_string();
    let member_names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    let accessors = members.iter().map(|member| {
        let getter = &member.ident;
        let setter = format_ident!("set_{}", member.name);
        let member_name = &member.name;
        let getter_doc = format!("Value of `{}`, or `None` unless it is the active member.", member_name);
        let setter_doc = format!(
            "Set `{}` and clear every other member. `None` empties it.",
            member_name
        );

        quote! {
            #[doc = #getter_doc]
            pub fn #getter(&self) -> ::core::option::Option<&::union_struct_core::Value> {
                // Declared members always resolve.
                self.instance.get(#member_name).ok().flatten()
            }

            #[doc = #setter_doc]
            pub fn #setter(
                &mut self,
                value: impl ::core::convert::Into<::core::option::Option<::union_struct_core::Value>>,
            ) -> ::core::result::Result<
                ::core::option::Option<&::union_struct_core::Value>,
                ::union_struct_core::UnionError,
            > {
                self.instance.set(#member_name, value)
            }
        }
    });

    quote! {
        #(#attrs)*
        #[derive(Clone, PartialEq)]
        #vis struct #name {
            instance: ::union_struct_core::UnionInstance,
        }

        impl #name {
            /// Name the union type is defined under.
            pub const TYPE_NAME: &'static str = #type_name;

            /// Declared members, in declaration order.
            pub const MEMBERS: &'static [&'static str] = &[#(#member_names),*];

            /// The definition shared by every instance of this type.
            pub fn union_type() -> &'static ::std::sync::Arc<::union_struct_core::UnionType> {
                static DEFINITION: ::union_struct_core::StaticUnion =
                    ::union_struct_core::StaticUnion::new(#type_name, &[#(#member_names),*]);
                match DEFINITION.union_type() {
                    ::core::result::Result::Ok(ty) => ty,
                    // Name and members were checked when the macro expanded.
                    ::core::result::Result::Err(err) => ::core::unreachable!("{}", err),
                }
            }

            /// Create an instance with every member empty.
            pub fn new() -> Self {
                Self {
                    instance: Self::union_type().new_instance(),
                }
            }

            /// Create an instance from initializer arguments, which must be empty.
            pub fn instantiate(
                args: &[::union_struct_core::Value],
            ) -> ::core::result::Result<Self, ::union_struct_core::UnionError> {
                Self::union_type()
                    .instantiate(args)
                    .map(|instance| Self { instance })
            }

            /// Keyed setter; see `UnionInstance::set`.
            pub fn set(
                &mut self,
                member: impl ::core::convert::AsRef<str>,
                value: impl ::core::convert::Into<::core::option::Option<::union_struct_core::Value>>,
            ) -> ::core::result::Result<
                ::core::option::Option<&::union_struct_core::Value>,
                ::union_struct_core::UnionError,
            > {
                self.instance.set(member, value)
            }

            pub fn assign(
                &mut self,
                member: impl ::core::convert::AsRef<str>,
                value: impl ::core::convert::Into<::union_struct_core::Value>,
            ) -> ::core::result::Result<
                ::core::option::Option<&::union_struct_core::Value>,
                ::union_struct_core::UnionError,
            > {
                self.instance.assign(member, value)
            }

            pub fn clear(
                &mut self,
                member: impl ::core::convert::AsRef<str>,
            ) -> ::core::result::Result<(), ::union_struct_core::UnionError> {
                self.instance.clear(member)
            }

            pub fn as_instance(&self) -> &::union_struct_core::UnionInstance {
                &self.instance
            }

            pub fn into_instance(self) -> ::union_struct_core::UnionInstance {
                self.instance
            }

            #(#accessors)*
        }

        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::ops::Deref for #name {
            type Target = ::union_struct_core::UnionInstance;

            fn deref(&self) -> &Self::Target {
                &self.instance
            }
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.instance, f)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.instance, f)
            }
        }
    }
}
