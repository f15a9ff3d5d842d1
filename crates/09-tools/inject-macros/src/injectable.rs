//! 字段注入派生宏实现

use crate::utils::{find_field_attribute, named_fields};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, Attribute, DeriveInput, Error, Ident, LitStr, Meta, Result,
    Token, Type,
};

/// `#[inject]` 参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectArgs {
    /// 查找名称，`None` 表示按字段类型解析
    pub name: Option<String>,
}

impl Parse for InjectArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        let lit = if input.peek(LitStr) {
            input.parse::<LitStr>()?
        } else {
            let key: Ident = input.parse()?;
            if key != "name" {
                return Err(Error::new(
                    key.span(),
                    "期望 #[inject(\"name\")] 或 #[inject(name = \"name\")]",
                ));
            }
            input.parse::<Token![=]>()?;
            input.parse::<LitStr>()?
        };
        input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("#[inject] 只接受一个名称"));
        }

        let value = lit.value();
        Ok(Self {
            name: if value.is_empty() { None } else { Some(value) },
        })
    }
}

impl InjectArgs {
    /// 从字段属性解析
    pub fn from_attribute(attr: &Attribute) -> Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(list) => list.parse_args::<Self>(),
            Meta::NameValue(nv) => Err(Error::new_spanned(
                nv,
                "请使用 #[inject(\"name\")] 而不是 #[inject = ...]",
            )),
        }
    }
}

/// 一个需要注入的字段
struct InjectField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    args: InjectArgs,
}

fn collect_inject_fields(input: &DeriveInput) -> Result<Vec<InjectField<'_>>> {
    let mut fields = Vec::new();
    for field in &named_fields(input)?.named {
        let Some(attr) = find_field_attribute(field, "inject")? else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        fields.push(InjectField {
            ident,
            ty: &field.ty,
            args: InjectArgs::from_attribute(attr)?,
        });
    }
    Ok(fields)
}

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = collect_inject_fields(&input)?;

    let points = fields.iter().map(|f| {
        let field_name = f.ident.to_string();
        let ty = f.ty;
        let name = match &f.args.name {
            Some(name) => quote! { ::std::option::Option::Some(#name) },
            None => quote! { ::std::option::Option::None },
        };
        quote! {
            ::di_abstractions::InjectionPoint {
                field: #field_name,
                field_type: ::di_abstractions::TypeInfo::of::<#ty>(),
                name: #name,
            }
        }
    });

    let assignments = fields.iter().map(|f| {
        let ident = f.ident;
        let field_name = ident.to_string();
        let ty = f.ty;
        let name = match &f.args.name {
            Some(name) => quote! { ::std::option::Option::Some(#name) },
            None => quote! { ::std::option::Option::None },
        };
        quote! {
            self.#ident = ::di_abstractions::ServiceLocatorExt::get_with_context::<#ty>(
                locator,
                #name,
                &::di_abstractions::ResolveContext::for_field(
                    ::di_abstractions::TypeInfo::of::<Self>(),
                    #field_name,
                ),
            )?;
        }
    });

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn injection_points() -> ::std::vec::Vec<::di_abstractions::InjectionPoint> {
                ::std::vec![#(#points),*]
            }

            #[allow(unused_variables)]
            fn inject_fields(
                &mut self,
                locator: &dyn ::di_abstractions::ServiceLocator,
            ) -> ::di_abstractions::RegistryResult<()> {
                #(#assignments)*
                ::std::result::Result::Ok(())
            }
        }
    })
}
