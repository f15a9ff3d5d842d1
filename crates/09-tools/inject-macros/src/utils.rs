//! 宏工具函数

use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, FieldsNamed, Result};

/// 取出结构体的具名字段，其他形状报错
pub fn named_fields(input: &DeriveInput) -> Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unit => Err(Error::new_spanned(
                &input.ident,
                "Injectable 需要具名字段；单元结构体没有可注入的字段",
            )),
            Fields::Unnamed(fields) => Err(Error::new_spanned(
                fields,
                "Injectable 只支持具名字段的结构体",
            )),
        },
        Data::Enum(data) => Err(Error::new_spanned(
            data.enum_token,
            "Injectable 不能用于枚举",
        )),
        Data::Union(data) => Err(Error::new_spanned(
            data.union_token,
            "Injectable 不能用于联合体",
        )),
    }
}

/// 查找字段上唯一的指定属性，重复出现时报错
pub fn find_field_attribute<'a>(field: &'a Field, attr_name: &str) -> Result<Option<&'a Attribute>> {
    let mut found: Option<&Attribute> = None;
    for attr in &field.attrs {
        if !attr.path().is_ident(attr_name) {
            continue;
        }
        if found.is_some() {
            return Err(Error::new_spanned(
                attr,
                format!("字段上重复的 #[{}] 属性", attr_name),
            ));
        }
        found = Some(attr);
    }
    Ok(found)
}
