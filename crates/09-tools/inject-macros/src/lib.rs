//! # Inject Macros
//!
//! 这个 crate 提供字段注入的派生宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 为带 `#[inject]` 标记字段的结构体实现 `Injectable` trait
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use di_abstractions::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Default, Injectable)]
//! pub struct Handler {
//!     #[inject]
//!     greeting: String,
//!     #[inject("primary")]
//!     store: Option<Arc<dyn Store>>,
//!     retries: u32,
//! }
//! ```
//!
//! 生成的代码通过 `::di_abstractions` 路径引用运行时类型，使用方需要直接依赖该 crate。

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 字段注入派生宏
///
/// 带 `#[inject]` 标记的字段按声明顺序注入，未标记的字段保持原值。
///
/// # 标记形式
///
/// - `#[inject]` - 按字段类型解析
/// - `#[inject("name")]` - 按名称解析，仍以字段类型校验
/// - `#[inject(name = "name")]` - 同上
///
/// 名称为空字符串时等同于 `#[inject]`。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Injectable)]
/// pub struct Holder {
///     #[inject]
///     by_type: Arc<Injected>,
///     #[inject("ServiceByName")]
///     by_name: Arc<Injected>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
