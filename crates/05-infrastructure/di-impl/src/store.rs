//! 条目存储
//!
//! 以名称为键的条目集合，同名后写覆盖先写。遍历顺序为键第一次绑定的顺序。

use di_abstractions::Instance;
use std::collections::HashMap;

/// 条目存储
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: HashMap<String, Instance>,
    order: Vec<String>,
}

impl EntryStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 存入条目，返回被覆盖的旧条目
    pub fn put(&mut self, key: String, instance: Instance) -> Option<Instance> {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, instance)
    }

    /// 按键取条目
    pub fn get(&self, key: &str) -> Option<&Instance> {
        self.entries.get(key)
    }

    /// 是否存在该键
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 按绑定顺序遍历所有条目
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Instance)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|instance| (key.as_str(), instance)))
    }

    /// 当前条目的快照
    pub fn snapshot(&self) -> Vec<(String, Instance)> {
        self.iter()
            .map(|(key, instance)| (key.to_string(), instance.clone()))
            .collect()
    }

    /// 按绑定顺序遍历所有键
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否没有任何条目
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
