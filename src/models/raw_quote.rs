use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 上游原始报价：字段名到值的映射，任何字段都可能缺失或类型不符
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawQuote {
    fields: Map<String, Value>,
}

impl RawQuote {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式添加字段，主要用于构造测试数据
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }

    /// Returns the value for `name`, treating JSON `null` as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// Numeric value of `name`. Strings, booleans and non-finite numbers are `None`.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Value::Number(n) => n.as_f64().filter(|x| x.is_finite()),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for RawQuote {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
