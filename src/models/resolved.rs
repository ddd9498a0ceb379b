/// 经过回退与类型校验后的数值：要么存在，要么不可用
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedValue {
    Present(f64),
    Unavailable,
}

impl ResolvedValue {
    pub fn value(self) -> Option<f64> {
        match self {
            ResolvedValue::Present(x) => Some(x),
            ResolvedValue::Unavailable => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, ResolvedValue::Present(_))
    }

    /// Keeps the value only when `predicate` holds.
    pub fn filter(self, predicate: impl FnOnce(f64) -> bool) -> Self {
        ResolvedValue::from(self.value().filter(|x| predicate(*x)))
    }

    /// 第一个可用的值
    pub fn or(self, other: ResolvedValue) -> Self {
        if self.is_present() {
            self
        } else {
            other
        }
    }
}

impl From<Option<f64>> for ResolvedValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(x) if x.is_finite() => ResolvedValue::Present(x),
            _ => ResolvedValue::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_option_is_unavailable() {
        assert_eq!(ResolvedValue::from(Some(f64::NAN)), ResolvedValue::Unavailable);
        assert_eq!(ResolvedValue::from(Some(f64::INFINITY)), ResolvedValue::Unavailable);
        assert_eq!(ResolvedValue::from(Some(0.0)), ResolvedValue::Present(0.0));
    }

    #[test]
    fn or_keeps_first_present() {
        let first = ResolvedValue::Unavailable.or(ResolvedValue::Present(2.0));
        assert_eq!(first, ResolvedValue::Present(2.0));
        let kept = ResolvedValue::Present(1.0).or(ResolvedValue::Present(2.0));
        assert_eq!(kept, ResolvedValue::Present(1.0));
    }

    #[test]
    fn filter_drops_rejected_values() {
        assert_eq!(ResolvedValue::Present(-1.5).filter(|x| x >= 0.0), ResolvedValue::Unavailable);
        assert_eq!(ResolvedValue::Present(0.0).filter(|x| x >= 0.0), ResolvedValue::Present(0.0));
    }
}
