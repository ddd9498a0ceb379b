// 数值工具：四舍五入与数字渲染

/// Round `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // 消除 -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Shortest decimal rendering: `2.5` stays `2.5`, `500.0` becomes `500`.
pub fn render_number(value: f64) -> String {
    format!("{}", value)
}

/// 整数渲染，用于千位以下的成交量
pub fn render_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_places() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(-2.005001), -2.01);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn round2_never_returns_negative_zero() {
        let value = round2(-0.001);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn render_number_uses_shortest_form() {
        assert_eq!(render_number(2.5), "2.5");
        assert_eq!(render_number(500.0), "500");
        assert_eq!(render_number(1234.57), "1234.57");
    }

    #[test]
    fn render_integer_drops_fraction() {
        assert_eq!(render_integer(999.0), "999");
        assert_eq!(render_integer(42.4), "42");
    }
}
