use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[doc = "변화량의 부호로 추세를 분류해주는 함수"]
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_change_classifies_sign() {
        assert_eq!(Trend::from_change(0.3), Trend::Up);
        assert_eq!(Trend::from_change(-0.3), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Stable);
    }
}
