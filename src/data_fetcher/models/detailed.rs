use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Official {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// Parses "top"/"bottom" in any case. ESPN also sends "Top"/"Bottom" as
    /// the period type of a baseball play.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("top") {
            Some(Half::Top)
        } else if value.eq_ignore_ascii_case("bottom") {
            Some(Half::Bottom)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batter {
    pub name: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningHalf {
    pub number: u32,
    pub half: Half,
    /// "<away>-<home>" at the first plate appearance of the half
    pub score: String,
    pub batters: Vec<Batter>,
    pub pitcher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inning {
    pub number: u32,
    pub top: Option<InningHalf>,
    pub bottom: Option<InningHalf>,
}

impl Inning {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            top: None,
            bottom: None,
        }
    }

    pub fn half_mut(&mut self, half: Half) -> &mut Option<InningHalf> {
        match half {
            Half::Top => &mut self.top,
            Half::Bottom => &mut self.bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrivePlay {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drive {
    pub quarter_number: u32,
    pub description: String,
    pub score_result: String,
    pub quarterback: Option<String>,
    pub plays: Vec<DrivePlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quarter {
    pub number: u32,
    pub drives: Vec<Drive>,
}

/// League-specific play grouping. Baseball carries innings, football carries
/// drives, everything else carries neither.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "kind", content = "groups", rename_all = "lowercase")]
pub enum PlayBreakdown {
    Innings(Vec<Inning>),
    Drives(Vec<Quarter>),
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GameDetail {
    pub name: String,
    pub status: String,
    pub venue: String,
    pub weather: Option<String>,
    pub officials: Vec<Official>,
    pub breakdown: PlayBreakdown,
}

impl GameDetail {
    pub fn innings(&self) -> Option<&[Inning]> {
        match &self.breakdown {
            PlayBreakdown::Innings(innings) => Some(innings),
            _ => None,
        }
    }

    pub fn drives(&self) -> Option<&[Quarter]> {
        match &self.breakdown {
            PlayBreakdown::Drives(quarters) => Some(quarters),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_parse() {
        assert_eq!(Half::parse("top"), Some(Half::Top));
        assert_eq!(Half::parse("Bottom"), Some(Half::Bottom));
        assert_eq!(Half::parse("middle"), None);
        assert_eq!(Half::parse(""), None);
    }

    #[test]
    fn test_breakdown_accessors_are_exclusive() {
        let detail = GameDetail {
            breakdown: PlayBreakdown::Innings(vec![Inning::new(1)]),
            ..Default::default()
        };
        assert_eq!(detail.innings().map(<[Inning]>::len), Some(1));
        assert!(detail.drives().is_none());

        let detail = GameDetail::default();
        assert!(detail.innings().is_none());
        assert!(detail.drives().is_none());
    }
}
