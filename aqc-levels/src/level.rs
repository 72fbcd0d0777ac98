use serde::Serialize;

/// One entry in the ordered pollution severity scale.
///
/// Ranks run 1..=6 from Good to Hazardous. The color and CSS class fields
/// are presentation metadata consumed by the chart UI; the aggregation
/// logic only ever reads `rank` and `name`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutionLevel {
    pub rank: u32,
    pub name: &'static str,
    /// Hex color used by the calendar heatmap scale.
    pub color: &'static str,
    pub text_class: &'static str,
    pub bg_class: &'static str,
    pub description: &'static str,
}

/// The full severity scale, in ascending rank order.
pub static LEVELS: [PollutionLevel; 6] = [
    PollutionLevel {
        rank: 1,
        name: "Good",
        color: "#3be72cff",
        text_class: "text-green-500",
        bg_class: "bg-green-500",
        description:
            "Air quality is considered satisfactory, and air pollution poses little or no risk.",
    },
    PollutionLevel {
        rank: 2,
        name: "Satisfactory",
        color: "#83cb43ff",
        text_class: "text-green-400",
        bg_class: "bg-green-400",
        description: "Air quality is acceptable for most people. However, sensitive people may \
                      experience minor respiratory symptoms.",
    },
    PollutionLevel {
        rank: 3,
        name: "Poor",
        color: "#debc4aff",
        text_class: "text-yellow-500",
        bg_class: "bg-yellow-500",
        description: "Members of sensitive groups may experience health effects. The general \
                      public is not likely to be affected.",
    },
    PollutionLevel {
        rank: 4,
        name: "Moderate",
        color: "#e97a25ff",
        text_class: "text-orange-500",
        bg_class: "bg-orange-500",
        description: "Everyone may begin to experience health effects; members of sensitive \
                      groups may experience more serious health effects.",
    },
    PollutionLevel {
        rank: 5,
        name: "Severe",
        color: "#cf1b1b",
        text_class: "text-red-500",
        bg_class: "bg-red-500",
        description: "Health warnings of emergency conditions. The entire population is more \
                      likely to be affected.",
    },
    PollutionLevel {
        rank: 6,
        name: "Hazardous",
        color: "#880000",
        text_class: "text-red-800",
        bg_class: "bg-red-800",
        description: "Health alert: everyone may experience more serious health effects.",
    },
];

/// Gray used by the heatmap for dates with no data.
pub const NO_DATA_COLOR: &str = "#e5e7eb";

/// Look up the severity level for a numeric score.
///
/// Total over all of `f64`: a score at or below a rank boundary belongs to
/// that level, scores below 1 clamp to Good, scores above 6 clamp to
/// Hazardous. Non-finite input (NaN, infinities) maps to Good; NaN fails
/// every `<=` comparison, so it is handled explicitly rather than falling
/// through to Hazardous.
pub fn level_by_score(score: f64) -> &'static PollutionLevel {
    if !score.is_finite() {
        return &LEVELS[0];
    }
    for level in LEVELS.iter().take(LEVELS.len() - 1) {
        if score <= level.rank as f64 {
            return level;
        }
    }
    &LEVELS[LEVELS.len() - 1]
}

/// Look up a severity level by name, case-insensitively.
///
/// Returns `None` for unrecognized labels; names arrive from external
/// payloads, so a miss is an expected outcome rather than an error.
pub fn level_by_name(name: &str) -> Option<&'static PollutionLevel> {
    LEVELS.iter().find(|level| level.name.eq_ignore_ascii_case(name))
}

/// Color range for the calendar heatmap: no-data gray followed by the six
/// level colors in rank order.
pub fn color_range() -> [&'static str; 7] {
    [
        NO_DATA_COLOR,
        LEVELS[0].color,
        LEVELS[1].color,
        LEVELS[2].color,
        LEVELS[3].color,
        LEVELS[4].color,
        LEVELS[5].color,
    ]
}

/// Threshold domain matching `color_range` for the heatmap's discrete scale.
pub fn thresholds() -> [u32; 7] {
    [1, 2, 3, 4, 5, 6, 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_contiguous_from_one() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.rank, i as u32 + 1);
        }
    }

    #[test]
    fn test_level_by_score_boundaries() {
        assert_eq!(level_by_score(1.0).name, "Good");
        assert_eq!(level_by_score(1.5).name, "Satisfactory");
        assert_eq!(level_by_score(2.0).name, "Satisfactory");
        assert_eq!(level_by_score(4.0).name, "Moderate");
        assert_eq!(level_by_score(5.0).name, "Severe");
        assert_eq!(level_by_score(6.0).name, "Hazardous");
        assert_eq!(level_by_score(6.5).name, "Hazardous");
    }

    #[test]
    fn test_level_by_score_clamps_out_of_range() {
        assert_eq!(level_by_score(-5.0).name, "Good");
        assert_eq!(level_by_score(0.0).name, "Good");
        assert_eq!(level_by_score(100.0).name, "Hazardous");
    }

    #[test]
    fn test_level_by_score_non_finite_maps_to_good() {
        assert_eq!(level_by_score(f64::NAN).name, "Good");
        assert_eq!(level_by_score(f64::INFINITY).name, "Good");
        assert_eq!(level_by_score(f64::NEG_INFINITY).name, "Good");
    }

    #[test]
    fn test_level_by_score_is_monotonic() {
        let mut previous = 0;
        let mut score = -2.0;
        while score <= 8.0 {
            let rank = level_by_score(score).rank;
            assert!(rank >= previous, "rank decreased at score {}", score);
            previous = rank;
            score += 0.25;
        }
    }

    #[test]
    fn test_level_by_name_is_case_insensitive() {
        assert_eq!(level_by_name("good"), level_by_name("GOOD"));
        assert_eq!(level_by_name("GOOD"), level_by_name("Good"));
        assert_eq!(level_by_name("hAzArDoUs").unwrap().rank, 6);
    }

    #[test]
    fn test_level_by_name_miss() {
        assert!(level_by_name("unknown-label").is_none());
        assert!(level_by_name("").is_none());
    }

    #[test]
    fn test_color_range_and_thresholds_align() {
        let colors = color_range();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0], NO_DATA_COLOR);
        assert_eq!(colors[6], LEVELS[5].color);
        assert_eq!(thresholds().len(), 7);
    }
}
