//! Predictive profiling demo: every click on the mini game produces data
//! points, and the profiler infers an engagement level, a click rhythm and
//! an age bracket from them.

use std::collections::VecDeque;

use qc_session::{Payload, TelemetrySink};
use serde::Serialize;

/// Telemetry records kept for display.
pub const TELEMETRY_HISTORY: usize = 10;

/// Bounds of the data points generated per click.
pub const MIN_DATA_PER_CLICK: u32 = 5;
pub const MAX_DATA_PER_CLICK: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Engagement {
    pub fn from_clicks(clicks: u32) -> Self {
        match clicks {
            c if c > 50 => Self::VeryHigh,
            c if c > 20 => Self::High,
            c if c > 5 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
            Self::VeryHigh => "Muito Alto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPattern {
    Frantic,
    Steady,
    Sporadic,
}

impl ClickPattern {
    /// Classify by the gap since the previous click.
    pub fn from_gap_ms(gap_ms: u64) -> Self {
        if gap_ms < 150 {
            Self::Frantic
        } else if gap_ms < 500 {
            Self::Steady
        } else {
            Self::Sporadic
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Frantic => "Frenético",
            Self::Steady => "Constante",
            Self::Sporadic => "Esporádico",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeBracket {
    #[serde(rename = "13-17")]
    Teen,
    #[serde(rename = "18-24")]
    YoungAdult,
    #[serde(rename = "25+")]
    Adult,
}

impl AgeBracket {
    pub fn infer(pattern: ClickPattern, engagement: Engagement) -> Self {
        match (pattern, engagement) {
            (ClickPattern::Frantic, Engagement::VeryHigh) => Self::Teen,
            (ClickPattern::Steady, _) => Self::YoungAdult,
            _ => Self::Adult,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Teen => "13-17",
            Self::YoungAdult => "18-24",
            Self::Adult => "25+",
        }
    }
}

/// One captured click, as shown in the telemetry panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoTelemetry {
    pub click: u32,
    pub generated_data: u32,
    pub time_since_last_ms: u64,
    pub pattern: ClickPattern,
}

#[derive(Debug, Clone, Default)]
pub struct EngagementProfiler {
    clicks: u32,
    data_points: u64,
    last_click_ms: Option<u64>,
    pattern: Option<ClickPattern>,
    history: VecDeque<DemoTelemetry>,
}

impl EngagementProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click at `now_ms` that produced `generated` data points.
    ///
    /// `generated` is clamped to the per-click bounds. The first click has
    /// no predecessor and counts as sporadic.
    pub fn click(
        &mut self,
        now_ms: u64,
        generated: u32,
        sink: &mut impl TelemetrySink,
    ) -> &DemoTelemetry {
        let generated = generated.clamp(MIN_DATA_PER_CLICK, MAX_DATA_PER_CLICK);
        let gap = self
            .last_click_ms
            .map_or(u64::MAX, |last| now_ms.saturating_sub(last));
        let pattern = ClickPattern::from_gap_ms(gap);

        self.clicks += 1;
        self.data_points += u64::from(generated);
        self.last_click_ms = Some(now_ms);
        self.pattern = Some(pattern);

        let time_since_last_ms = if gap == u64::MAX { 0 } else { gap };
        let mut payload = Payload::new();
        payload.insert("clicks".to_string(), self.clicks.into());
        payload.insert("generatedData".to_string(), generated.into());
        payload.insert("timeSinceLast_ms".to_string(), time_since_last_ms.into());
        sink.log_event("game_click", Some(payload));

        self.history.push_front(DemoTelemetry {
            click: self.clicks,
            generated_data: generated,
            time_since_last_ms,
            pattern,
        });
        self.history.truncate(TELEMETRY_HISTORY);
        &self.history[0]
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn data_points(&self) -> u64 {
        self.data_points
    }

    pub fn engagement(&self) -> Engagement {
        Engagement::from_clicks(self.clicks)
    }

    pub fn pattern(&self) -> Option<ClickPattern> {
        self.pattern
    }

    /// Inferred age bracket, available after the first click.
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        self.pattern
            .map(|pattern| AgeBracket::infer(pattern, self.engagement()))
    }

    /// Most recent first.
    pub fn history(&self) -> impl Iterator<Item = &DemoTelemetry> {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_session::EventLog;

    #[test]
    fn test_engagement_thresholds() {
        assert_eq!(Engagement::from_clicks(5), Engagement::Low);
        assert_eq!(Engagement::from_clicks(6), Engagement::Medium);
        assert_eq!(Engagement::from_clicks(21), Engagement::High);
        assert_eq!(Engagement::from_clicks(51), Engagement::VeryHigh);
    }

    #[test]
    fn test_click_pattern_boundaries() {
        assert_eq!(ClickPattern::from_gap_ms(149), ClickPattern::Frantic);
        assert_eq!(ClickPattern::from_gap_ms(150), ClickPattern::Steady);
        assert_eq!(ClickPattern::from_gap_ms(499), ClickPattern::Steady);
        assert_eq!(ClickPattern::from_gap_ms(500), ClickPattern::Sporadic);
    }

    #[test]
    fn test_frantic_heavy_player_reads_as_teen() {
        let mut log = EventLog::with_capacity(100);
        let mut profiler = EngagementProfiler::new();
        for i in 0..51u64 {
            profiler.click(i * 100, 8, &mut log);
        }
        assert_eq!(profiler.engagement(), Engagement::VeryHigh);
        assert_eq!(profiler.pattern(), Some(ClickPattern::Frantic));
        assert_eq!(profiler.age_bracket(), Some(AgeBracket::Teen));
        assert_eq!(profiler.data_points(), 51 * 8);
        assert_eq!(profiler.history().count(), TELEMETRY_HISTORY);
        assert_eq!(log.len(), 51);
    }

    #[test]
    fn test_generated_data_is_clamped() {
        let mut log = EventLog::new();
        let mut profiler = EngagementProfiler::new();
        assert_eq!(profiler.click(0, 0, &mut log).generated_data, 5);
        assert_eq!(profiler.click(300, 99, &mut log).generated_data, 14);

        let latest = log.latest().unwrap().payload.as_ref().unwrap();
        assert_eq!(latest["clicks"], 2);
        assert_eq!(latest["timeSinceLast_ms"], 300);
        assert_eq!(profiler.age_bracket(), Some(AgeBracket::YoungAdult));
    }

    #[test]
    fn test_first_click_is_sporadic() {
        let mut log = EventLog::new();
        let mut profiler = EngagementProfiler::new();
        assert_eq!(profiler.age_bracket(), None);
        let first = profiler.click(10_000, 7, &mut log).clone();
        assert_eq!(first.pattern, ClickPattern::Sporadic);
        assert_eq!(first.time_since_last_ms, 0);
        assert_eq!(profiler.age_bracket(), Some(AgeBracket::Adult));
    }
}
