use crate::cli::types::{ElementId, EntryId, FixtureId, Gameweek, LeagueId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Statistic identifier the upstream API uses for bonus points
pub const BONUS_IDENTIFIER: &str = "bonus";
/// Statistic identifier for the raw Bonus Points System score
pub const BPS_IDENTIFIER: &str = "bps";
/// Statistic identifier for minutes played
pub const MINUTES_IDENTIFIER: &str = "minutes";

/// Chip played by a manager for one gameweek.
///
/// Only bench boost and triple captain change scoring; the others are
/// carried through for display. Unrecognised chip names deserialize as
/// `Other` so a new chip never breaks the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chip {
    #[serde(rename = "bboost")]
    BenchBoost,
    #[serde(rename = "3xc")]
    TripleCaptain,
    #[serde(rename = "wildcard")]
    Wildcard,
    #[serde(rename = "freehit")]
    FreeHit,
    #[serde(rename = "manager")]
    AssistantManager,
    #[serde(rename = "other", other)]
    Other,
}

impl Chip {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chip::BenchBoost => "bboost",
            Chip::TripleCaptain => "3xc",
            Chip::Wildcard => "wildcard",
            Chip::FreeHit => "freehit",
            Chip::AssistantManager => "manager",
            Chip::Other => "other",
        }
    }

    /// Human readable chip name for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Chip::BenchBoost => "Bench Boost",
            Chip::TripleCaptain => "Triple Captain",
            Chip::Wildcard => "Wildcard",
            Chip::FreeHit => "Free Hit",
            Chip::AssistantManager => "Assistant Manager",
            Chip::Other => "Other",
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Participation state of a player in one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    NotStarted,
    Playing,
    Substitute,
    Played,
    Unknown,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::NotStarted => "NOT_STARTED",
            MatchStatus::Playing => "PLAYING",
            MatchStatus::Substitute => "SUBSTITUTE",
            MatchStatus::Played => "PLAYED",
            MatchStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// bootstrap-static
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub deadline_time: Option<String>,
}

/// Player data from the bootstrap snapshot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub web_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    pub team: TeamId,
    /// 1 = GKP, 2 = DEF, 3 = MID, 4 = FWD
    pub element_type: u8,
    /// Price in tenths of a million
    #[serde(default)]
    pub now_cost: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Bootstrap {
    /// The gameweek flagged `is_current`, if the season has started.
    pub fn current_event(&self) -> Option<Gameweek> {
        self.events.iter().find(|e| e.is_current).map(|e| e.id)
    }

    /// Current gameweek, falling back to gameweek 1 before the season starts.
    pub fn current_gameweek(&self) -> Gameweek {
        self.current_event().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatValue {
    pub element: ElementId,
    pub value: i32,
}

/// One statistic of a fixture, split by home (`h`) and away (`a`) side
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureStat {
    pub identifier: String,
    #[serde(default)]
    pub a: Vec<StatValue>,
    #[serde(default)]
    pub h: Vec<StatValue>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: FixtureId,
    #[serde(default)]
    pub event: Option<Gameweek>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub team_h_score: Option<u8>,
    #[serde(default)]
    pub team_a_score: Option<u8>,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub started: Option<bool>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub finished_provisional: bool,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub stats: Vec<FixtureStat>,
}

impl Fixture {
    /// Look a statistic up by identifier (e.g. `"bps"`).
    pub fn stat(&self, identifier: &str) -> Option<&FixtureStat> {
        self.stats.iter().find(|s| s.identifier == identifier)
    }
}

// ---------------------------------------------------------------------------
// event/{gw}/live
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LiveStats {
    pub minutes: u32,
    pub goals_scored: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub own_goals: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub saves: i32,
    pub bonus: i32,
    pub bps: i32,
    pub total_points: i32,
    pub in_dreamteam: bool,
}

/// One `{identifier, points, value}` line of a fixture breakdown
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExplainStat {
    pub identifier: String,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub points_modification: i32,
}

/// How a player's points for one fixture were derived
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExplainEntry {
    pub fixture: FixtureId,
    #[serde(default)]
    pub stats: Vec<ExplainStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_status: Option<MatchStatus>,
}

impl ExplainEntry {
    pub fn stat(&self, identifier: &str) -> Option<&ExplainStat> {
        self.stats.iter().find(|s| s.identifier == identifier)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveElement {
    pub id: ElementId,
    #[serde(default)]
    pub stats: LiveStats,
    #[serde(default)]
    pub explain: Vec<ExplainEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LiveEvent {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

// ---------------------------------------------------------------------------
// entry/{id}/event/{gw}/picks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pick {
    pub element: ElementId,
    /// 1-11 starting XI, 12-15 bench in substitution order
    pub position: u8,
    /// 0 benched, 1 normal, 2 captain, 3 triple captain
    pub multiplier: u8,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl Pick {
    pub fn is_starter(&self) -> bool {
        self.position <= 11
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EntryHistory {
    pub event: Option<Gameweek>,
    pub points: i32,
    pub total_points: i32,
    /// Money in the bank, tenths of a million
    pub bank: i32,
    /// Squad value, tenths of a million
    pub value: i32,
    pub event_transfers: u32,
    pub event_transfers_cost: i32,
    pub points_on_bench: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PicksData {
    #[serde(default)]
    pub active_chip: Option<Chip>,
    #[serde(default)]
    pub entry_history: EntryHistory,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

// ---------------------------------------------------------------------------
// leagues-classic/{id}/standings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingRow {
    #[serde(default)]
    pub id: u64,
    pub entry: EntryId,
    pub rank: u32,
    #[serde(default)]
    pub last_rank: u32,
    pub player_name: String,
    pub entry_name: String,
    #[serde(default)]
    pub event_total: i32,
    pub total: i32,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Standings {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<StandingRow>,
}

/// Top-level envelope for one standings page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsPage {
    pub league: LeagueInfo,
    pub standings: Standings,
}

// ---------------------------------------------------------------------------
// entry/{id}/transfers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transfer {
    pub element_in: ElementId,
    pub element_out: ElementId,
    #[serde(default)]
    pub element_in_cost: i32,
    #[serde(default)]
    pub element_out_cost: i32,
    #[serde(default)]
    pub entry: Option<EntryId>,
    pub event: Gameweek,
    #[serde(default)]
    pub time: Option<String>,
}

// ---------------------------------------------------------------------------
// entry/{id}
// ---------------------------------------------------------------------------

/// Manager summary, used when scoring a single entry outside a league
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntrySummary {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub summary_overall_points: i32,
    #[serde(default)]
    pub summary_overall_rank: Option<u32>,
}

impl EntrySummary {
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
            .trim()
            .to_string()
    }

    /// The summary shaped like a league standings row.
    pub fn to_standing_row(&self) -> StandingRow {
        StandingRow {
            id: self.id.as_u64(),
            entry: self.id,
            rank: self.summary_overall_rank.unwrap_or(0),
            last_rank: 0,
            player_name: self.manager_name(),
            entry_name: self.name.clone(),
            event_total: 0,
            total: self.summary_overall_points,
        }
    }
}

// ---------------------------------------------------------------------------
// Computed output
// ---------------------------------------------------------------------------

/// A pick joined with its player identity and merged, scored explain.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPick {
    pub element: ElementId,
    pub name: Option<String>,
    pub team: Option<String>,
    pub element_type: Option<u8>,
    pub position: u8,
    pub multiplier: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub minutes: u32,
    /// Player total before the multiplier, bonus included
    pub points: i32,
    pub bonus: i32,
    pub explain: Vec<ExplainEntry>,
}

impl ScoredPick {
    pub fn is_starter(&self) -> bool {
        self.position <= 11
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayedInfo {
    pub played: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferNames {
    pub element_in_name: Option<String>,
    pub element_out_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryHistorySummary {
    pub transfer_cost: i32,
    pub bank: i32,
    pub value: i32,
}

/// One manager's row after live scoring
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEntry {
    pub rank: u32,
    pub manager: String,
    pub team_name: String,
    pub total_point: i32,
    pub entry: EntryId,
    pub gw_point: i32,
    /// Squad display names in pick order
    pub team: Vec<String>,
    pub played_info: PlayedInfo,
    pub transfers: Vec<TransferNames>,
    pub active_chip: Option<Chip>,
    pub entry_history: EntryHistorySummary,
    pub picks: Vec<ScoredPick>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStandings {
    pub entries: Vec<LiveEntry>,
    pub league_name: String,
    #[serde(rename = "currentGW")]
    pub current_gw: Gameweek,
}

/// Provisional bonus awarded to one player in one fixture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusAward {
    pub element: ElementId,
    pub name: Option<String>,
    pub bps: i32,
    pub bonus: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixtureBonus {
    pub fixture: FixtureId,
    pub home: Option<String>,
    pub away: Option<String>,
    pub minutes: u32,
    pub finished_provisional: bool,
    pub awards: Vec<BonusAward>,
}
