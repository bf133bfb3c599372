use serde::{Deserialize, Serialize};

/// Profile captured once by the intake flow and consumed read-only here.
/// Validation (non-empty name, real calendar date) is the intake flow's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// "YYYY-MM-DD"
    pub birth_date: String,
    /// Optional 4-letter MBTI code
    pub mbti: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>, mbti: Option<String>) -> Self {
        UserProfile {
            name: name.into(),
            birth_date: birth_date.into(),
            mbti,
        }
    }

    /// Best-effort (year, month, day) from the birth date string. A broken
    /// date yields defined-but-meaningless components instead of an error.
    pub fn birth_components(&self) -> (i32, u32, u32) {
        let mut parts = self.birth_date.split('-');
        let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let month = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1);
        let day = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1);
        (year, month, day)
    }
}

// The report structs below serialize with the camelCase field names of the
// remote structured-response schema, so one shape serves both the remote
// parse and the local synthesis.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacReport {
    pub sign: String,
    pub lucky_trait: String,
    pub compliment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstralChart {
    pub analysis: String,
    pub planetary_influence: String,
    pub key_aspect: String,
    pub lucky_house: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChineseZodiacReport {
    pub animal: String,
    pub secret_strength: String,
    pub compliment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotReport {
    pub card_name: String,
    pub meaning: String,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiAnalysis {
    #[serde(rename = "type")]
    pub mbti_type: String,
    pub superpower: String,
    pub social_vibe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constellation {
    pub star_name: String,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyItems {
    pub color: String,
    pub number: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityMatch {
    pub name: String,
    pub desc: String,
    pub reason: String,
    pub romantic_vibe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyFood {
    pub food: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyActivity {
    pub action: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibleAnimal {
    pub animal: String,
    #[serde(rename = "trait")]
    pub trait_desc: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMovie {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMusic {
    pub title: String,
    pub artist: String,
    pub vibe: String,
}

/// Complete fortune report. Built once per generate action and never mutated
/// afterwards; re-renders reuse the cached instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub zodiac: ZodiacReport,
    pub astral_chart: AstralChart,
    pub chinese_zodiac: ChineseZodiacReport,
    pub tarot: TarotReport,
    pub mbti_analysis: MbtiAnalysis,
    pub constellation: Constellation,
    pub lucky_items: LuckyItems,
    pub celebrity_match: Vec<CelebrityMatch>,
    pub lucky_food: LuckyFood,
    pub lucky_activity: LuckyActivity,
    pub compatible_animal: CompatibleAnimal,
    pub daily_movie: DailyMovie,
    pub daily_music: DailyMusic,
    pub daily_affirmation: String,
    /// true when the content came from the local deterministic engine.
    /// The remote response doesn't carry this field, so it defaults off.
    #[serde(default)]
    pub is_fallback: bool,
}
