use chrono::{Local, NaiveDate};

use crate::ai_provider::AIProviderClient;
use crate::astrology::{chinese_zodiac_for, zodiac_for};
use crate::config::Config;
use crate::error::FortuneError;
use crate::model::{ChineseZodiacReport, FortuneResult, UserProfile, ZodiacReport};
use crate::numerology::life_path_number;
use crate::synthesizer::synthesize_local;

/// Orchestrates remote generation and the deterministic local fallback.
/// This boundary never surfaces an error to the caller: every failure mode
/// resolves into a locally synthesized report.
pub struct FortuneEngine {
    config: Config,
}

impl FortuneEngine {
    pub fn new(config: Config) -> Self {
        FortuneEngine { config }
    }

    pub async fn generate(
        &self,
        profile: &UserProfile,
        provider: Option<String>,
        model: Option<String>,
    ) -> FortuneResult {
        let today = Local::now().date_naive();
        self.generate_for_date(profile, today, provider, model).await
    }

    /// Remote path when a usable provider is configured, otherwise straight
    /// to local synthesis with no network attempt. The remote call is made
    /// exactly once; there is no retry.
    pub async fn generate_for_date(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
        provider: Option<String>,
        model: Option<String>,
    ) -> FortuneResult {
        match self.config.get_ai_config(provider, model) {
            None => synthesize_local(profile, today),
            Some(ai_config) => {
                let client = AIProviderClient::new(ai_config);
                let outcome = client
                    .generate_fortune(profile)
                    .await
                    .map_err(|e| FortuneError::RemoteUnavailable(e.to_string()));
                resolve_remote_outcome(profile, today, outcome)
            }
        }
    }
}

/// Merge policy for a completed remote attempt.
///
/// The locally computed zodiac, Chinese zodiac, and life path number are
/// always authoritative; remote text is never trusted for these three
/// deterministic facts. A failed attempt is absorbed into local synthesis.
pub fn resolve_remote_outcome(
    profile: &UserProfile,
    today: NaiveDate,
    outcome: Result<FortuneResult, FortuneError>,
) -> FortuneResult {
    match outcome {
        Ok(mut report) => {
            let (year, month, day) = profile.birth_components();
            let sign = zodiac_for(month, day);
            let animal = chinese_zodiac_for(year);
            let life_path = life_path_number(&profile.birth_date);

            report.zodiac = ZodiacReport {
                sign: sign.to_string(),
                lucky_trait: sign.lucky_trait().to_string(),
                compliment: sign.compliment().to_string(),
            };
            report.chinese_zodiac = ChineseZodiacReport {
                animal: animal.to_string(),
                secret_strength: animal.secret_strength().to_string(),
                compliment: animal.compliment().to_string(),
            };
            report.lucky_items.number = life_path.display();
            report.is_fallback = false;
            report
        }
        Err(_) => synthesize_local(profile, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("小明", "1990-01-28", None)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn remote_report_with_wrong_facts() -> FortuneResult {
        let mut report = synthesize_local(&profile(), day());
        report.zodiac.sign = "狮子座".to_string();
        report.chinese_zodiac.animal = "龙".to_string();
        report.lucky_items.number = "99".to_string();
        report.is_fallback = false;
        report
    }

    #[test]
    fn test_local_facts_override_remote() {
        let result = resolve_remote_outcome(&profile(), day(), Ok(remote_report_with_wrong_facts()));

        // 1990-01-28 is Aquarius / Horse / life path 3, whatever the remote said.
        assert_eq!(result.zodiac.sign, "水瓶座");
        assert_eq!(result.chinese_zodiac.animal, "马");
        assert_eq!(result.lucky_items.number, "3");
        assert!(!result.is_fallback);
    }

    #[test]
    fn test_remote_failure_falls_back_locally() {
        let outcome = Err(FortuneError::RemoteUnavailable("network down".to_string()));
        let result = resolve_remote_outcome(&profile(), day(), outcome);

        assert!(result.is_fallback);
        assert_eq!(result, synthesize_local(&profile(), day()));
    }

    #[test]
    fn test_malformed_remote_body_falls_back() {
        // A body missing required fields fails the strict parse upstream;
        // the engine sees that as an Err outcome.
        let parse: Result<FortuneResult, _> = serde_json::from_str("{\"zodiac\":{}}");
        assert!(parse.is_err());

        let outcome = Err(FortuneError::RemoteUnavailable("parse failed".to_string()));
        let result = resolve_remote_outcome(&profile(), day(), outcome);
        assert!(result.is_fallback);
    }

    #[tokio::test]
    async fn test_no_provider_means_local_only() {
        let mut config = Config::new(Some(std::env::temp_dir().join("lucky-engine-test"))).unwrap();
        config.providers.get_mut("gemini").unwrap().api_key = None;

        let engine = FortuneEngine::new(config);
        let result = engine
            .generate_for_date(&profile(), day(), Some("gemini".to_string()), None)
            .await;

        assert!(result.is_fallback);
    }
}
