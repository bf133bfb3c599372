use chrono::NaiveDate;

use crate::astrology::{chinese_zodiac_for, zodiac_for, ZodiacSign};
use crate::model::*;
use crate::numerology::life_path_number;
use crate::pools;
use crate::rng::SeededRng;
use crate::select::{pick, pick_distinct};

/// Seed key for one (user, day) pair. Day granularity keeps the fortune
/// stable across refreshes within the same calendar day.
fn build_seed(today: NaiveDate, name: &str, sign: ZodiacSign) -> String {
    format!("{}-{}-{}", today.format("%Y-%m-%d"), name, sign)
}

/// Likely MBTI type for a sign, used when the profile doesn't carry one.
fn inferred_mbti(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "ESTP",
        ZodiacSign::Taurus => "ISFJ",
        ZodiacSign::Gemini => "ENTP",
        ZodiacSign::Cancer => "INFJ",
        ZodiacSign::Leo => "ENFJ",
        ZodiacSign::Virgo => "ISTJ",
        ZodiacSign::Libra => "ESFJ",
        ZodiacSign::Scorpio => "INTJ",
        ZodiacSign::Sagittarius => "ENFP",
        ZodiacSign::Capricorn => "ESTJ",
        ZodiacSign::Aquarius => "INTP",
        ZodiacSign::Pisces => "INFP",
    }
}

fn mbti_analysis(profile: &UserProfile, sign: ZodiacSign) -> MbtiAnalysis {
    let declared = profile.mbti.as_deref().map(|code| code.trim().to_uppercase());
    let code = declared
        .filter(|c| pools::MBTI_PROFILES.iter().any(|p| p.code == c.as_str()))
        .unwrap_or_else(|| inferred_mbti(sign).to_string());

    // The filter above guarantees a table hit for declared codes, and the
    // inference map only emits table codes.
    let profile_entry = pools::MBTI_PROFILES
        .iter()
        .find(|p| p.code == code)
        .unwrap_or(&pools::MBTI_PROFILES[0]);

    MbtiAnalysis {
        mbti_type: code,
        superpower: profile_entry.superpower.to_string(),
        social_vibe: profile_entry.social_vibe.to_string(),
    }
}

/// Astral chart text is deterministic boilerplate in the local engine; only
/// the remote generator personalizes it beyond name and sign.
fn astral_chart(name: &str, sign: ZodiacSign) -> AstralChart {
    AstralChart {
        analysis: format!(
            "{}，你的星盘显示，此刻木星正温柔地驻留在{}守护的第五宫（创造与快乐之宫），\
             为你带来源源不断的灵感与好运。无论是表达自我还是享受生活，\
             现在都是宇宙为你开绿灯的最佳时刻。",
            name, sign
        ),
        planetary_influence: "金星正在为你加持魅力".to_string(),
        key_aspect: "木星拱太阳 (Jupiter Trine Sun)".to_string(),
        lucky_house: "第五宫-创造宫".to_string(),
    }
}

/// Deterministic local synthesis. One rng, one fixed draw order, so a single
/// seed yields the whole report. Cannot fail for a well-formed profile.
pub fn synthesize_local(profile: &UserProfile, today: NaiveDate) -> FortuneResult {
    let (year, month, day) = profile.birth_components();
    let sign = zodiac_for(month, day);
    let animal = chinese_zodiac_for(year);
    let life_path = life_path_number(&profile.birth_date);

    let seed = build_seed(today, &profile.name, sign);
    let mut rng = SeededRng::new(&seed);

    // Draw order is part of the contract: changing it reshuffles everyone's
    // fortune for the day.
    let tarot = pick(pools::TAROT, &mut rng);
    let mansion = pick(pools::LUNAR_MANSIONS, &mut rng);
    let food = pick(pools::FOODS, &mut rng);
    let activity = pick(pools::ACTIVITIES, &mut rng);
    let movie = pick(pools::MOVIES, &mut rng);
    let music = pick(pools::MUSIC, &mut rng);
    let color = pick(pools::COLORS, &mut rng);
    let object = pick(pools::OBJECTS, &mut rng);
    let animal_match = pick(pools::ANIMALS, &mut rng);
    let celebrities = pick_distinct(pools::CELEBRITIES, 5, &mut rng)
        .expect("celebrity pool holds at least 5 entries");
    let affirmation = pick(pools::AFFIRMATIONS, &mut rng);

    FortuneResult {
        zodiac: ZodiacReport {
            sign: sign.to_string(),
            lucky_trait: sign.lucky_trait().to_string(),
            compliment: sign.compliment().to_string(),
        },
        astral_chart: astral_chart(&profile.name, sign),
        chinese_zodiac: ChineseZodiacReport {
            animal: animal.to_string(),
            secret_strength: animal.secret_strength().to_string(),
            compliment: animal.compliment().to_string(),
        },
        tarot: TarotReport {
            card_name: tarot.name.to_string(),
            meaning: tarot.meaning.to_string(),
            advice: tarot.advice.to_string(),
        },
        mbti_analysis: mbti_analysis(profile, sign),
        constellation: Constellation {
            star_name: mansion.name.to_string(),
            guidance: mansion.guidance.to_string(),
        },
        lucky_items: LuckyItems {
            color: color.to_string(),
            // Numerology is authoritative here; this is never drawn from a pool.
            number: life_path.display(),
            item: object.to_string(),
        },
        celebrity_match: celebrities
            .into_iter()
            .map(|c| CelebrityMatch {
                name: c.name.to_string(),
                desc: c.desc.to_string(),
                reason: c.reason.to_string(),
                romantic_vibe: c.romantic_vibe.to_string(),
            })
            .collect(),
        lucky_food: LuckyFood {
            food: food.food.to_string(),
            reason: food.reason.to_string(),
        },
        lucky_activity: LuckyActivity {
            action: activity.action.to_string(),
            benefit: activity.benefit.to_string(),
        },
        compatible_animal: CompatibleAnimal {
            animal: animal_match.animal.to_string(),
            trait_desc: animal_match.trait_desc.to_string(),
            reason: animal_match.reason.to_string(),
        },
        daily_movie: DailyMovie {
            title: movie.title.to_string(),
            reason: movie.reason.to_string(),
        },
        daily_music: DailyMusic {
            title: music.title.to_string(),
            artist: music.artist.to_string(),
            vibe: music.vibe.to_string(),
        },
        daily_affirmation: affirmation.to_string(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("小明", "1990-01-28", None)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_same_fortune() {
        let today = day(2025, 6, 1);
        let a = synthesize_local(&profile(), today);
        let b = synthesize_local(&profile(), today);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_with_date() {
        let sign = zodiac_for(1, 28);
        let a = build_seed(day(2025, 6, 1), "小明", sign);
        let b = build_seed(day(2025, 6, 2), "小明", sign);
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_changes_with_name() {
        let sign = zodiac_for(1, 28);
        let a = build_seed(day(2025, 6, 1), "小明", sign);
        let b = build_seed(day(2025, 6, 1), "小红", sign);
        assert_ne!(a, b);
    }

    #[test]
    fn test_five_distinct_celebrities() {
        let result = synthesize_local(&profile(), day(2025, 6, 1));
        assert_eq!(result.celebrity_match.len(), 5);
        for i in 0..5 {
            for j in (i + 1)..5 {
                assert_ne!(result.celebrity_match[i].name, result.celebrity_match[j].name);
            }
        }
    }

    #[test]
    fn test_lucky_number_is_life_path() {
        let result = synthesize_local(&profile(), day(2025, 6, 1));
        // 1990-01-28 reduces to 3
        assert_eq!(result.lucky_items.number, "3");
    }

    #[test]
    fn test_marked_as_fallback() {
        let result = synthesize_local(&profile(), day(2025, 6, 1));
        assert!(result.is_fallback);
    }

    #[test]
    fn test_zodiac_fields_populated() {
        let result = synthesize_local(&profile(), day(2025, 6, 1));
        assert_eq!(result.zodiac.sign, "水瓶座");
        assert_eq!(result.chinese_zodiac.animal, "马");
        assert!(result.astral_chart.analysis.contains("小明"));
        assert!(result.astral_chart.analysis.contains("水瓶座"));
    }

    #[test]
    fn test_declared_mbti_wins() {
        let p = UserProfile::new("小明", "1990-01-28", Some("infj".to_string()));
        let result = synthesize_local(&p, day(2025, 6, 1));
        assert_eq!(result.mbti_analysis.mbti_type, "INFJ");
    }

    #[test]
    fn test_unknown_mbti_falls_back_to_inferred() {
        let p = UserProfile::new("小明", "1990-01-28", Some("ZZZZ".to_string()));
        let result = synthesize_local(&p, day(2025, 6, 1));
        // Aquarius infers INTP
        assert_eq!(result.mbti_analysis.mbti_type, "INTP");
    }
}
