use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;

use crate::astrology::{chinese_zodiac_for, zodiac_for};
use crate::config::Config;
use crate::generator::FortuneEngine;
use crate::model::{FortuneResult, UserProfile};
use crate::numerology::life_path_number;

#[derive(Parser)]
#[command(name = "lucky", about = "Daily fortune reports, remote-generated or locally synthesized")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate today's full fortune report
    Report {
        /// User's name
        #[arg(short, long)]
        name: String,
        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: String,
        /// Optional 4-letter MBTI code
        #[arg(long)]
        mbti: Option<String>,
        /// AI provider (gemini/ollama); defaults to config
        #[arg(long)]
        provider: Option<String>,
        /// Model name override
        #[arg(long)]
        model: Option<String>,
        /// Report date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print the raw JSON report instead of the card view
        #[arg(long)]
        json: bool,
        /// Data directory override
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Show the zodiac signs for a birth date
    Zodiac {
        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: String,
    },
    /// Show the numerology life path number for a birth date
    LifePath {
        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: String,
    },
}

pub async fn handle_report(
    name: String,
    birth_date: String,
    mbti: Option<String>,
    provider: Option<String>,
    model: Option<String>,
    date: Option<String>,
    json: bool,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let config = Config::new(data_dir)?;
    let engine = FortuneEngine::new(config);
    let profile = UserProfile::new(name, birth_date, mbti);

    let report = match date {
        Some(date) => {
            let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| anyhow!("Invalid --date '{}': {}", date, e))?;
            engine.generate_for_date(&profile, day, provider, model).await
        }
        None => engine.generate(&profile, provider, model).await,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&profile, &report);
    }

    Ok(())
}

fn print_report(profile: &UserProfile, report: &FortuneResult) {
    println!("{}", format!("✨ {} 的幸运报告 ✨", profile.name).yellow().bold());
    if report.is_fallback {
        println!("{}", "(本地幸运引擎生成)".dimmed());
    }
    println!();

    println!("{} {}", "🌟 星座".cyan().bold(), report.zodiac.sign);
    println!("   {}", report.zodiac.lucky_trait);
    println!("   {}", report.zodiac.compliment);

    println!("{} {}", "🐉 生肖".cyan().bold(), report.chinese_zodiac.animal);
    println!("   {}", report.chinese_zodiac.secret_strength);
    println!("   {}", report.chinese_zodiac.compliment);

    println!("{}", "🔮 星盘解读".cyan().bold());
    println!("   {}", report.astral_chart.analysis);
    println!("   {} | {}", report.astral_chart.key_aspect, report.astral_chart.lucky_house);
    println!("   {}", report.astral_chart.planetary_influence);

    println!("{} {}", "🃏 塔罗".cyan().bold(), report.tarot.card_name);
    println!("   {} — {}", report.tarot.meaning, report.tarot.advice);

    println!("{} {}", "🧠 MBTI".cyan().bold(), report.mbti_analysis.mbti_type);
    println!("   超能力：{}", report.mbti_analysis.superpower);
    println!("   社交气场：{}", report.mbti_analysis.social_vibe);

    println!("{} {}", "⭐ 星宿".cyan().bold(), report.constellation.star_name);
    println!("   {}", report.constellation.guidance);

    println!("{}", "🍀 幸运三件套".cyan().bold());
    println!(
        "   颜色 {} | 数字 {} | 物品 {}",
        report.lucky_items.color, report.lucky_items.number, report.lucky_items.item
    );

    println!("{}", "💞 名人缘分".cyan().bold());
    for m in &report.celebrity_match {
        println!("   {} ({}) — {} [{}]", m.name.green(), m.desc, m.reason, m.romantic_vibe);
    }

    println!("{} {}", "🍜 幸运食物".cyan().bold(), report.lucky_food.food);
    println!("   {}", report.lucky_food.reason);

    println!("{} {}", "🏃 幸运行动".cyan().bold(), report.lucky_activity.action);
    println!("   {}", report.lucky_activity.benefit);

    println!(
        "{} {} ({})",
        "🦦 本命小动物".cyan().bold(),
        report.compatible_animal.animal,
        report.compatible_animal.trait_desc
    );
    println!("   {}", report.compatible_animal.reason);

    println!("{} {}", "🎬 今日电影".cyan().bold(), report.daily_movie.title);
    println!("   {}", report.daily_movie.reason);

    println!(
        "{} {} - {}",
        "🎵 今日音乐".cyan().bold(),
        report.daily_music.title,
        report.daily_music.artist
    );
    println!("   {}", report.daily_music.vibe);

    println!();
    println!("{}", format!("💫 {}", report.daily_affirmation).magenta());
}

pub fn handle_zodiac(birth_date: String) -> Result<()> {
    let profile = UserProfile::new("", birth_date, None);
    let (year, month, day) = profile.birth_components();
    let sign = zodiac_for(month, day);
    let animal = chinese_zodiac_for(year);

    println!("{}", "Zodiac".cyan().bold());
    println!("星座: {} — {}", sign, sign.lucky_trait());
    println!("生肖: {} — {}", animal, animal.secret_strength());
    Ok(())
}

pub fn handle_life_path(birth_date: String) -> Result<()> {
    let life_path = life_path_number(&birth_date);

    println!("{}", "Life Path".cyan().bold());
    println!("生命灵数: {}", life_path.display().yellow());
    println!("{}", life_path.meaning);
    Ok(())
}
