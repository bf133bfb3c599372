use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::model::{FortuneResult, UserProfile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AIProvider {
    Gemini,
    Ollama,
}

impl std::fmt::Display for AIProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AIProvider::Gemini => write!(f, "gemini"),
            AIProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for AIProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(AIProvider::Gemini),
            "ollama" => Ok(AIProvider::Ollama),
            _ => Err(anyhow!("Unknown AI provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub provider: AIProvider,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            provider: AIProvider::Gemini,
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

const SYSTEM_INSTRUCTION: &str = "你是幸运点点App的「幸运引擎」。你必须扮演专业的占星师与幸运预言家，\
根据用户的出生日期精确推算太阳星座和生肖，绝不能随机猜测。\
规则：1. 绝无负面内容，没有警告，没有坏运气。2. 语气可爱、温暖、支持，像最好的朋友。\
3. 全部使用简体中文。4. 如果用户没有提供MBTI，根据星座特质推断一个。\
5. 一切都解读为幸运点，困难相位也要解读为成长机会或隐藏优势。\
6. 电影与音乐推荐要契合星座气质。7. 幸运食物建议平衡其元素属性。\
8. 幸运行动必须简单、免费、不消费。9. celebrityMatch必须生成5个不同的匹配对象。\
10. astralChart必须提到真实的占星相位（如太阳拱木星）和宫位，并解释这种能量如何赋能用户。\
输出必须是严格符合给定结构的JSON对象。";

/// Remote generation adapter. One structured-JSON generation call; the
/// caller decides what to do with the outcome.
pub struct AIProviderClient {
    config: AIConfig,
    http_client: reqwest::Client,
}

impl AIProviderClient {
    pub fn new(config: AIConfig) -> Self {
        AIProviderClient {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Exactly one generation attempt; no retry lives here.
    pub async fn generate_fortune(&self, profile: &UserProfile) -> Result<FortuneResult> {
        let prompt = build_prompt(profile);
        let text = match self.config.provider {
            AIProvider::Gemini => self.generate_gemini(&prompt).await?,
            AIProvider::Ollama => self.generate_ollama(&prompt).await?,
        };

        // Any missing or malformed field fails the whole parse, which the
        // engine turns into a full local fallback. No per-field patching.
        let report: FortuneResult = serde_json::from_str(strip_code_fence(&text))
            .map_err(|e| anyhow!("Malformed remote fortune response: {}", e))?;

        Ok(report)
    }

    async fn generate_gemini(&self, prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.as_ref()
            .ok_or_else(|| anyhow!("Gemini API key required"))?;

        let default_url = "https://generativelanguage.googleapis.com".to_string();
        let base_url = self.config.base_url.as_ref().unwrap_or(&default_url);

        let request_body = serde_json::json!({
            "system_instruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "response_mime_type": "application/json"
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base_url, self.config.model, api_key
        );
        let response = self.http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("Gemini API error: {}", error_text));
        }

        let response_json: serde_json::Value = response.json().await?;

        let content = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Invalid Gemini response format"))?
            .to_string();

        Ok(content)
    }

    async fn generate_ollama(&self, prompt: &str) -> Result<String> {
        let default_url = "http://localhost:11434".to_string();
        let base_url = self.config.base_url.as_ref().unwrap_or(&default_url);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt }
            ],
            "stream": false,
            "format": "json"
        });

        let url = format!("{}/api/chat", base_url);
        let response = self.http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("Ollama API error: {}", error_text));
        }

        let response_json: serde_json::Value = response.json().await?;

        let content = response_json["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Invalid Ollama response format"))?
            .to_string();

        Ok(content)
    }
}

fn build_prompt(profile: &UserProfile) -> String {
    format!(
        "用户资料：\n姓名：{}\n生日：{}\nMBTI：{}\n\n任务：\n\
         1. 首先根据生日精确判断太阳星座与生肖。\n\
         2. 分析今天的星象能量与这位用户的互动。\n\
         3. 生成一个完整的正能量解析JSON对象。\n\
         注意：celebrityMatch字段必须是包含5个不同对象的数组；\
         astralChart中必须给出keyAspect（如「太阳拱木星」）和luckyHouse（如「第五宫-真爱宫」）。",
        profile.name,
        profile.birth_date,
        profile.mbti.as_deref().unwrap_or("未知（请根据生日直觉推断）")
    )
}

/// Some models wrap JSON in a markdown fence even when asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert!(matches!("gemini".parse::<AIProvider>(), Ok(AIProvider::Gemini)));
        assert!(matches!("OLLAMA".parse::<AIProvider>(), Ok(AIProvider::Ollama)));
        assert!("openai".parse::<AIProvider>().is_err());
    }

    #[test]
    fn test_prompt_includes_profile() {
        let profile = UserProfile::new("小明", "1990-01-28", Some("ENFP".to_string()));
        let prompt = build_prompt(&profile);
        assert!(prompt.contains("小明"));
        assert!(prompt.contains("1990-01-28"));
        assert!(prompt.contains("ENFP"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    }
}
