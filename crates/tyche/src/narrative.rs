//! Seam for the external narrative generator.
//!
//! The generator turns the report text plus a style prompt into prose. Calls
//! can fail transiently, so they run under a bounded [`RetryPolicy`] that
//! works on typed outcomes. No concrete client is provided here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Marker placed between the style prompt and the report text.
pub const DATA_MARKER: &str = "【計算データ】";

/// Default reading style: the chart read as the manual of a machine.
pub const DEFAULT_STYLE_PROMPT: &str = "\
あなたは冷徹かつユーモアのある「製品エンジニア」です。
ユーザーのホロスコープデータを「ある精密機械（ロボット）の仕様書」として読み解き、以下のフォーマットで【取扱説明書】を作成してください。

【制約事項】
・占星術の専門用語は、機械用語に変換すること（例：惑星→パーツ、アスペクト→回路接続、ハードアスペクト→バグ・不具合）。
・トーンは「淡々としたマニュアル口調」ですが、内容は辛口かつユーモアたっぷりに。
・ユーザーを人間扱いせず、「本製品」と呼ぶこと。
・絶対に「～です、～ます」調で書くこと。

【出力フォーマット】
--------------------------------------------------
## 🤖 製品名：(相談者)型 汎用人型決戦兵器（試作機）
**製造年月日：** 19☆☆年☆月☆☆日
**製造元：** 宇宙・太陽系・地球工場

### 1. 【製品概要】（太陽・月・ASCから分析）
### 2. 【基本スペック】（水星・金星・火星から分析）
### 3. 【既知の不具合・バグ】（土星・ハードアスペクトから分析）
### 4. 【メンテナンス方法】（木星・ラッキーポイント）
### 5. 【エンジニアからの総評】
### 【オーナー様へのお願い】
--------------------------------------------------
";

/// Typed outcome of one generation attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("rate limited by the generation service")]
    RateLimited,
    #[error("generation service returned an empty response")]
    Empty,
    #[error("generation failed: {0}")]
    Fatal(String),
}

impl GenerationError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::RateLimited | GenerationError::Empty)
    }
}

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Attempt cap plus linear backoff: the wait before retry `n` is `n * backoff_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(rename = "maxAttempts")]
    pub max_attempts: u32,
    #[serde(rename = "backoffStep", with = "secs")]
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Wait after the failed `attempt` (1-based) before trying again.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("narrative generation gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: GenerationError,
    },
    #[error(transparent)]
    Generation(GenerationError),
}

/// Prompt sent to the generator: style text, the data marker, then the report.
pub fn build_prompt(style: &str, report_text: &str) -> String {
    format!("{}\n\n{}\n{}", style.trim_end(), DATA_MARKER, report_text)
}

/// Run the generator under `policy`. Rate limits and empty responses are
/// retried; any other failure ends the loop at once.
pub async fn generate_with_retry(
    generator: &dyn NarrativeGenerator,
    prompt: &str,
    policy: &RetryPolicy,
) -> Result<String, NarrativeError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut last = GenerationError::Empty;

    for attempt in 1..=max_attempts {
        let outcome = match generator.generate(prompt).await {
            Ok(text) if text.trim().is_empty() => Err(GenerationError::Empty),
            other => other,
        };

        match outcome {
            Ok(text) => return Ok(text),
            Err(err) if err.is_retryable() => {
                log::warn!("narrative attempt {}/{} failed: {}", attempt, max_attempts, err);
                last = err;
                if attempt < max_attempts {
                    tokio::time::sleep(policy.delay_after(attempt)).await;
                }
            }
            Err(err) => return Err(NarrativeError::Generation(err)),
        }
    }

    Err(NarrativeError::Exhausted {
        attempts: max_attempts,
        last,
    })
}
