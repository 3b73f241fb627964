//! Natural-language explanation of a result
//!
//! The explanation is produced by an external text-generation service and is
//! strictly optional. It runs on its own worker thread after a result exists:
//!
//! - The estimator never waits on it
//! - The caller may cancel it at any time; a late reply is discarded
//! - A failure surfaces as `ExternalService` and leaves the result untouched
//!
//! # Module Structure
//! - `gemini` - Google Gemini `generateContent` client (feature `gemini`)
//! - Main module - prompt, provider trait and the background task handle

#[cfg(feature = "gemini")]
pub mod gemini;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::ExplanationConfig;
use crate::error::{BottleneckError, Result};
use crate::estimator::BottleneckResult;
use crate::types::LimitingComponent;

/// A text-generation backend
pub trait ExplanationProvider: Send + Sync {
    /// Short name used in logs and the UI
    fn name(&self) -> &str;

    /// Generate markdown text for a prompt. Blocking.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Inputs forwarded to the explanation service
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationRequest {
    pub processor_name: String,
    pub graphics_name: String,
    pub resolution_name: String,
    pub percentage: f64,
    pub limiting_component: LimitingComponent,
    pub is_balanced: bool,
}

impl From<&BottleneckResult> for ExplanationRequest {
    fn from(result: &BottleneckResult) -> Self {
        Self {
            processor_name: result.processor().name.clone(),
            graphics_name: result.graphics().name.clone(),
            resolution_name: result.resolution().name.clone(),
            percentage: result.percentage(),
            limiting_component: result.limiting_component(),
            is_balanced: result.is_balanced(),
        }
    }
}

impl ExplanationRequest {
    /// Build the prompt sent to the text-generation service
    pub fn prompt(&self) -> String {
        let res = &self.resolution_name;
        let verdict = if self.is_balanced {
            "Balanced pairing"
        } else {
            "Unbalanced pairing"
        };
        format!(
            "You are a friendly PC hardware expert reviewing a user's gaming build.\n\
             \n\
             Build:\n\
             - CPU: {cpu}\n\
             - GPU: {gpu}\n\
             - Gaming Resolution: {res}\n\
             \n\
             Result:\n\
             - Bottleneck Percentage: {pct}%\n\
             - Bottlenecked Component: {component}\n\
             - Verdict: {verdict}\n\
             \n\
             How the result was calculated: the GPU's performance score was compared against an \
             effective CPU score, which is the CPU's raw score scaled for the resolution. Lower \
             resolutions such as 1080p lean on the CPU, while higher resolutions such as 4K move \
             the load onto the GPU.\n\
             \n\
             Write a concise markdown analysis that contains:\n\
             1. The heading \"### AI Analysis\".\n\
             2. A one-sentence summary of the situation.\n\
             3. A short paragraph on what this means for gaming at {res}. If the GPU is the \
             bottleneck, explain that the CPU can prepare more frames than the GPU can render. \
             If the CPU is the bottleneck, explain that the GPU is not fully utilized. If the \
             build is balanced, praise the pairing for this resolution.\n\
             4. A \"### Recommendations\" section with 1-2 actionable bullet points: a logical \
             upgrade path for the limiting part, or confirmation that no upgrade is needed right \
             now and which part to look at in a future upgrade cycle.\n\
             \n\
             Keep the whole response under 200 words.\n",
            cpu = self.processor_name,
            gpu = self.graphics_name,
            res = res,
            pct = self.percentage,
            component = self.limiting_component,
            verdict = verdict,
        )
    }
}

/// State of a background explanation
#[derive(Debug)]
pub enum ExplanationPoll {
    /// No reply yet
    Pending,
    /// The service replied (successfully or not)
    Ready(Result<String>),
    /// The task was cancelled or its worker went away
    Closed,
}

/// Handle to an explanation running on a worker thread.
///
/// Dropping the handle cancels the task.
pub struct ExplanationHandle {
    rx: Receiver<Result<String>>,
    cancelled: Arc<AtomicBool>,
    provider: String,
}

impl ExplanationHandle {
    /// Name of the provider serving this request
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Request cancellation. Any reply arriving afterwards is discarded.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Non-blocking check for a reply
    pub fn poll(&self) -> ExplanationPoll {
        if self.is_cancelled() {
            return ExplanationPoll::Closed;
        }
        match self.rx.try_recv() {
            Ok(reply) => ExplanationPoll::Ready(reply),
            Err(TryRecvError::Empty) => ExplanationPoll::Pending,
            Err(TryRecvError::Disconnected) => ExplanationPoll::Closed,
        }
    }

    /// Block until a reply arrives or `timeout` elapses
    pub fn wait(self, timeout: Duration) -> Result<String> {
        match self.rx.recv_timeout(timeout) {
            Ok(reply) => reply,
            Err(RecvTimeoutError::Timeout) => {
                self.cancel();
                Err(BottleneckError::external_service(format!(
                    "{} did not reply within {}s",
                    self.provider,
                    timeout.as_secs()
                )))
            }
            Err(RecvTimeoutError::Disconnected) => Err(BottleneckError::external_service(
                format!("{} worker stopped without a reply", self.provider),
            )),
        }
    }
}

impl Drop for ExplanationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start generating an explanation on a worker thread
pub fn spawn_explanation(
    provider: Arc<dyn ExplanationProvider>,
    request: ExplanationRequest,
) -> ExplanationHandle {
    let (tx, rx) = mpsc::channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);
    let name = provider.name().to_string();

    tracing::info!(provider = %name, "Requesting explanation");

    thread::spawn(move || {
        let prompt = request.prompt();
        let reply = provider.generate(&prompt);

        if worker_cancelled.load(Ordering::SeqCst) {
            tracing::debug!("Explanation finished after cancellation, discarding reply");
            return;
        }
        if let Err(ref e) = reply {
            tracing::warn!("Explanation request failed: {}", e);
        }
        // Receiver may already be gone
        let _ = tx.send(reply);
    });

    ExplanationHandle {
        rx,
        cancelled,
        provider: name,
    }
}

/// Build the configured provider, if explanations are enabled and usable.
///
/// A missing API key disables the feature with a warning rather than failing.
pub fn provider_from_config(config: &ExplanationConfig) -> Option<Arc<dyn ExplanationProvider>> {
    if !config.enabled {
        tracing::debug!("Explanations disabled by configuration");
        return None;
    }

    let api_key = match std::env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!(
                "{} is not set; AI explanations are unavailable",
                config.api_key_env
            );
            return None;
        }
    };

    build_provider(config, api_key)
}

#[cfg(feature = "gemini")]
fn build_provider(config: &ExplanationConfig, api_key: String) -> Option<Arc<dyn ExplanationProvider>> {
    match gemini::GeminiClient::new(config, api_key) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("Failed to create explanation client: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "gemini"))]
fn build_provider(_config: &ExplanationConfig, _api_key: String) -> Option<Arc<dyn ExplanationProvider>> {
    tracing::warn!("Built without the `gemini` feature; AI explanations are unavailable");
    None
}
