//! Resume analysis — prompt construction and the single inference call.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Builds the evaluation prompt. The job-description comparison addendum
/// is appended only when a non-empty job description was provided.
fn build_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let mut prompt = prompts::ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    if let Some(jd) = job_description.map(str::trim).filter(|jd| !jd.is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(&prompts::JD_COMPARISON_TEMPLATE.replace("{job_description}", jd));
    }

    prompt
}

/// Runs the qualitative evaluation: one LLM call, free-text result.
/// Rejects empty resume text before any network traffic.
pub async fn analyze_resume(
    resume_text: &str,
    job_description: Option<&str>,
    llm: &LlmClient,
) -> Result<String, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text is required for analysis".to_string(),
        ));
    }

    let prompt = build_prompt(resume_text, job_description);
    llm.call_text(&prompt, prompts::ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))
}
