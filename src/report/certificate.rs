use super::AnalysisResult;

const DIGEST_PREFIX_CHARS: usize = 16;

/// Human-readable integrity certificate for a text result.
pub fn generate_certificate(result: &AnalysisResult) -> String {
    let digest: String = result
        .metadata
        .content_digest
        .chars()
        .take(DIGEST_PREFIX_CHARS)
        .collect();
    let lines = [
        "ALua Integrity Certificate".to_string(),
        format!("Score: {:.1}%", result.integrity_score * 100.0),
        format!(
            "AI Generated: {}",
            if result.is_ai_generated { "Yes" } else { "No" }
        ),
        format!("Confidence: {:.1}%", result.confidence * 100.0),
        format!("Engine: {}", result.engine),
        format!("Content: sha256:{}", digest),
        format!("Date: {}", result.timestamp),
        format!("Version: {}", result.version),
    ];
    lines.join("\n")
}
