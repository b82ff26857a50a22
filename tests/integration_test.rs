//! Integration test: config load, feature extraction, text/batch/image analysis, fallback model.

use alua_sentinel::{
    config::SentinelConfig,
    features::FeatureExtractor,
    image::ImageDetector,
    model::{ModelHandle, ModelState, ScoreSource},
    BatchItem, Sentinel, SentinelError,
};
use std::io::Write;
use std::path::Path;

const AI_TEXT: &str =
    "As an AI language model, I provide accurate responses based on training data.";
const HUMAN_TEXT: &str = "Hey, I think this is really cool! Sorry, typo again 😊";

fn fallback_sentinel() -> Sentinel {
    let config = SentinelConfig::default();
    let model = ModelHandle::disabled(&config.scoring);
    Sentinel::with_model(config, model)
}

#[test]
fn config_load_default() {
    let c = SentinelConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.detection.min_text_chars, 15);
    assert_eq!(c.detection.max_reasons, 10);
    assert_eq!(c.scoring.statistical_blend, 0.3);
    assert_eq!(c.scoring.model_blend, 0.4);
    assert_eq!(c.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn config_load_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"detection": {{"min_text_chars": 10}}, "version": "test-1"}}"#).unwrap();
    let c = SentinelConfig::load(file.path());
    assert_eq!(c.detection.min_text_chars, 10);
    assert_eq!(c.detection.min_words, 3);
    assert_eq!(c.version, "test-1");
    assert!(c.model.enabled);
}

#[test]
fn config_out_of_range_is_rejected() {
    let err = SentinelConfig::from_json_str(r#"{"scoring": {"statistical_blend": 1.5}}"#).unwrap_err();
    assert!(matches!(err, SentinelError::Config(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"scoring": {{"statistical_blend": 1.5}}}}"#).unwrap();
    let c = SentinelConfig::load(file.path());
    assert_eq!(c.scoring.statistical_blend, 0.3);
}

#[test]
fn features_stay_in_unit_interval() {
    let extractor = FeatureExtractor::new(Default::default());
    let texts = [
        AI_TEXT,
        HUMAN_TEXT,
        "Text with special chars !@#$%^&*()_+{}|:<>?[]\\;',./`~ and unicode 🚀😂",
        "1234567890 1234567890 1234567890 numbers only here",
        "A very, very, very long sentence without any terminal punctuation at all just words",
        "SHOUTING IN ALL CAPS!!! WHY??? BECAUSE!!!",
    ];
    for text in texts {
        let fv = extractor.extract(text).unwrap();
        assert_eq!(fv.len(), 10, "{text}");
        for (i, v) in fv.as_slice().iter().enumerate() {
            assert!((0.0..=1.0).contains(v), "feature {i} = {v} for {text:?}");
            let scaled = v * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-2, "feature {i} not rounded: {v}");
        }
    }
}

#[test]
fn repeated_word_saturates_lexical_repetition() {
    let extractor = FeatureExtractor::new(Default::default());
    let fv = extractor.extract("AI AI AI AI AI AI AI AI").unwrap();
    assert!(fv.lexical_repetition().unwrap() >= 0.8);
    assert_eq!(fv.get("vocabulary_richness"), Some(0.125));
}

#[test]
fn short_and_empty_input_rejected() {
    let extractor = FeatureExtractor::new(Default::default());
    assert!(matches!(
        extractor.extract("hi"),
        Err(SentinelError::InputTooShort { len: 2, min: 15 })
    ));
    assert!(matches!(extractor.extract("   \n\t"), Err(SentinelError::InvalidInput(_))));
    assert_eq!(extractor.extract("supercalifragilistic").unwrap().len(), 10);
}

#[tokio::test]
async fn single_long_word_is_still_analyzed() {
    let sentinel = fallback_sentinel();
    let r = sentinel
        .analyze_text("Supercalifragilisticexpialidocious!")
        .await
        .unwrap();
    assert_eq!(r.metadata.word_count, 1);
    assert_eq!(r.metadata.features.len(), 10);
    assert_eq!(r.metadata.model_source, ScoreSource::Fallback);
    assert!((0.0..=1.0).contains(&r.confidence));

    let items = sentinel.analyze_batch(&["Supercalifragilisticexpialidocious!"]).await;
    assert!(items[0].is_ok());
}

#[tokio::test]
async fn ai_boilerplate_is_flagged() {
    let sentinel = fallback_sentinel();
    let r = sentinel.analyze_text(AI_TEXT).await.unwrap();
    assert!(r.is_ai_generated);
    assert!(r.confidence > 0.1, "confidence {}", r.confidence);
    assert!(r.reasons.iter().any(|s| s.starts_with("AI pattern:")));
    assert!(r.integrity_score < 0.5);
    assert_eq!(r.metadata.model_source, ScoreSource::Fallback);
    assert_eq!(r.engine, "Enhanced Statistical Analysis");
}

#[tokio::test]
async fn casual_text_is_human() {
    let sentinel = fallback_sentinel();
    let r = sentinel.analyze_text(HUMAN_TEXT).await.unwrap();
    assert!(!r.is_ai_generated);
    assert!(r.integrity_score >= 0.5);
    assert!(r.reasons.iter().any(|s| s.starts_with("Human pattern:")));
}

#[tokio::test]
async fn too_short_text_is_rejected() {
    let sentinel = fallback_sentinel();
    let err = sentinel.analyze_text("hi").await.unwrap_err();
    assert!(matches!(err, SentinelError::InputTooShort { .. }));
}

#[tokio::test]
async fn confidence_and_integrity_follow_normalized_scores() {
    let sentinel = fallback_sentinel();
    for text in [AI_TEXT, HUMAN_TEXT, "AI AI AI AI AI AI AI AI"] {
        let r = sentinel.analyze_text(text).await.unwrap();
        let m = &r.metadata;
        assert_eq!(r.confidence, (m.ai_score - m.human_score).abs());
        assert!((0.0..=1.0).contains(&r.confidence));
        assert!((m.ai_score + m.human_score - 1.0).abs() < 1e-9);
        assert_eq!(r.is_ai_generated, m.ai_score > m.human_score);
        let expected = if r.is_ai_generated {
            (0.5 - r.confidence / 2.0).max(0.1)
        } else {
            (0.5 + r.confidence / 2.0).min(0.99)
        };
        assert_eq!(r.integrity_score, expected);
        assert!((0.0..=1.0).contains(&r.model_score));
    }
}

#[tokio::test]
async fn repeated_analysis_is_stable() {
    let sentinel = fallback_sentinel();
    let a = sentinel.analyze_text(AI_TEXT).await.unwrap();
    let b = sentinel.analyze_text(AI_TEXT).await.unwrap();
    assert_eq!(a.is_ai_generated, b.is_ai_generated);
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.reasons, b.reasons);
    assert_eq!(a.metadata, b.metadata);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn reasons_are_capped_in_generation_order() {
    let sentinel = fallback_sentinel();
    let text = "As an AI language model, as a large language model, I am an AI. I cannot help. \
        It was trained on data to generate text with pattern recognition, algorithm based. \
        Sorry for the typo, slang aside, my personal experience says I think so, in my opinion.";
    let r = sentinel.analyze_text(text).await.unwrap();
    assert_eq!(r.metadata.pattern_hits, 15);
    assert_eq!(r.metadata.total_reasons, 16);
    assert_eq!(r.reasons.len(), 10);
    assert_eq!(r.reasons[0], "AI pattern: as an ai language model (1x)");
    assert!(r.reasons.iter().all(|s| s.starts_with("AI pattern:")));
}

#[tokio::test]
async fn batch_isolates_failures() {
    let sentinel = fallback_sentinel();
    let texts = [AI_TEXT, "hi", HUMAN_TEXT];
    let items = sentinel.analyze_batch(&texts).await;
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[2].is_ok());

    let failure = items[1].failure().expect("second item fails");
    assert_eq!(failure.index, 1);
    assert_eq!(failure.preview, "hi...");
    assert!(failure.error.contains("too short"));
    assert_eq!(items.iter().filter(|i| !i.is_ok()).count(), 1);

    let json = serde_json::to_value(&items[1]).unwrap();
    assert_eq!(json["status"], "failed");
}

#[tokio::test]
async fn batch_of_strings_matches_single_calls() {
    let sentinel = fallback_sentinel();
    let texts = vec![AI_TEXT.to_string(), HUMAN_TEXT.to_string()];
    let items = sentinel.analyze_batch(&texts).await;
    let single = sentinel.analyze_text(HUMAN_TEXT).await.unwrap();
    match &items[1] {
        BatchItem::Analyzed(r) => assert_eq!(r.confidence, single.confidence),
        BatchItem::Failed(f) => panic!("unexpected failure: {}", f.error),
    }
}

#[tokio::test]
async fn certificate_summarizes_result() {
    let sentinel = fallback_sentinel();
    let r = sentinel.analyze_text(AI_TEXT).await.unwrap();
    let cert = sentinel.generate_certificate(&r);
    assert!(cert.starts_with("ALua Integrity Certificate"));
    assert!(cert.contains("AI Generated: Yes"));
    assert!(cert.contains(&format!("Score: {:.1}%", r.integrity_score * 100.0)));
    assert!(cert.contains(&format!("Confidence: {:.1}%", r.confidence * 100.0)));
    assert!(cert.contains(&format!("Version: {}", sentinel.version())));
    assert!(cert.contains(&r.metadata.content_digest[..16]));
}

#[tokio::test]
async fn status_reports_fallback_mode() {
    let sentinel = fallback_sentinel();
    assert_eq!(sentinel.status().model_state, ModelState::Uninitialized);
    assert!(!sentinel.initialize().await);

    let status = sentinel.status();
    assert!(!status.initialized);
    assert_eq!(status.model_state, ModelState::Failed);
    assert!(status.features.iter().any(|f| f == "Enhanced Fallback Mode"));

    let info = sentinel.system_info();
    assert_eq!(info.backend, "fallback");
    assert_eq!(info.version, sentinel.version());
}

#[tokio::test]
async fn missing_onnx_model_falls_back() {
    let mut config = SentinelConfig::default();
    config.model.model_path = "nonexistent.onnx".into();
    let sentinel = Sentinel::new(config);
    let r = sentinel.analyze_text(AI_TEXT).await.unwrap();
    assert_eq!(r.metadata.model_source, ScoreSource::Fallback);
    assert_eq!(sentinel.model().state(), ModelState::Failed);
}

#[test]
fn image_stub_is_reproducible_with_seed() {
    let a = ImageDetector::with_seed(7);
    let b = ImageDetector::with_seed(7);
    for _ in 0..20 {
        let va = a.analyze(b"\x89PNG fake").unwrap();
        let vb = b.analyze(b"\x89PNG fake").unwrap();
        assert_eq!(va, vb);
        assert!((0.85..=0.95).contains(&va.confidence));
        let expected = if va.is_ai_generated { 0.3 } else { 0.9 };
        assert_eq!(va.integrity_score, expected);
    }
    assert!(matches!(a.analyze(&[]), Err(SentinelError::InvalidInput(_))));
}

#[test]
fn sentinel_image_result_carries_version() {
    let sentinel = fallback_sentinel().with_image_detector(ImageDetector::with_seed(1));
    let r = sentinel.analyze_image(&[1, 2, 3, 4]).unwrap();
    assert_eq!(r.byte_length, 4);
    assert_eq!(r.version, sentinel.version());
    assert_eq!(r.metrics.noise_analysis, 0.92);
}
