// Tests for segment processing: speaker mapping, same-speaker merging,
// partial-failure tolerance, and the no-diarization fallback.

use transcribe_md::transcript::{
    build_segments, speaker_display_name, DiarizationSegment, Results, SegmentItem, SpeakerLabels,
    Transcript, WordItem,
};
use transcribe_md::TranscriptError;

fn results_with(
    items: Option<Vec<WordItem>>,
    labels: Option<SpeakerLabels>,
    transcript: &str,
) -> Results {
    Results {
        transcripts: vec![Transcript {
            transcript: transcript.to_string(),
        }],
        items,
        speaker_labels: labels,
    }
}

fn segment(label: &str, start: f64, end: f64) -> DiarizationSegment {
    DiarizationSegment {
        speaker_label: label.to_string(),
        start_time: Some(start),
        end_time: Some(end),
        items: None,
    }
}

#[test]
fn test_speaker_label_mapping() {
    assert_eq!(speaker_display_name("spk_0"), "Speaker 1");
    assert_eq!(speaker_display_name("spk_1"), "Speaker 2");
    assert_eq!(speaker_display_name("spk_11"), "Speaker 12");
    // Labels outside the spk_<digits> pattern pass through verbatim
    assert_eq!(speaker_display_name("host"), "host");
    assert_eq!(speaker_display_name("spk_x"), "spk_x");
}

#[test]
fn test_consecutive_same_speaker_segments_merge() -> anyhow::Result<()> {
    let items = vec![
        WordItem::pronunciation("First", 0.0, 0.5),
        WordItem::pronunciation("part", 0.6, 1.0),
        WordItem::pronunciation("second", 2.0, 2.5),
        WordItem::pronunciation("part", 2.6, 3.0),
        WordItem::pronunciation("reply", 4.0, 4.5),
    ];
    let labels = SpeakerLabels {
        speakers: Some(2),
        segments: vec![
            segment("spk_0", 0.0, 1.0),
            segment("spk_0", 2.0, 3.0),
            segment("spk_1", 4.0, 4.5),
        ],
    };

    let outcome = build_segments(&results_with(Some(items), Some(labels), "full"), "full")?;

    assert_eq!(outcome.segments.len(), 2, "adjacent spk_0 segments merge");
    assert_eq!(outcome.segments[0].speaker, "Speaker 1");
    assert_eq!(outcome.segments[0].text, "First part. Second part.");
    assert_eq!(outcome.segments[0].start_time, 0.0);
    assert_eq!(outcome.segments[0].end_time, 3.0);
    assert_eq!(outcome.segments[1].speaker, "Speaker 2");
    assert_eq!(outcome.segments[1].text, "Reply.");

    Ok(())
}

#[test]
fn test_merge_invariant_no_adjacent_equal_speakers() -> anyhow::Result<()> {
    // A longer alternation with repeated runs
    let label_runs = ["spk_0", "spk_0", "spk_1", "spk_0", "spk_0", "spk_0", "spk_1", "spk_1"];

    let mut items = Vec::new();
    let mut segments = Vec::new();
    for (i, label) in label_runs.iter().enumerate() {
        let start = i as f64 * 2.0;
        items.push(WordItem::pronunciation(&format!("word{}", i), start, start + 0.5));
        segments.push(segment(label, start, start + 1.0));
    }

    let labels = SpeakerLabels {
        speakers: Some(2),
        segments,
    };
    let outcome = build_segments(&results_with(Some(items), Some(labels), "full"), "full")?;

    for pair in outcome.segments.windows(2) {
        assert_ne!(
            pair[0].speaker, pair[1].speaker,
            "merged output must not contain adjacent equal speakers"
        );
    }

    // Merging only concatenates: every per-segment word survives in order
    let merged_text: Vec<String> = outcome
        .segments
        .iter()
        .map(|s| s.text.clone())
        .collect();
    // Normalization capitalizes segment starts, so compare ignoring case
    let all = merged_text.join(" ").to_lowercase();
    for i in 0..label_runs.len() {
        assert!(all.contains(&format!("word{}", i)), "missing word{}", i);
    }

    Ok(())
}

#[test]
fn test_malformed_segment_is_skipped_not_fatal() -> anyhow::Result<()> {
    let items = vec![
        WordItem::pronunciation("Good", 0.0, 0.5),
        WordItem::pronunciation("text", 0.6, 1.0),
    ];
    let broken = DiarizationSegment {
        speaker_label: "spk_1".to_string(),
        start_time: Some(2.0),
        end_time: None, // malformed
        items: None,
    };
    let labels = SpeakerLabels {
        speakers: Some(2),
        segments: vec![segment("spk_0", 0.0, 1.0), broken],
    };

    let outcome = build_segments(&results_with(Some(items), Some(labels), "full"), "full")?;

    assert_eq!(outcome.segments.len(), 1);
    assert_eq!(outcome.segments[0].text, "Good text.");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].to_string().contains("missing end_time"));

    Ok(())
}

#[test]
fn test_all_segments_empty_is_fatal() {
    // One segment whose time range matches no words at all
    let items = vec![WordItem::pronunciation("far", 100.0, 100.5)];
    let labels = SpeakerLabels {
        speakers: Some(1),
        segments: vec![segment("spk_0", 0.0, 1.0)],
    };

    let result = build_segments(&results_with(Some(items), Some(labels), "full"), "full");

    assert!(matches!(result, Err(TranscriptError::NoValidSegments)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "no valid segments found"
    );
}

#[test]
fn test_no_diarization_synthesizes_single_segment() -> anyhow::Result<()> {
    let items = vec![
        WordItem::pronunciation("Hello", 0.0, 0.5),
        WordItem::pronunciation("world", 0.6, 1.1),
        WordItem::punctuation("."),
    ];

    let outcome = build_segments(&results_with(Some(items), None, "Hello world."), "Hello world.")?;

    assert_eq!(outcome.segments.len(), 1);
    assert_eq!(outcome.segments[0].speaker, "Speaker 1");
    assert_eq!(outcome.segments[0].text, "Hello world.");
    assert_eq!(outcome.segments[0].start_time, 0.0);
    assert_eq!(outcome.segments[0].end_time, 1.1);

    Ok(())
}

#[test]
fn test_no_diarization_no_items_uses_full_transcript() -> anyhow::Result<()> {
    let full = "The verbatim transcript text.";
    let outcome = build_segments(&results_with(None, None, full), full)?;

    assert_eq!(outcome.segments.len(), 1);
    assert_eq!(outcome.segments[0].text, full);
    assert_eq!(outcome.segments[0].end_time, 0.0);

    Ok(())
}

#[test]
fn test_sub_item_resolution_preferred_over_range_filter() -> anyhow::Result<()> {
    let items = vec![
        WordItem::pronunciation("inside", 0.0, 0.5),
        WordItem::pronunciation("also", 0.6, 1.0),
    ];
    // Sub-items reference only the first word even though both fall inside
    // the segment's overall range.
    let seg = DiarizationSegment {
        speaker_label: "spk_0".to_string(),
        start_time: Some(0.0),
        end_time: Some(1.0),
        items: Some(vec![SegmentItem {
            start_time: Some(0.0),
            end_time: Some(0.5),
            speaker_label: Some("spk_0".to_string()),
        }]),
    };
    let labels = SpeakerLabels {
        speakers: Some(1),
        segments: vec![seg],
    };

    let outcome = build_segments(&results_with(Some(items), Some(labels), "full"), "full")?;

    assert_eq!(outcome.segments[0].text, "Inside.");

    Ok(())
}
