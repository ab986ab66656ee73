//! JSON round trips of full MediaConvert documents.

use assert_matches::assert_matches;
use elemental_model::codec::{from_json, from_json_slice, to_json, to_json_pretty};
use elemental_model::job::{JobTemplate, TemplateType};
use elemental_model::output_groups::OutputGroupType;
use elemental_model::video::{H264RateControlMode, VideoCodec};
use elemental_model::{Error, UnknownValues};
use serde_json::Value;

const JOB_TEMPLATE: &str = include_str!("fixtures/job_template.json");

fn template() -> JobTemplate {
    from_json(JOB_TEMPLATE).unwrap()
}

#[test]
fn test_fixture_decodes() {
    let template = template();
    assert_eq!(template.name(), Some("vod-hls-cmaf"));
    assert_eq!(template.template_type(), Some(&TemplateType::Custom));
    assert_eq!(template.created_at().map(|t| t.epoch_seconds()), Some(1_586_000_000));

    let groups = template.settings().and_then(|s| s.output_groups()).unwrap();
    assert_eq!(groups.len(), 2);

    let hls_type = groups[0]
        .output_group_settings()
        .and_then(|s| s.group_type())
        .unwrap();
    assert_eq!(hls_type, &OutputGroupType::HlsGroupSettings);

    let codec = groups[0].outputs().unwrap()[0]
        .video_description()
        .and_then(|v| v.codec_settings())
        .unwrap();
    assert_eq!(codec.codec(), Some(&VideoCodec::H264));
    let h264 = codec.h264_settings().unwrap();
    assert_eq!(h264.rate_control_mode(), Some(&H264RateControlMode::Qvbr));
    assert_eq!(h264.gop_size(), Some(2.0));
}

#[test]
fn test_fixture_roundtrips_to_identical_json() {
    let original: Value = serde_json::from_str(JOB_TEMPLATE).unwrap();
    let reencoded = serde_json::to_value(template()).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn test_fixture_has_no_unknown_values() {
    assert!(template().unknown_values().is_empty());
}

#[test]
fn test_unmodelled_values_survive_a_roundtrip() {
    let patched = JOB_TEMPLATE.replace("\"TRANSITION_DETECTION\"", "\"SHOT_BOUNDARY\"");
    let template: JobTemplate = from_json(&patched).unwrap();

    let unknown = template.unknown_values();
    assert_eq!(unknown.len(), 1);
    assert_eq!(
        unknown[0].path,
        "Settings.OutputGroups[0].Outputs[0].VideoDescription.CodecSettings.H264Settings.SceneChangeDetect"
    );
    assert_eq!(unknown[0].enumeration, "H264SceneChangeDetect");

    let json = to_json(&template).unwrap();
    assert!(json.contains("\"sceneChangeDetect\":\"SHOT_BOUNDARY\""));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let template: JobTemplate =
        from_json(r#"{"name": "t", "settings": {"esam": {"signalProcessingNotification": {}}}}"#)
            .unwrap();
    assert_eq!(template.name(), Some("t"));
    assert_eq!(template.settings().map(|s| s.to_string()), Some("{}".to_string()));
}

#[test]
fn test_pretty_output_decodes_back() {
    let template = template();
    let pretty = to_json_pretty(&template).unwrap();
    assert!(pretty.contains('\n'));
    let back: JobTemplate = from_json_slice(pretty.as_bytes()).unwrap();
    assert_eq!(back, template);
}

#[test]
fn test_type_mismatch_is_a_json_error() {
    let result = from_json::<JobTemplate>(r#"{"priority": "high"}"#);
    assert_matches!(result, Err(Error::Json(_)));
}

#[test]
fn test_rendering_of_a_full_template() {
    let rendered = template().to_string();
    assert!(rendered.starts_with("{AccelerationSettings: {Mode: PREFERRED},Arn: "));
    assert_eq!(rendered.matches("Name: vod-hls-cmaf").count(), 1);
    assert!(rendered.contains("CreatedAt: 2020-04-04T11:33:20Z"));
    assert!(rendered.contains("AudioSelectors: {Audio Selector 1={DefaultSelection: DEFAULT,SelectorType: TRACK,Tracks: [1, 2]}}"));
    assert!(rendered.contains("DashSignaledSystemIds: [edef8ba9-79d6-4ace-a3c8-27dcd51d21ed]"));
    assert!(rendered.ends_with("Type: CUSTOM}"));
}
