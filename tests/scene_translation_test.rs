// AudioScene XML → application JSON, end to end

use mpegh_ui_translator::converters::scene_json::{compose_audio_scene, compose_audio_scene_string};
use mpegh_ui_translator::converters::scene_xml::{parse_audio_scene, ParseError};
use mpegh_ui_translator::models::SceneVersion;
use serde_json::json;

const SCENE_V9: &str = include_str!("fixtures/scene_v9.xml");
const SCENE_V10: &str = include_str!("fixtures/scene_v10.xml");

#[test]
fn test_composition_is_deterministic() {
    let scene = parse_audio_scene(SCENE_V9).expect("version 9 scene should parse");

    let first = compose_audio_scene_string(&scene, "eng", false);
    let second = compose_audio_scene_string(&scene, "eng", false);
    assert_eq!(first, second);

    // a re-parsed scene composes to the same bytes as well
    let reparsed = parse_audio_scene(SCENE_V9).unwrap();
    assert_eq!(first, compose_audio_scene_string(&reparsed, "eng", false));

    let pretty = compose_audio_scene_string(&scene, "eng", true);
    let from_pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let from_compact: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(from_pretty, from_compact);
}

#[test]
fn test_version_9_active_preset_reports_scene_level_objects() {
    let scene = parse_audio_scene(SCENE_V9).unwrap();
    assert_eq!(scene.scene_version(), Some(SceneVersion::V9));
    assert_eq!(scene.drc_info.available_effects, vec![1, 3]);

    let json = compose_audio_scene(&scene, "deu");
    assert_eq!(json["uuid"], "6a0d7c9e-3b51-4d8a-9f0e-0c2d4e6f8a90");
    assert_eq!(json["displayLanguageHint"], "deu");

    let active = &json["audioPresets"][0];
    assert_eq!(active["id"], 1);
    assert_eq!(active["active"], true);
    assert_eq!(active["default"], true);
    assert_eq!(active["contentKind"], 1);
    assert_eq!(
        active["labels"],
        json!([
            { "lang": "eng", "value": "Default mix" },
            { "lang": "deu", "value": "Standardmischung" },
        ])
    );

    let object_ids: Vec<i64> = active["objects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(object_ids, vec![5, 6]);
    assert_eq!(active["objects"][0]["prominence"]["level"], json!(2.0));
    assert_eq!(active["objects"][0]["azimuth"]["min"], json!(-30.0));

    let group = &active["switchGroups"][0];
    assert_eq!(group["id"], 9);
    assert_eq!(group["activeObject"], 3);
    assert_eq!(group["defaultObject"], 3);
    // items report the group's shared properties
    assert_eq!(group["objects"][1]["prominence"]["level"], json!(1.5));

    // the inactive preset does not borrow the scene-level lists
    let inactive = &json["audioPresets"][1];
    assert_eq!(inactive["objects"], json!([]));
    assert_eq!(inactive["switchGroups"], json!([]));
}

#[test]
fn test_version_10_uses_preset_lists_exclusively() {
    let scene = parse_audio_scene(SCENE_V10).unwrap();
    assert_eq!(scene.scene_version(), Some(SceneVersion::V10));
    // scene-level element is parsed but not authoritative
    assert_eq!(scene.audio_elements.len(), 1);

    let json = compose_audio_scene(&scene, "eng");
    let active = &json["audioPresets"][0];
    assert_eq!(active["objects"].as_array().map(Vec::len), Some(1));
    assert_eq!(active["objects"][0]["id"], 7);

    let group = &active["switchGroups"][0];
    assert_eq!(group["defaultObject"], 3);
    assert!(group.get("activeObject").is_none());

    let other = &json["audioPresets"][1];
    assert_eq!(other["objects"][0]["id"], 8);
    assert_eq!(other["objects"][0]["muting"], json!({ "value": true, "default": false }));
}

#[test]
fn test_malformed_scenes_are_rejected() {
    let bad_version = SCENE_V10.replace("version=\"10.0\"", "version=\"8.0\"");
    assert_eq!(
        parse_audio_scene(&bad_version),
        Err(ParseError::InvalidVersion("8.0".to_string()))
    );

    let bad_table = SCENE_V9.replace("table=\"PresetTable\"", "table=\"ContentKindTable\"");
    assert!(matches!(parse_audio_scene(&bad_table), Err(ParseError::InvalidTable { .. })));

    let bad_boolean = SCENE_V9.replace("isAvailable=\"true\"", "isAvailable=\"yes\"");
    assert!(matches!(parse_audio_scene(&bad_boolean), Err(ParseError::InvalidAttribute { .. })));

    let bad_code = SCENE_V9.replace("code=\"3\"", "code=\"300\"");
    assert!(matches!(parse_audio_scene(&bad_code), Err(ParseError::OutOfRange { .. })));

    let missing_id = SCENE_V10.replace("<audioElement id=\"7\"", "<audioElement");
    match parse_audio_scene(&missing_id) {
        Err(ParseError::MissingAttribute { attribute, .. }) => assert_eq!(attribute, "id"),
        other => panic!("expected missing id, got {:?}", other),
    }
}
