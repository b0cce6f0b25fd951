// Change-set → ActionEvent compilation against parsed baselines

use mpegh_ui_translator::converters::action_events::{compile_action_events, compile_actions, CompileError};
use mpegh_ui_translator::converters::changes_json::parse_scene_changes;
use mpegh_ui_translator::converters::scene_json::compose_audio_scene;
use mpegh_ui_translator::converters::scene_xml::parse_audio_scene;
use mpegh_ui_translator::models::{ActionEvent, ActionType, AudioSceneConfig, NIL_UUID};
use serde_json::json;

const SCENE_V9: &str = include_str!("fixtures/scene_v9.xml");
const SCENE_V10: &str = include_str!("fixtures/scene_v10.xml");
const UUID_V9: &str = "6a0d7c9e-3b51-4d8a-9f0e-0c2d4e6f8a90";
const UUID_V10: &str = "0b7e2f41-8c3d-4e5a-b6f7-1a2b3c4d5e6f";

fn baseline(xml: &str) -> AudioSceneConfig {
    parse_audio_scene(xml).expect("fixture scene should parse")
}

fn compile(changes: serde_json::Value, scene: Option<&AudioSceneConfig>) -> Result<Vec<ActionEvent>, CompileError> {
    let changes = parse_scene_changes(&changes).expect("change-set should parse");
    compile_actions(&changes, scene, Some("eng"))
}

fn codes(events: &[ActionEvent]) -> Vec<u8> {
    events.iter().map(|e| e.action_type.code()).collect()
}

#[test]
fn test_without_baseline_only_language_is_compiled() {
    let changes = json!({
        "uuid": UUID_V9,
        "displayLanguage": "deu",
        "audioPresets": [
            { "id": 2, "active": true, "objects": [ { "id": 5, "muting": { "value": true } } ] }
        ]
    });

    let events = compile(changes, None).unwrap();
    assert_eq!(codes(&events), vec![71]);
    assert_eq!(events[0].uuid, NIL_UUID);
}

#[test]
fn test_prominence_change_against_baseline() {
    let scene = baseline(SCENE_V9);

    let same = json!({
        "uuid": UUID_V9,
        "audioPresets": [ { "id": 1, "objects": [ { "id": 5, "prominence": { "level": 2.0 } } ] } ]
    });
    assert!(compile(same, Some(&scene)).unwrap().is_empty());

    let raised = json!({
        "uuid": UUID_V9,
        "audioPresets": [ { "id": 1, "objects": [ { "id": 5, "prominence": { "level": 5.0 } } ] } ]
    });
    let events = compile(raised, Some(&scene)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action_type, ActionType::AudioElementProminenceLevelChanged);
    assert_eq!(events[0].uuid, UUID_V9);
    assert_eq!(events[0].param_int, Some(5));
    assert_eq!(events[0].param_float, Some(5.0));
}

#[test]
fn test_echoed_scene_compiles_to_nothing() {
    for xml in [SCENE_V9, SCENE_V10] {
        let scene = baseline(xml);
        let mut echoed = compose_audio_scene(&scene, "eng");
        // the echo carries no language request, only the hint
        assert!(echoed.get("displayLanguage").is_none());
        echoed["displayLanguage"] = json!("eng");

        let events = compile(echoed, Some(&scene)).unwrap();
        assert!(events.is_empty(), "unexpected events: {:?}", events);
    }
}

#[test]
fn test_unknown_preset_fails_without_partial_output() {
    let scene = baseline(SCENE_V9);
    let changes = json!({
        "uuid": UUID_V9,
        "displayLanguage": "deu",
        "audioPresets": [
            { "id": 1, "objects": [ { "id": 5, "muting": { "value": true } } ] },
            { "id": 42, "active": true }
        ]
    });

    assert_eq!(compile(changes, Some(&scene)), Err(CompileError::UnknownPreset(42)));
}

#[test]
fn test_unknown_element_and_switch_group_fail() {
    let scene = baseline(SCENE_V10);

    // element 5 only exists on scene level, which version 10 presets do not use
    let changes = json!({
        "uuid": UUID_V10,
        "audioPresets": [ { "id": 1, "objects": [ { "id": 5, "prominence": { "level": 1.0 } } ] } ]
    });
    assert_eq!(
        compile(changes, Some(&scene)),
        Err(CompileError::UnknownAudioElement { preset: 1, id: 5 })
    );

    let changes = json!({
        "uuid": UUID_V10,
        "audioPresets": [ { "id": 2, "switchGroups": [ { "id": 9, "activeObject": 4 } ] } ]
    });
    assert_eq!(
        compile(changes, Some(&scene)),
        Err(CompileError::UnknownSwitchGroup { preset: 2, id: 9 })
    );
}

#[test]
fn test_version_9_resolves_scene_level_objects() {
    let scene = baseline(SCENE_V9);
    let changes = json!({
        "uuid": UUID_V9,
        "audioPresets": [ {
            "id": 1,
            "objects": [ { "id": 5, "muting": { "value": true }, "azimuth": { "offset": 15.0 } } ],
            "switchGroups": [ { "id": 9, "activeObject": 4 } ]
        } ]
    });

    let events = compile(changes, Some(&scene)).unwrap();
    assert_eq!(codes(&events), vec![40, 42, 60]);
    assert_eq!(events[0].param_bool, Some(true));
    assert_eq!(events[1].param_float, Some(15.0));
    assert_eq!(events[2].param_int, Some(9));
    assert_eq!(events[2].param_float, Some(4.0));
}

#[test]
fn test_missing_active_item_always_selects() {
    // group 9 of the version 10 scene has no active item
    let scene = baseline(SCENE_V10);
    let changes = json!({
        "uuid": UUID_V10,
        "audioPresets": [ { "id": 1, "switchGroups": [ { "id": 9, "activeObject": 3 } ] } ]
    });

    let events = compile(changes, Some(&scene)).unwrap();
    assert_eq!(codes(&events), vec![60]);
    assert_eq!(events[0].param_int, Some(9));
    assert_eq!(events[0].param_float, Some(3.0));
}

#[test]
fn test_switch_item_muting_is_not_represented() {
    let scene = baseline(SCENE_V9);
    let changes = json!({
        "uuid": UUID_V9,
        "audioPresets": [ { "id": 1, "switchGroups": [ {
            "id": 9,
            "objects": [ { "id": 3, "muting": { "value": true } } ]
        } ] } ]
    });

    let events = compile(changes, Some(&scene)).unwrap();
    assert!(events.is_empty());
    assert!(events.iter().all(|e| e.action_type != ActionType::AudioElementSwitchMutingChanged));
}

#[test]
fn test_switch_item_properties_compare_against_group() {
    let scene = baseline(SCENE_V9);
    let changes = json!({
        "uuid": UUID_V9,
        "audioPresets": [ { "id": 1, "switchGroups": [ {
            "id": 9,
            "muting": { "value": true },
            "objects": [
                { "id": 3, "prominence": { "level": 1.5 } },
                { "id": 4, "prominence": { "level": 3.0 }, "azimuth": { "offset": 20.0 } }
            ]
        } ] } ]
    });

    // item 3 matches the group's 1.5; the group has no azimuth to compare against
    let events = compile(changes, Some(&scene)).unwrap();
    assert_eq!(codes(&events), vec![61, 62, 63]);
    assert!(events.iter().all(|e| e.param_int == Some(9)));
}

#[test]
fn test_event_order_across_presets() {
    let scene = baseline(SCENE_V10);
    let changes = json!({
        "uuid": UUID_V10,
        "displayLanguage": "fra",
        "audioPresets": [
            {
                "id": 1,
                "switchGroups": [ { "id": 9, "activeObject": 4 } ],
                "objects": [ { "id": 7, "elevation": { "offset": -5.0 }, "prominence": { "level": 3.0 } } ]
            },
            { "id": 2, "active": true, "objects": [ { "id": 8, "muting": { "value": false } } ] }
        ]
    });

    let events = compile(changes, Some(&scene)).unwrap();
    assert_eq!(codes(&events), vec![71, 41, 43, 60, 30, 40]);
    assert_eq!(events[4].param_int, Some(2));
}

#[test]
fn test_encoded_events() {
    let scene = baseline(SCENE_V9);
    let changes = parse_scene_changes(&json!({
        "uuid": UUID_V9,
        "displayLanguage": "deu",
        "audioPresets": [ { "id": 2, "active": true } ]
    }))
    .unwrap();

    let events = compile_action_events(&changes, Some(&scene), Some("eng")).unwrap();
    assert_eq!(
        events,
        vec![
            "<?xml version=\"1.0\"?>\n<ActionEvent uuid=\"00000000-0000-0000-0000-000000000000\" actionType=\"71\" version=\"9.0\" paramInt=\"0\" paramText=\"deu\"/>\n".to_string(),
            format!("<?xml version=\"1.0\"?>\n<ActionEvent uuid=\"{}\" actionType=\"30\" version=\"9.0\" paramInt=\"2\"/>\n", UUID_V9),
        ]
    );
}
