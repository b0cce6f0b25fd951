//! AudioScene XML parser implementation
//!
//! Walks a roxmltree document and builds the scene model. Every leaf value is
//! fetched through `mandatory_attribute`/`optional_attribute`, so a missing,
//! mistyped or out-of-range attribute aborts the whole parse with an error
//! naming the node and the attribute.

use roxmltree::{Document, Node, ParsingOptions};

use super::errors::ParseError;
use crate::models::scene::*;

pub type ParseResult<T> = Result<T, ParseError>;

const PRESET_TABLE: &str = "PresetTable";
const CONTENT_KIND_TABLE: &str = "ContentKindTable";
const SWITCH_KIND_TABLE: &str = "SwitchKindTable";

/// Parse an AudioScene XML document
pub fn parse_audio_scene(xml: &str) -> ParseResult<AudioSceneConfig> {
    // The UI manager may emit a DOCTYPE; roxmltree rejects DTDs unless allowed.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ParseError::InvalidXml(e.to_string()))?;

    parse_audio_scene_node(doc.root_element())
}

/// Parse an already-parsed AudioScene root element
pub fn parse_audio_scene_node(node: Node) -> ParseResult<AudioSceneConfig> {
    let drc_info = match get_child(node, "DRCInfo") {
        Some(drc) => parse_drc_info(drc)?,
        None => DrcInfo::default(),
    };

    let presets = match get_child(node, "presets") {
        Some(presets) => parse_children(presets, "preset", parse_preset)?,
        None => Vec::new(),
    };

    // Version 9 lists the active preset's objects on scene level
    let mut audio_elements = parse_children(node, "audioElement", parse_audio_element)?;
    audio_elements.extend(parse_children(node, "nonInteractiveAudioElement", parse_audio_element)?);

    let mut switch_groups =
        parse_children(node, "nonInteractiveAudioElementSwitch", parse_non_interactive_switch_group)?;
    switch_groups.extend(parse_children(node, "audioElementSwitch", parse_switch_group)?);

    let uuid: String = mandatory_attribute(node, "uuid")?;
    let version: String = mandatory_attribute(node, "version")?;
    if SceneVersion::from_tag(&version).is_none() {
        return Err(ParseError::InvalidVersion(version));
    }
    let config_changed = optional_attribute(node, "configChange")?.unwrap_or(false);

    log::debug!(
        "Parsed AudioScene {} (version {}): {} presets, {} scene-level elements, {} scene-level switch groups",
        uuid,
        version,
        presets.len(),
        audio_elements.len(),
        switch_groups.len()
    );

    Ok(AudioSceneConfig {
        uuid,
        version,
        config_changed,
        drc_info,
        presets,
        audio_elements,
        switch_groups,
    })
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Get first child element with given tag name
pub fn get_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// Get the concatenated text content of a node
pub fn get_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn node_name(node: Node) -> String {
    node.tag_name().name().to_string()
}

/// Parse every direct child named `tag`, in document order
fn parse_children<T, F>(node: Node, tag: &str, parse: F) -> ParseResult<Vec<T>>
where
    F: Fn(Node) -> ParseResult<T>,
{
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .map(parse)
        .collect()
}

/// Parse the first child named `tag`; its absence is not an error
fn parse_optional_child<T, F>(node: Node, tag: &str, parse: F) -> ParseResult<Option<T>>
where
    F: Fn(Node) -> ParseResult<T>,
{
    get_child(node, tag).map(parse).transpose()
}

/// Typed conversion of a raw attribute value
trait AttributeValue: Sized {
    fn from_attribute(node: Node, name: &str, raw: &str) -> ParseResult<Self>;
}

impl AttributeValue for String {
    fn from_attribute(_node: Node, _name: &str, raw: &str) -> ParseResult<Self> {
        Ok(raw.to_string())
    }
}

impl AttributeValue for bool {
    fn from_attribute(node: Node, name: &str, raw: &str) -> ParseResult<Self> {
        match raw.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(invalid_attribute(node, name, raw, "boolean")),
        }
    }
}

impl AttributeValue for f32 {
    fn from_attribute(node: Node, name: &str, raw: &str) -> ParseResult<Self> {
        raw.trim()
            .parse::<f32>()
            .map_err(|_| invalid_attribute(node, name, raw, "floating-point"))
    }
}

macro_rules! impl_integral_attribute {
    ($($ty:ty),*) => {
        $(impl AttributeValue for $ty {
            fn from_attribute(node: Node, name: &str, raw: &str) -> ParseResult<Self> {
                let value = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| invalid_attribute(node, name, raw, "integral"))?;
                <$ty>::try_from(value).map_err(|_| ParseError::OutOfRange {
                    node: node_name(node),
                    attribute: name.to_string(),
                    value,
                })
            }
        })*
    };
}

impl_integral_attribute!(i32, u8, u32);

fn invalid_attribute(node: Node, name: &str, raw: &str, expected: &'static str) -> ParseError {
    ParseError::InvalidAttribute {
        node: node_name(node),
        attribute: name.to_string(),
        value: raw.to_string(),
        expected,
    }
}

fn optional_attribute<T: AttributeValue>(node: Node, name: &str) -> ParseResult<Option<T>> {
    node.attribute(name)
        .map(|raw| T::from_attribute(node, name, raw))
        .transpose()
}

fn mandatory_attribute<T: AttributeValue>(node: Node, name: &str) -> ParseResult<T> {
    optional_attribute(node, name)?.ok_or_else(|| ParseError::MissingAttribute {
        node: node_name(node),
        attribute: name.to_string(),
    })
}

// ============================================================================
// DESCRIPTORS AND TABLES
// ============================================================================

fn parse_drc_info(node: Node) -> ParseResult<DrcInfo> {
    let available_effects = parse_children(node, "drcSetEffectAvailable", |entry| {
        mandatory_attribute::<u32>(entry, "index")
    })?;
    Ok(DrcInfo { available_effects })
}

fn parse_localized_string(node: Node) -> ParseResult<LocalizedString> {
    Ok(LocalizedString {
        lang_code: mandatory_attribute(node, "langCode")?,
        value: get_text(node),
    })
}

fn parse_descriptions(node: Node) -> ParseResult<Vec<LocalizedString>> {
    parse_children(node, "description", parse_localized_string)
}

fn parse_custom_descriptor(node: Node) -> ParseResult<CustomDescriptor> {
    Ok(CustomDescriptor {
        description: parse_descriptions(node)?,
    })
}

fn parse_custom_audio_element_kind(node: Node) -> ParseResult<CustomAudioElementKind> {
    Ok(CustomAudioElementKind {
        description: parse_descriptions(node)?,
        lang_code: optional_attribute(node, "langCode")?,
    })
}

/// Read `code`/`alias` and check the literal `table` name
fn parse_table(node: Node, expected: &'static str) -> ParseResult<(u8, Option<String>)> {
    let code = mandatory_attribute(node, "code")?;
    let alias = optional_attribute(node, "alias")?;
    let table: String = mandatory_attribute(node, "table")?;
    if table != expected {
        return Err(ParseError::InvalidTable { expected, found: table });
    }
    Ok((code, alias))
}

fn parse_preset_table(node: Node) -> ParseResult<PresetTable> {
    let (code, alias) = parse_table(node, PRESET_TABLE)?;
    Ok(PresetTable { code, alias })
}

fn parse_switch_kind_table(node: Node) -> ParseResult<SwitchKindTable> {
    let (code, alias) = parse_table(node, SWITCH_KIND_TABLE)?;
    Ok(SwitchKindTable { code, alias })
}

fn parse_audio_element_kind(node: Node) -> ParseResult<AudioElementKind> {
    let (code, alias) = parse_table(node, CONTENT_KIND_TABLE)?;
    Ok(AudioElementKind {
        code,
        alias,
        lang_code: optional_attribute(node, "langCode")?,
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn parse_prominence(node: Node) -> ParseResult<ProminenceLevelProperty> {
    Ok(ProminenceLevelProperty {
        is_action_allowed: mandatory_attribute(node, "isActionAllowed")?,
        min_value: mandatory_attribute(node, "min")?,
        max_value: mandatory_attribute(node, "max")?,
        current_value: mandatory_attribute(node, "val")?,
        default_value: mandatory_attribute(node, "def")?,
    })
}

fn parse_muting(node: Node) -> ParseResult<MutingProperty> {
    Ok(MutingProperty {
        is_action_allowed: mandatory_attribute(node, "isActionAllowed")?,
        current_value: mandatory_attribute(node, "val")?,
        default_value: mandatory_attribute(node, "def")?,
    })
}

fn parse_azimuth(node: Node) -> ParseResult<AzimuthProperty> {
    Ok(AzimuthProperty {
        is_action_allowed: mandatory_attribute(node, "isActionAllowed")?,
        min_value: mandatory_attribute(node, "min")?,
        max_value: mandatory_attribute(node, "max")?,
        current_value: mandatory_attribute(node, "val")?,
        default_value: mandatory_attribute(node, "def")?,
    })
}

fn parse_elevation(node: Node) -> ParseResult<ElevationProperty> {
    Ok(ElevationProperty {
        is_action_allowed: mandatory_attribute(node, "isActionAllowed")?,
        min_value: mandatory_attribute(node, "min")?,
        max_value: mandatory_attribute(node, "max")?,
        current_value: mandatory_attribute(node, "val")?,
        default_value: mandatory_attribute(node, "def")?,
    })
}

// ============================================================================
// AUDIO ELEMENTS, SWITCH GROUPS, PRESETS
// ============================================================================

fn parse_audio_element(node: Node) -> ParseResult<AudioElement> {
    Ok(AudioElement {
        prominence: parse_optional_child(node, "prominenceLevelProp", parse_prominence)?,
        muting: parse_optional_child(node, "mutingProp", parse_muting)?,
        azimuth: parse_optional_child(node, "azimuthProp", parse_azimuth)?,
        elevation: parse_optional_child(node, "elevationProp", parse_elevation)?,
        kind: parse_optional_child(node, "kind", parse_audio_element_kind)?,
        custom_kind: parse_optional_child(node, "customKind", parse_custom_audio_element_kind)?,
        id: mandatory_attribute(node, "id")?,
        is_available: mandatory_attribute(node, "isAvailable")?,
    })
}

fn parse_switch_item(node: Node, interactive: bool) -> ParseResult<AudioElementSwitchItem> {
    let kind = parse_optional_child(node, "kind", parse_audio_element_kind)?;
    let custom_kind = parse_optional_child(node, "customKind", parse_custom_audio_element_kind)?;
    let id = mandatory_attribute(node, "id")?;
    let is_available = mandatory_attribute(node, "isAvailable")?;

    // A non-interactive group has exactly one item, which is always in use
    let (is_active, is_default, is_selectable) = if interactive {
        (
            mandatory_attribute(node, "isActive")?,
            mandatory_attribute(node, "isDefault")?,
            optional_attribute(node, "isSelectable")?.unwrap_or(true),
        )
    } else {
        (true, true, true)
    };

    Ok(AudioElementSwitchItem {
        id,
        is_available,
        is_active,
        is_default,
        is_selectable,
        kind,
        custom_kind,
    })
}

fn parse_switch_group(node: Node) -> ParseResult<AudioElementSwitch> {
    let items_node = get_child(node, "audioElements").ok_or_else(|| ParseError::MissingElement {
        node: node_name(node),
        element: "audioElements".to_string(),
    })?;

    Ok(AudioElementSwitch {
        prominence: parse_optional_child(node, "prominenceLevelProp", parse_prominence)?,
        muting: parse_optional_child(node, "mutingProp", parse_muting)?,
        azimuth: parse_optional_child(node, "azimuthProp", parse_azimuth)?,
        elevation: parse_optional_child(node, "elevationProp", parse_elevation)?,
        items: parse_children(items_node, "audioElement", |item| parse_switch_item(item, true))?,
        kind: parse_optional_child(node, "kind", parse_switch_kind_table)?,
        custom_kind: parse_optional_child(node, "customKind", parse_custom_descriptor)?,
        id: mandatory_attribute(node, "id")?,
        is_available: mandatory_attribute(node, "isAvailable")?,
        is_action_allowed: mandatory_attribute(node, "isActionAllowed")?,
    })
}

fn parse_non_interactive_switch_group(node: Node) -> ParseResult<AudioElementSwitch> {
    let item_node = get_child(node, "audioElement").ok_or_else(|| ParseError::MissingElement {
        node: node_name(node),
        element: "audioElement".to_string(),
    })?;

    Ok(AudioElementSwitch {
        prominence: None,
        muting: None,
        azimuth: None,
        elevation: None,
        items: vec![parse_switch_item(item_node, false)?],
        kind: parse_optional_child(node, "kind", parse_switch_kind_table)?,
        custom_kind: parse_optional_child(node, "customKind", parse_custom_descriptor)?,
        id: mandatory_attribute(node, "id")?,
        is_available: mandatory_attribute(node, "isAvailable")?,
        is_action_allowed: false,
    })
}

fn parse_preset(node: Node) -> ParseResult<Preset> {
    let kind = parse_optional_child(node, "kind", parse_preset_table)?;
    let custom_kind = parse_optional_child(node, "customKind", parse_custom_descriptor)?;
    let id = mandatory_attribute(node, "id")?;
    let is_active = mandatory_attribute(node, "isActive")?;
    let is_available = mandatory_attribute(node, "isAvailable")?;
    let is_default = mandatory_attribute(node, "isDefault")?;

    let mut audio_elements = parse_children(node, "audioElement", parse_audio_element)?;
    audio_elements.extend(parse_children(node, "nonInteractiveAudioElement", parse_audio_element)?);

    let mut switch_groups =
        parse_children(node, "nonInteractiveAudioElementSwitch", parse_non_interactive_switch_group)?;
    switch_groups.extend(parse_children(node, "audioElementSwitch", parse_switch_group)?);

    Ok(Preset {
        id,
        is_active,
        is_available,
        is_default,
        kind,
        custom_kind,
        audio_elements,
        switch_groups,
    })
}
