// ActionEvent XML builder

use quick_xml::escape::escape;

use crate::models::{ActionEvent, ACTION_EVENT_VERSION};

/// Builds one standalone ActionEvent document
pub struct ActionEventXmlBuilder {
    buffer: String,
}

impl ActionEventXmlBuilder {
    pub fn new(action_type: u8, uuid: &str) -> Self {
        let mut builder = Self {
            buffer: String::from("<?xml version=\"1.0\"?>\n<ActionEvent"),
        };
        builder.attribute("uuid", uuid);
        builder.attribute("actionType", &action_type.to_string());
        builder.attribute("version", ACTION_EVENT_VERSION);
        builder
    }

    pub fn attribute(&mut self, name: &str, value: &str) -> &mut Self {
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&escape(value));
        self.buffer.push('"');
        self
    }

    pub fn int(&mut self, name: &str, value: i32) -> &mut Self {
        self.attribute(name, &value.to_string())
    }

    /// Floats are written with six decimals
    pub fn float(&mut self, name: &str, value: f64) -> &mut Self {
        self.attribute(name, &format!("{:.6}", value))
    }

    pub fn boolean(&mut self, name: &str, value: bool) -> &mut Self {
        self.attribute(name, if value { "true" } else { "false" })
    }

    pub fn finalize(mut self) -> String {
        self.buffer.push_str("/>\n");
        self.buffer
    }
}

/// Serialize `event` as an ActionEvent XML document
pub fn encode_action_event(event: &ActionEvent) -> String {
    let mut builder = ActionEventXmlBuilder::new(event.action_type.code(), &event.uuid);
    if let Some(value) = event.param_int {
        builder.int("paramInt", value);
    }
    if let Some(value) = event.param_float {
        builder.float("paramFloat", value);
    }
    if let Some(value) = event.param_bool {
        builder.boolean("paramBool", value);
    }
    if let Some(value) = &event.param_text {
        builder.attribute("paramText", value);
    }
    builder.finalize()
}
