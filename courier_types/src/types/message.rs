use std::collections::BTreeMap;

/// A queued message: a required payload plus optional metadata.
///
/// An absent `attributes` mapping is distinct from an empty one; both
/// survive a codec round-trip unchanged. `message_id` is assigned by the
/// broker, so it is absent on a message that has not been sent yet.
///
/// A `Message` is constructed once and immutable thereafter. Structural
/// equality and hashing are derived, so consumers may key dedup collections
/// on messages directly.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Message {
    pub payload: Vec<u8>,
    pub attributes: Option<BTreeMap<String, String>>,
    pub message_id: Option<String>,
    pub topic: Option<String>,
}

impl Message {
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            attributes: None,
            message_id: None,
            topic: None,
        }
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_message_id(mut self, message_id: String) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn with_topic(mut self, topic: String) -> Self {
        self.topic = Some(topic);
        self
    }
}
