//! Plain `{"msg": ...}` bodies used for errors and delete confirmations.

use serde::Serialize;

#[derive(Serialize)]
pub struct Msg {
    pub msg: String,
}

impl Msg {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_msg_key() {
        let body = serde_json::to_value(Msg::new("Planet deleted")).unwrap();
        assert_eq!(body, serde_json::json!({"msg": "Planet deleted"}));
    }
}
