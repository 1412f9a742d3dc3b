use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Scalar;

/// A frame pushed on the notifications socket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPush {
    #[serde(default, deserialize_with = "super::lenient")]
    pub message: Option<Scalar>,
}

impl NotificationPush {
    /// Read a decoded frame of any shape. Frames that are not objects carry
    /// no message.
    pub fn from_frame(frame: &Value) -> Self {
        serde_json::from_value(frame.clone()).unwrap_or_default()
    }

    /// Toast text: the message, or "New notification".
    pub fn toast_text(&self) -> String {
        match super::scalar::truthy(&self.message) {
            Some(message) => message.to_string(),
            None => "New notification".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toast_text() {
        let push: NotificationPush =
            serde_json::from_str(r#"{"message":"Payment received","kind":"payment"}"#).unwrap();
        assert_eq!(push.toast_text(), "Payment received");

        let bare: NotificationPush = serde_json::from_str(r#"{"id":5}"#).unwrap();
        assert_eq!(bare.toast_text(), "New notification");
    }

    #[test]
    fn test_from_frame_of_any_shape() {
        let frames = [
            json!("hello"),
            json!([1, 2]),
            json!(42),
            json!(null),
            json!({ "message": { "text": "hi" } }),
            json!({ "message": [1] }),
            json!({ "message": "" }),
        ];
        for frame in frames {
            assert_eq!(
                NotificationPush::from_frame(&frame).toast_text(),
                "New notification",
                "frame {frame}"
            );
        }

        let numeric = NotificationPush::from_frame(&json!({ "message": 3 }));
        assert_eq!(numeric.toast_text(), "3");
    }
}
