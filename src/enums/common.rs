use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint answers with.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Which partition of the transaction history is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Ongoing,
    Past,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Ongoing, ViewMode::Past];

    pub fn get_enum_from_str(value: Option<&str>) -> Option<Self> {
        match value? {
            "ongoing" => Some(ViewMode::Ongoing),
            "past" => Some(ViewMode::Past),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Ongoing => "ongoing",
            ViewMode::Past => "past",
        }
    }

    /// Segment label shown on the transactions screen.
    pub fn human_readable(&self) -> &'static str {
        match self {
            ViewMode::Ongoing => "Ongoing",
            ViewMode::Past => "Past",
        }
    }

    /// Value of `status.completed` a transaction needs to show up in this mode.
    pub fn wants_completed(&self) -> bool {
        matches!(self, ViewMode::Past)
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payload type with no `Default` impl, like every model the backend returns.
    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: i32,
    }

    #[test]
    fn envelope_decodes_payload_without_default() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"status":"ok","data":{"id":4},"error":null}"#).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.data, Some(Payload { id: 4 }));
    }

    #[test]
    fn envelope_tolerates_absent_data_and_error() {
        let resp: ApiResponse<Vec<Payload>> = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(!resp.is_ok());
        assert_eq!(resp.data, None);
        assert_eq!(resp.error, None);
    }
}
