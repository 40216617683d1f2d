pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
        assert!(!h.timestamp.is_empty());
    }

    #[test]
    fn health_serializes_status_and_timestamp() {
        let v = serde_json::to_value(types::Health::ok()).unwrap();
        assert_eq!(v["status"], "ok");
        assert!(v["timestamp"].is_string());
    }
}
