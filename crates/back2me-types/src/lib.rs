pub mod api;
pub mod models;

#[cfg(test)]
mod tests {
    use super::models::PostStatus;

    #[test]
    fn post_status_parses_only_known_values() {
        assert_eq!("lost".parse::<PostStatus>().unwrap(), PostStatus::Lost);
        assert_eq!("found".parse::<PostStatus>().unwrap(), PostStatus::Found);
        assert!("Lost".parse::<PostStatus>().is_err());
        assert!("all".parse::<PostStatus>().is_err());
    }

    #[test]
    fn post_status_serializes_lowercase() {
        let json = serde_json::to_string(&PostStatus::Found).unwrap();
        assert_eq!(json, "\"found\"");
    }
}
