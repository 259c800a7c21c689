use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// HTTP method a presigned request is signed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Download an object.
    Get,
    /// Upload an object.
    Put,
    /// Remove an object.
    Delete,
    /// Read object metadata.
    Head,
    /// Browser-based form upload.
    Post,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_method_wire_names() {
        let names: Vec<_> = Method::iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["GET", "PUT", "DELETE", "HEAD", "POST"]);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(Method::from_str("PUT").unwrap(), Method::Put);
        assert_eq!(Method::from_str("head").unwrap(), Method::Head);
        assert!(Method::from_str("PATCH").is_err());
    }

    #[test]
    fn test_method_serde() {
        let json = serde_json::to_string(&Method::Get).unwrap();
        assert_eq!(json, "\"GET\"");

        let method: Method = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(method, Method::Post);
    }
}
