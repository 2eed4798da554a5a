//! Functions for loading video settings.

use super::errors::*;

/// A structure containing configuration data for the state cache. Everything
/// here can only narrow down what the backend reports, never widen it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoParams {
    /// Caps the number of tracked texture units below what the context supports.
    pub max_texture_units: Option<usize>,
    /// Specifies whether two-sided stencil should be used if the context
    /// supports it.
    pub two_sided_stencil: bool,
    /// Specifies whether issued and skipped calls should be counted.
    pub statistics: bool,
}

impl Default for VideoParams {
    fn default() -> Self {
        VideoParams {
            max_texture_units: None,
            two_sided_stencil: true,
            statistics: true,
        }
    }
}

impl VideoParams {
    /// Parses settings from a JSON document. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json() {
        let params = VideoParams::from_json(r#"{ "max_texture_units": 4 }"#).unwrap();
        assert_eq!(params.max_texture_units, Some(4));
        assert!(params.two_sided_stencil);
        assert!(params.statistics);
    }

    #[test]
    fn json_roundtrip() {
        let params = VideoParams {
            max_texture_units: Some(2),
            two_sided_stencil: false,
            statistics: false,
        };

        let json = params.to_json().unwrap();
        assert_eq!(VideoParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn malformed_json() {
        match VideoParams::from_json("{ max_texture_units: ") {
            Err(Error::Settings(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn errors_convert_into_crate_result() {
        fn load(json: &str) -> crate::errors::Result<VideoParams> {
            Ok(VideoParams::from_json(json)?)
        }

        assert!(load("{}").is_ok());

        let err = load("{").unwrap_err();
        assert!(format!("{}", err).starts_with("Invalid video settings"));
    }
}
