use crate::error::ConfigurationError;

/// Where the model lives. Every field is required and checked up front, so a
/// constructed config always names a reachable-looking endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    project_id: String,
    location: String,
    prediction_endpoint_id: String,
}

impl EndpointConfig {
    /// `prediction_endpoint_id` is either a bare endpoint id or a full
    /// `projects/P/locations/L/endpoints/ID` resource name.
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        prediction_endpoint_id: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            project_id: project_id.into(),
            location: location.into(),
            prediction_endpoint_id: prediction_endpoint_id.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn prediction_endpoint_id(&self) -> &str {
        &self.prediction_endpoint_id
    }

    /// Fully qualified endpoint resource name used on the wire.
    pub fn endpoint_name(&self) -> String {
        if parse_resource_name(&self.prediction_endpoint_id).is_some() {
            return self.prediction_endpoint_id.clone();
        }
        format!(
            "projects/{}/locations/{}/endpoints/{}",
            self.project_id, self.location, self.prediction_endpoint_id
        )
    }

    /// Region that serves the endpoint. A full resource name wins over the
    /// configured location.
    pub fn endpoint_location(&self) -> &str {
        parse_resource_name(&self.prediction_endpoint_id)
            .map(|(_, location, _)| location)
            .unwrap_or(self.location.as_str())
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        require("project_id", &self.project_id)?;
        require("location", &self.location)?;
        require("prediction_endpoint_id", &self.prediction_endpoint_id)?;

        if self.project_id.contains('/') || self.project_id.contains(char::is_whitespace) {
            return Err(ConfigurationError::Invalid {
                field: "project_id",
                reason: format!("{:?} is not a project id", self.project_id),
            });
        }

        if !self
            .location
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigurationError::Invalid {
                field: "location",
                reason: format!("{:?} is not a region name", self.location),
            });
        }

        let endpoint = &self.prediction_endpoint_id;
        if endpoint.contains(char::is_whitespace)
            || (endpoint.contains('/') && parse_resource_name(endpoint).is_none())
        {
            return Err(ConfigurationError::Invalid {
                field: "prediction_endpoint_id",
                reason: format!(
                    "{endpoint:?} is neither an endpoint id nor \
                     projects/<project>/locations/<location>/endpoints/<id>"
                ),
            });
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        Err(ConfigurationError::Missing(field))
    } else {
        Ok(())
    }
}

/// Splits `projects/P/locations/L/endpoints/ID` into `(P, L, ID)`.
fn parse_resource_name(name: &str) -> Option<(&str, &str, &str)> {
    let parts: Vec<&str> = name.split('/').collect();
    match parts.as_slice() {
        ["projects", project, "locations", location, "endpoints", id]
            if !project.is_empty() && !location.is_empty() && !id.is_empty() =>
        {
            Some((*project, *location, *id))
        }
        _ => None,
    }
}
