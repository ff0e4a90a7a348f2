use crate::routing::routing_path::RoutingPath;
use crate::routing::validation_error::ValidationError;

/// What the service layer hands back to the client: either a computed path
/// or the ordered list of everything wrong with the request, never both.
pub struct RouteResponse {
    errors: Vec<ValidationError>,
    path: Option<RoutingPath>,
}

impl RouteResponse {
    pub fn from_path(path: RoutingPath) -> RouteResponse {
        RouteResponse {
            errors: Vec::new(),
            path: Some(path),
        }
    }

    pub fn from_errors(errors: Vec<ValidationError>) -> RouteResponse {
        RouteResponse {
            errors,
            path: None,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors in check order, each exposing a message and, where it
    /// applies, the offending waypoint index.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn path(&self) -> Option<&RoutingPath> {
        self.path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_errors_has_no_path() {
        let response = RouteResponse::from_errors(vec![ValidationError::MissingPoints]);

        assert!(response.has_errors());
        assert!(response.path().is_none());
        assert_eq!(response.errors().len(), 1);
    }

    #[test]
    fn test_response_with_path_has_no_errors() {
        let response = RouteResponse::from_path(RoutingPath::new(vec![]));

        assert!(!response.has_errors());
        assert!(response.path().is_some());
    }
}
