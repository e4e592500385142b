use crate::controller::SearchError;
use skycast_core::{AppError, ValidationError, WeatherError};
use skycast_weather::QueryError;

impl From<&SearchError> for AppError {
    fn from(e: &SearchError) -> Self {
        match e {
            SearchError::Invalid(QueryError::Empty) => {
                AppError::Validation(ValidationError::EmptyQuery)
            }
            SearchError::Invalid(QueryError::TooShort { min }) => {
                AppError::Validation(ValidationError::QueryTooShort { min: *min })
            }
            SearchError::Lookup(skycast_weather::WeatherError::NotFound(city)) => {
                AppError::Weather(WeatherError::CityNotFound(city.clone()))
            }
            SearchError::Lookup(err @ skycast_weather::WeatherError::Upstream(_)) => {
                AppError::Weather(WeatherError::ApiError(err.to_string()))
            }
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::from(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::UpstreamError;

    #[test]
    fn validation_errors_map_to_validation() {
        let app: AppError = SearchError::Invalid(QueryError::Empty).into();
        assert!(matches!(
            app,
            AppError::Validation(ValidationError::EmptyQuery)
        ));

        let app: AppError = SearchError::Invalid(QueryError::TooShort { min: 2 }).into();
        assert!(matches!(
            app,
            AppError::Validation(ValidationError::QueryTooShort { min: 2 })
        ));
    }

    #[test]
    fn too_short_message_follows_minimum() {
        let err = SearchError::Invalid(QueryError::TooShort { min: 4 });
        assert_eq!(
            err.user_message(),
            "City name must be at least 4 characters."
        );
    }

    #[test]
    fn not_found_keeps_city() {
        let err = SearchError::Lookup(skycast_weather::WeatherError::NotFound("Atlantis".into()));
        match AppError::from(&err) {
            AppError::Weather(WeatherError::CityNotFound(city)) => assert_eq!(city, "Atlantis"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn upstream_maps_to_api_error() {
        let err = SearchError::Lookup(
            UpstreamError::Status {
                status: 502,
                body: "bad gateway".into(),
            }
            .into(),
        );
        let app = AppError::from(&err);
        assert!(matches!(app, AppError::Weather(WeatherError::ApiError(ref s)) if s.contains("502")));
        assert_eq!(
            app.user_message(),
            "Something went wrong. Please try again later."
        );
    }
}
