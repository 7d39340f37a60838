use thiserror::Error;

/// Errors raised by the assistant, optimizer, and visualizer.
#[derive(Debug, Error)]
pub enum AresError {
    #[error("Please enter a question first.")]
    MissingQuery,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    #[error("training set has {rows} rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },

    #[error("no candidate layouts to score")]
    NoCandidates,

    #[error("background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl AresError {
    /// Whether the error was caused by the caller's input rather than by us.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::MissingQuery | Self::OutOfRange { .. })
    }
}

pub type Result<T, E = AresError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_uses_warning_text() {
        assert_eq!(
            AresError::MissingQuery.to_string(),
            "Please enter a question first."
        );
    }

    #[test]
    fn out_of_range_names_the_control() {
        let err = AresError::OutOfRange {
            field: "crew_size".to_string(),
            value: 9.0,
            min: 2.0,
            max: 8.0,
        };
        assert_eq!(err.to_string(), "crew_size must be between 2 and 8, got 9");
        assert!(err.is_user_error());
        assert!(!AresError::EmptyTrainingSet.is_user_error());
    }

    #[tokio::test]
    async fn failed_task_is_an_internal_error() {
        let join_err = tokio::spawn(async { panic!("worker died") })
            .await
            .unwrap_err();
        let err = AresError::from(join_err);
        assert!(!err.is_user_error());
        assert!(err.to_string().starts_with("background task failed"));
    }
}
