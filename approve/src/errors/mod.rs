#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ApproveError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("'{0}' test not defined")]
    TestNotDefined(String),
    #[error("'{rule}' expects the '{parameter}' parameter")]
    MissingParameter { rule: String, parameter: String },
}
