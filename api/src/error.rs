use async_graphql::{Context, Error, ErrorExtensions};
use reqwest::StatusCode;

/// Failures surfaced by customer resolvers
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The request was rejected before reaching the store
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("customer store unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("customer store responded with status {status}")]
    Status { status: u16, body: String },
    #[error("customer store response does not match the Customer shape: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl StoreError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "BAD_USER_INPUT",
            Self::Transport(_) => "UPSTREAM_UNAVAILABLE",
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND.as_u16() => {
                "NOT_FOUND"
            },
            Self::Status { .. } => "UPSTREAM_ERROR",
            Self::MalformedResponse(_) => "UPSTREAM_MALFORMED",
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());

            if let Self::Status { status, body } = self {
                e.set("status", i32::from(*status));
                e.set("body", body.clone());
            }
        })
    }
}

/// Turns a store result into a nullable field value. A failure is recorded as
/// an error entry for the current field and the field resolves to null, so
/// sibling fields, including later mutations, still run.
pub fn nullable<T>(ctx: &Context<'_>, res: Result<T, StoreError>) -> Option<T> {
    match res {
        Ok(value) => Some(value),
        Err(e) => {
            ctx.add_error(e.extend().into_server_error(ctx.item.pos));

            None
        },
    }
}
