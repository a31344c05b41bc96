use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend answered with a GraphQL `errors` array.
    #[error("{operation} failed: {message}")]
    GraphQl { operation: String, message: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid GraphQL endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("product {id} not found")]
    ProductNotFound { id: String },

    #[error("pagination limit reached for {operation}: exceeded {max_pages} pages")]
    PaginationLimit {
        operation: &'static str,
        max_pages: usize,
    },

    #[error("pagination stalled after {collected} products: backend reported more pages but {reason}")]
    PaginationStalled { collected: usize, reason: &'static str },

    /// A field required to continue paging was null or absent.
    #[error("{operation} response is missing {field}")]
    IncompleteResponse {
        operation: &'static str,
        field: &'static str,
    },

    #[error("product id {id} returned twice during path enumeration")]
    DuplicateProductId { id: String },
}

impl CatalogError {
    /// Text shown to shoppers. Backend GraphQL errors are passed through
    /// verbatim; everything else uses the full error description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::GraphQl { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
