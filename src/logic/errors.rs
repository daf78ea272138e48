use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    ClientError,  // other HTTP 4xx
    NetworkError, // DNS, routing, etc.
    Io,           // local file could not be read
    Decode,       // body or image could not be parsed
    Other,
}

impl ErrorType {
    /// Short label shown in the status bar
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "conexão recusada",
            ErrorType::Timeout => "tempo esgotado",
            ErrorType::Unauthorized => "não autorizado",
            ErrorType::NotFound => "não encontrado",
            ErrorType::ServerError => "erro no servidor",
            ErrorType::ClientError => "requisição inválida",
            ErrorType::NetworkError => "erro de rede",
            ErrorType::Io => "erro de leitura",
            ErrorType::Decode => "resposta inválida",
            ErrorType::Other => "erro desconhecido",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = format!("{:#}", error).to_lowercase();

    // HTTP status codes take precedence over message sniffing
    let reqwest_err = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>());

    if let Some(reqwest_err) = reqwest_err {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                401 => ErrorType::Unauthorized,
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                400..=499 => ErrorType::ClientError,
                _ => ErrorType::Other,
            };
        }
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if reqwest_err.is_decode() {
            return ErrorType::Decode;
        }
        if reqwest_err.is_connect() && !error_msg.contains("refused") {
            return ErrorType::NetworkError;
        }
    } else {
        // Local failures (reading the upload file, decoding an image)
        for cause in error.chain() {
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ErrorType::Io;
            }
            if cause.downcast_ref::<image::ImageError>().is_some()
                || cause.downcast_ref::<serde_json::Error>().is_some()
            {
                return ErrorType::Decode;
            }
        }
    }

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the debug log - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_connection_refused_uppercase() {
        let err = anyhow::anyhow!("Connection Refused");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = anyhow::Error::new(io).context("Failed to read upload file");
        assert_eq!(classify_error(&err), ErrorType::Io);
    }

    #[test]
    fn test_classify_bad_json_body() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = anyhow::Error::new(parse_err).context("Failed to parse pictures response");
        assert_eq!(classify_error(&error), ErrorType::Decode);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to list photos");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_labels_are_distinct_for_http_classes() {
        assert_ne!(ErrorType::NotFound.label(), ErrorType::ServerError.label());
        assert_ne!(ErrorType::Unauthorized.label(), ErrorType::ClientError.label());
    }
}
