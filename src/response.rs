//! Response checking shared by every call
//!
//! A response is classified before its body is touched. Anything but 200
//! becomes an [`Error::Response`]; the body is read only to carry the
//! service's explanation in the message.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, ResponseErrorKind, Result};

/// Fail with the classified error unless the status is 200
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    let Some(kind) = ResponseErrorKind::from_status(status) else {
        return Ok(response);
    };

    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    let err = Error::response(kind, status, &body);
    warn!("{} returned {} ({}): {}", path, status, kind, err);
    Err(err)
}

/// Check the status, then decode the JSON body
pub async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Check the status and drop the body
pub async fn empty(response: Response) -> Result<()> {
    check_status(response).await?;
    Ok(())
}

/// A number the service may send either as JSON number or as formatted string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub(crate) fn into_f64(self) -> Result<f64> {
        match self {
            LooseNumber::Number(n) => Ok(n),
            LooseNumber::Text(text) => text.trim().parse::<f64>().map_err(|e| {
                Error::Decode(serde::de::Error::custom(format!(
                    "expected a number, got {:?}: {}",
                    text, e
                )))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_number_accepts_both_forms() {
        let n: LooseNumber = serde_json::from_str("12.5").unwrap();
        assert_eq!(n.into_f64().unwrap(), 12.5);
        let n: LooseNumber = serde_json::from_str("\"37456.22\"").unwrap();
        assert_eq!(n.into_f64().unwrap(), 37456.22);
        let n: LooseNumber = serde_json::from_str("\"n/a\"").unwrap();
        assert!(matches!(n.into_f64(), Err(Error::Decode(_))));
    }
}
