use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Endpoints,
    error::Error,
    types::{AccessToken, Credentials, TokenErrorResponse},
    utils,
};

/// Requests an app access token with the OAuth 2.0 client credentials grant.
///
/// The client id and secret are sent base64-encoded in a `Basic`
/// authorization header as Spotify's token endpoint expects.
///
/// # Arguments
///
/// * `endpoints` - Where the token endpoint lives
/// * `credentials` - Client id and secret of the registered Spotify app
///
/// # Returns
///
/// - `Ok(AccessToken)` - Token to be sent as `Bearer` on Web API requests
/// - `Err(Error::Auth)` - The endpoint rejected the credentials; the message
///   carries Spotify's `error` / `error_description`
/// - `Err(Error::Http)` - Network failure or undecodable response
///
/// # Example
///
/// ```
/// let token = request_token(&Endpoints::default(), &credentials).await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<AccessToken, Error> {
    let pb = utils::spinner("Authenticating with Spotify...");
    let result = send_token_request(endpoints, credentials).await;
    pb.finish_and_clear();
    result
}

async fn send_token_request(
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<AccessToken, Error> {
    let basic = STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ));

    log::debug!("requesting client credentials token from {}", endpoints.token_url);
    let client = Client::new();
    let response = client
        .post(&endpoints.token_url)
        .header(AUTHORIZATION, format!("Basic {basic}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<AccessToken>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let reason = match serde_json::from_str::<TokenErrorResponse>(&body) {
        Ok(TokenErrorResponse {
            error,
            error_description: Some(description),
        }) => format!("error: {error}, error_description: {description}"),
        Ok(TokenErrorResponse { error, .. }) => format!("error: {error}"),
        Err(_) => format!("token endpoint returned {status}"),
    };

    Err(Error::Auth(reason))
}
