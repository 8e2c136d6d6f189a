use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
    pub status_code: Option<StatusCode>,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: String) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    fn network_error(e: reqwest::Error) -> APIError {
        APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
            status_code: None,
        }
    }

    async fn check_status_code(res: Response, expected: StatusCode) -> APIResponse<Response> {
        let status = res.status();
        if status != expected {
            let message = res.text().await.unwrap_or_default();
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                message,
                status_code: Some(status),
            });
        }
        Ok(res)
    }

    async fn handle_api_response<T: DeserializeOwned>(
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::check_status_code(res, expected_status_code).await?;
        let status = res.status();
        res.json().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
            status_code: Some(status),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(&self.url(path))
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_api_response(res, expected_status_code).await
    }

    /// For endpoints that answer with an empty body.
    pub async fn delete(&self, path: String, expected_status_code: StatusCode) -> APIResponse<()> {
        let res = self
            .client
            .delete(&self.url(path))
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::check_status_code(res, expected_status_code)
            .await
            .map(|_| ())
    }

    pub async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(&self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn put<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .put(&self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_api_response(res, expected_status_code).await
    }
}
