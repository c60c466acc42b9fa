//! Contact submission operations.

use contactbox_core::contact::{SubmitContactRequest, SubmitContactResponse};

use super::ContactboxClient;
use crate::error::Result;

impl ContactboxClient {
    /// Submit contact information.
    pub async fn submit_contact(
        &self,
        request: &SubmitContactRequest,
    ) -> Result<SubmitContactResponse> {
        let response = self
            .client
            .post(self.url("/api/submit-contact"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
