use std::sync::atomic::{AtomicBool, Ordering};

use contactbox_core::contact::SubmitContactRequest;
use uuid::Uuid;

use super::api::ContactApi;
use super::error::FormError;
use super::file::ResumeFile;
use super::view::{FormView, Status};

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "Contact information submitted successfully!";

/// Values entered in the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Empty when the field was left blank.
    pub phone_number: String,
    pub resume: Option<ResumeFile>,
}

/// Builds the submit-contact payload from the form and the uploaded file URL.
///
/// A blank phone number is sent as `null`.
pub fn contact_payload(form: &ContactForm, file_url: Option<String>) -> SubmitContactRequest {
    SubmitContactRequest {
        first_name: Some(form.first_name.clone()),
        last_name: Some(form.last_name.clone()),
        email: Some(form.email.clone()),
        phone_number: Some(form.phone_number.clone()).filter(|p| !p.is_empty()),
        resume_url: file_url,
    }
}

/// Runs one contact submission at a time.
pub struct FormController<A> {
    api: A,
    in_flight: AtomicBool,
}

impl<A: ContactApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form.
    ///
    /// Returns the stored contact id. A call made while another submission
    /// is running fails with [`FormError::InFlight`] and leaves `view` alone.
    pub async fn submit<V: FormView>(
        &self,
        view: &mut V,
        form: &ContactForm,
    ) -> Result<Uuid, FormError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FormError::InFlight);
        }

        let mut busy = BusyGuard::engage(view, &self.in_flight);

        let outcome = self.run(form).await;
        match &outcome {
            Ok(_) => {
                busy.view().reset_form();
                busy.view().show_status(Status::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => busy.view().show_status(Status::Error(err.to_string())),
        }

        outcome
    }

    async fn run(&self, form: &ContactForm) -> Result<Uuid, FormError> {
        let file_url = match form.resume.as_ref().filter(|resume| !resume.is_empty()) {
            Some(resume) => Some(self.upload_resume(resume).await?),
            None => None,
        };

        let payload = contact_payload(form, file_url);
        let response = self
            .api
            .submit_contact(&payload)
            .await
            .map_err(FormError::Submit)?;

        Ok(response.contact_id)
    }

    /// Returns the public URL of the uploaded file.
    async fn upload_resume(&self, resume: &ResumeFile) -> Result<String, FormError> {
        let grant = self
            .api
            .request_upload_url(resume.file_name(), resume.content_type())
            .await
            .map_err(FormError::UploadUrl)?;

        let bytes = resume.read().await.map_err(FormError::Unexpected)?;

        self.api
            .upload_file(&grant.upload_url, resume.content_type(), bytes)
            .await
            .map_err(FormError::Upload)?;

        Ok(grant.file_url)
    }
}

/// Holds the view in its busy state.
///
/// Dropping it re-enables the submit control and releases the in-flight flag,
/// whichever way the pipeline exits.
struct BusyGuard<'a, V: FormView> {
    view: &'a mut V,
    in_flight: &'a AtomicBool,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn engage(view: &'a mut V, in_flight: &'a AtomicBool) -> Self {
        view.set_submit_enabled(false);
        view.set_submit_label(SUBMITTING_LABEL);
        view.clear_status();
        Self { view, in_flight }
    }

    fn view(&mut self) -> &mut V {
        self.view
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_submit_label(SUBMIT_LABEL);
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use contactbox_core::contact::{SubmitContactResponse, UploadUrlResponse};

    use super::*;
    use crate::error::{ClientError, Result};

    const UPLOAD_URL: &str = "http://storage.local/resumes/abc-cv.pdf?X-Amz-Expires=300";
    const FILE_URL: &str = "https://cdn.example.com/resumes/abc-cv.pdf";

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        UploadUrl { file_name: String, file_type: String },
        Upload { url: String, content_type: String, bytes: Vec<u8> },
        Submit(SubmitContactRequest),
    }

    #[derive(Default)]
    struct ScriptedApi {
        fail_upload_url: bool,
        fail_upload: bool,
        fail_submit: bool,
        yield_on_submit: bool,
        contact_id: Uuid,
        calls: Mutex<Vec<Call>>,
    }

    impl ScriptedApi {
        fn ok() -> Self {
            Self {
                contact_id: Uuid::new_v4(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn server_error() -> ClientError {
        ClientError::ServerError {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[async_trait]
    impl ContactApi for ScriptedApi {
        async fn request_upload_url(
            &self,
            file_name: &str,
            file_type: &str,
        ) -> Result<UploadUrlResponse> {
            self.record(Call::UploadUrl {
                file_name: file_name.to_string(),
                file_type: file_type.to_string(),
            });
            if self.fail_upload_url {
                return Err(server_error());
            }
            Ok(UploadUrlResponse {
                upload_url: UPLOAD_URL.to_string(),
                file_url: FILE_URL.to_string(),
            })
        }

        async fn upload_file(
            &self,
            upload_url: &str,
            content_type: &str,
            bytes: Vec<u8>,
        ) -> Result<()> {
            self.record(Call::Upload {
                url: upload_url.to_string(),
                content_type: content_type.to_string(),
                bytes,
            });
            if self.fail_upload {
                return Err(server_error());
            }
            Ok(())
        }

        async fn submit_contact(
            &self,
            request: &SubmitContactRequest,
        ) -> Result<SubmitContactResponse> {
            self.record(Call::Submit(request.clone()));
            if self.yield_on_submit {
                tokio::task::yield_now().await;
            }
            if self.fail_submit {
                return Err(server_error());
            }
            Ok(SubmitContactResponse::saved(self.contact_id))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Enabled(bool),
        Label(String),
        ClearStatus,
        Status(Status),
        Reset,
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<ViewEvent>,
    }

    impl FormView for RecordingView {
        fn set_submit_enabled(&mut self, enabled: bool) {
            self.events.push(ViewEvent::Enabled(enabled));
        }

        fn set_submit_label(&mut self, label: &str) {
            self.events.push(ViewEvent::Label(label.to_string()));
        }

        fn clear_status(&mut self) {
            self.events.push(ViewEvent::ClearStatus);
        }

        fn show_status(&mut self, status: Status) {
            self.events.push(ViewEvent::Status(status));
        }

        fn reset_form(&mut self) {
            self.events.push(ViewEvent::Reset);
        }
    }

    fn busy_events() -> Vec<ViewEvent> {
        vec![
            ViewEvent::Enabled(false),
            ViewEvent::Label(SUBMITTING_LABEL.to_string()),
            ViewEvent::ClearStatus,
        ]
    }

    fn restore_events() -> Vec<ViewEvent> {
        vec![
            ViewEvent::Enabled(true),
            ViewEvent::Label(SUBMIT_LABEL.to_string()),
        ]
    }

    fn form() -> ContactForm {
        ContactForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: String::new(),
            resume: None,
        }
    }

    fn form_with_resume() -> ContactForm {
        ContactForm {
            resume: Some(ResumeFile::from_bytes(
                "cv.pdf",
                "application/pdf",
                b"%PDF-1.7".to_vec(),
            )),
            ..form()
        }
    }

    fn error_events(message: &str) -> Vec<ViewEvent> {
        let mut events = busy_events();
        events.push(ViewEvent::Status(Status::Error(message.to_string())));
        events.extend(restore_events());
        events
    }

    #[test]
    fn test_contact_payload_blank_phone_is_null() {
        let payload = contact_payload(&form(), None);
        assert_eq!(
            payload,
            SubmitContactRequest::new("Jane", "Doe", "jane@example.com")
        );
    }

    #[test]
    fn test_contact_payload_with_phone_and_file() {
        let form = ContactForm {
            phone_number: "+1 555 0100".to_string(),
            ..form()
        };
        let payload = contact_payload(&form, Some(FILE_URL.to_string()));
        assert_eq!(
            payload,
            SubmitContactRequest::new("Jane", "Doe", "jane@example.com")
                .with_phone_number("+1 555 0100")
                .with_resume_url(FILE_URL)
        );
    }

    #[tokio::test]
    async fn test_submit_with_resume_runs_steps_in_order() {
        let api = ScriptedApi::ok();
        let contact_id = api.contact_id;
        let controller = FormController::new(api);
        let mut view = RecordingView::default();

        let id = controller
            .submit(&mut view, &form_with_resume())
            .await
            .unwrap();

        assert_eq!(id, contact_id);
        assert_eq!(
            controller.api.calls(),
            vec![
                Call::UploadUrl {
                    file_name: "cv.pdf".to_string(),
                    file_type: "application/pdf".to_string(),
                },
                Call::Upload {
                    url: UPLOAD_URL.to_string(),
                    content_type: "application/pdf".to_string(),
                    bytes: b"%PDF-1.7".to_vec(),
                },
                Call::Submit(
                    SubmitContactRequest::new("Jane", "Doe", "jane@example.com")
                        .with_resume_url(FILE_URL)
                ),
            ]
        );

        let mut expected = busy_events();
        expected.push(ViewEvent::Reset);
        expected.push(ViewEvent::Status(Status::Success(SUCCESS_MESSAGE.to_string())));
        expected.extend(restore_events());
        assert_eq!(view.events, expected);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_submit_without_resume_skips_upload() {
        let controller = FormController::new(ScriptedApi::ok());
        let mut view = RecordingView::default();

        controller.submit(&mut view, &form()).await.unwrap();

        assert_eq!(
            controller.api.calls(),
            vec![Call::Submit(SubmitContactRequest::new(
                "Jane",
                "Doe",
                "jane@example.com"
            ))]
        );
    }

    #[tokio::test]
    async fn test_submit_with_empty_resume_skips_upload() {
        let controller = FormController::new(ScriptedApi::ok());
        let mut view = RecordingView::default();
        let form = ContactForm {
            resume: Some(ResumeFile::from_bytes("cv.pdf", "application/pdf", Vec::new())),
            ..form()
        };

        controller.submit(&mut view, &form).await.unwrap();

        let calls = controller.api.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], Call::Submit(req) if req.resume_url.is_none()));
    }

    #[tokio::test]
    async fn test_upload_url_failure_halts_pipeline() {
        let controller = FormController::new(ScriptedApi {
            fail_upload_url: true,
            ..ScriptedApi::ok()
        });
        let mut view = RecordingView::default();

        let err = controller
            .submit(&mut view, &form_with_resume())
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::UploadUrl(_)));
        assert_eq!(controller.api.calls().len(), 1);
        assert_eq!(view.events, error_events("Failed to get upload URL"));
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_upload_failure_skips_submit() {
        let controller = FormController::new(ScriptedApi {
            fail_upload: true,
            ..ScriptedApi::ok()
        });
        let mut view = RecordingView::default();

        let err = controller
            .submit(&mut view, &form_with_resume())
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::Upload(_)));
        let calls = controller.api.calls();
        assert_eq!(calls.len(), 2);
        assert!(!calls.iter().any(|c| matches!(c, Call::Submit(_))));
        assert_eq!(view.events, error_events("Failed to upload resume"));
    }

    #[tokio::test]
    async fn test_submit_failure_does_not_reset_form() {
        let controller = FormController::new(ScriptedApi {
            fail_submit: true,
            ..ScriptedApi::ok()
        });
        let mut view = RecordingView::default();

        let err = controller.submit(&mut view, &form()).await.unwrap_err();

        assert!(matches!(err, FormError::Submit(_)));
        assert!(!view.events.contains(&ViewEvent::Reset));
        assert_eq!(view.events, error_events("Failed to submit contact information"));
    }

    #[tokio::test]
    async fn test_unreadable_resume_shows_fallback_message() {
        let dir = std::env::temp_dir().join(format!("contactbox-gone-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("cv.pdf");
        tokio::fs::write(&path, b"%PDF").await.unwrap();
        let resume = ResumeFile::from_path(&path, None).await.unwrap();
        tokio::fs::remove_dir_all(&dir).await.unwrap();

        let controller = FormController::new(ScriptedApi::ok());
        let mut view = RecordingView::default();
        let form = ContactForm {
            resume: Some(resume),
            ..form()
        };

        let err = controller.submit(&mut view, &form).await.unwrap_err();

        assert!(matches!(err, FormError::Unexpected(_)));
        assert_eq!(
            view.events,
            error_events("An error occurred. Please try again.")
        );
        assert_eq!(controller.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let controller = FormController::new(ScriptedApi {
            yield_on_submit: true,
            ..ScriptedApi::ok()
        });
        let mut first_view = RecordingView::default();
        let mut second_view = RecordingView::default();
        let form = form();

        let (first, second) = tokio::join!(
            controller.submit(&mut first_view, &form),
            controller.submit(&mut second_view, &form),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(FormError::InFlight)));
        assert!(second_view.events.is_empty());
        assert_eq!(controller.api.calls().len(), 1);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_controller_is_reusable_after_failure() {
        let controller = FormController::new(ScriptedApi {
            fail_submit: true,
            ..ScriptedApi::ok()
        });
        let mut view = RecordingView::default();

        assert!(controller.submit(&mut view, &form()).await.is_err());
        assert!(controller.submit(&mut view, &form()).await.is_err());
        assert_eq!(controller.api.calls().len(), 2);
    }
}
