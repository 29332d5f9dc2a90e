use async_trait::async_trait;
use docqa_client::{
    Error, Result,
    api::{AskResponse, DocumentApi, UploadResponse},
    page::{Content, Control, Page, Region, SelectedFile},
};
use mockall::mock;
use std::sync::{Arc, Mutex};

/// Page that records every write and notice, with pre-set control values.
#[derive(Debug, Default, Clone)]
pub struct RecordingPage {
    pub file: Option<SelectedFile>,
    pub question: Option<String>,
    pub writes: Arc<Mutex<Vec<(Region, Content)>>>,
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: SelectedFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn get_writes(&self) -> Vec<(Region, Content)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn get_notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    /// Last content written into a region, like reading it back off the page.
    pub fn region(&self, region: Region) -> Option<Content> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl Page for RecordingPage {
    async fn read_file(&self, control: Control) -> Option<SelectedFile> {
        match control {
            Control::FilePicker => self.file.clone(),
            Control::QuestionInput => None,
        }
    }

    async fn read_value(&self, control: Control) -> Option<String> {
        match control {
            Control::QuestionInput => self.question.clone(),
            Control::FilePicker => self.file.as_ref().map(|f| f.file_name.clone()),
        }
    }

    async fn write(&self, region: Region, content: Content) {
        self.writes.lock().unwrap().push((region, content));
    }

    async fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

/// Canned-response API that records what it was asked.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub upload_response: Option<UploadResponse>,
    pub ask_response: Option<AskResponse>,
    pub error: Option<String>,
    pub uploads: Arc<Mutex<Vec<SelectedFile>>>,
    pub questions: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload_message(mut self, message: &str) -> Self {
        self.upload_response = Some(UploadResponse {
            message: message.to_string(),
        });
        self
    }

    pub fn with_answer(mut self, answer: Option<&str>) -> Self {
        self.ask_response = Some(AskResponse {
            answer: answer.map(str::to_string),
            source: None,
        });
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_uploads(&self) -> Vec<SelectedFile> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn get_questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentApi for FakeApi {
    async fn upload(&self, file: SelectedFile) -> Result<UploadResponse> {
        self.uploads.lock().unwrap().push(file);

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        self.upload_response
            .clone()
            .ok_or_else(|| Error::malformed("missing field `message`"))
    }

    async fn ask(&self, question: &str) -> Result<AskResponse> {
        self.questions.lock().unwrap().push(question.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        Ok(self.ask_response.clone().unwrap_or_default())
    }
}

mock! {
    pub Api {}

    #[async_trait]
    impl DocumentApi for Api {
        async fn upload(&self, file: SelectedFile) -> Result<UploadResponse>;
        async fn ask(&self, question: &str) -> Result<AskResponse>;
    }
}
