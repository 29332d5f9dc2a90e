use super::{SELECT_FILE_NOTICE, UPLOAD_FAILED_TEXT};
use crate::{
    api::DocumentApi,
    page::{Content, Control, Page, Region},
};
use tracing::{error, info, warn};

/// How an upload call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    NoFileSelected,
    /// The service's message was shown in the status region.
    Displayed(String),
    Failed,
}

/// Sends the selected file to the upload endpoint and shows the returned
/// status message. Failures end up in the status region, never in the caller.
pub async fn upload_pdf(page: &dyn Page, api: &dyn DocumentApi) -> UploadOutcome {
    let Some(file) = page.read_file(Control::FilePicker).await else {
        warn!("Upload requested without a selected file");
        page.notify(SELECT_FILE_NOTICE).await;
        return UploadOutcome::NoFileSelected;
    };

    let file_name = file.file_name.clone();
    match api.upload(file).await {
        Ok(response) => {
            info!("Upload of {} answered: {}", file_name, response.message);
            page.write(Region::UploadStatus, Content::Text(response.message.clone()))
                .await;
            UploadOutcome::Displayed(response.message)
        }
        Err(e) => {
            error!("Upload of {} failed: {}", file_name, e);
            page.write(
                Region::UploadStatus,
                Content::Text(UPLOAD_FAILED_TEXT.to_string()),
            )
            .await;
            UploadOutcome::Failed
        }
    }
}
