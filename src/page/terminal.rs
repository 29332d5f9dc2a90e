use super::{Content, Control, Page, Region, SelectedFile};
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

/// Page backed by the command line: controls are filled from arguments,
/// regions are printed to stdout and notices to stderr.
#[derive(Debug, Default, Clone)]
pub struct TerminalPage {
    file_path: Option<PathBuf>,
    question: Option<String>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

/// One printed line for a region write.
pub(crate) fn render_line(region: Region, content: &Content) -> String {
    format!("[{}] {}", region, content.as_str())
}

#[async_trait]
impl Page for TerminalPage {
    async fn read_file(&self, control: Control) -> Option<SelectedFile> {
        if control != Control::FilePicker {
            return None;
        }
        let path = self.file_path.as_ref()?;

        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Some(SelectedFile::new(file_name, bytes))
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn read_value(&self, control: Control) -> Option<String> {
        match control {
            Control::QuestionInput => self.question.clone(),
            Control::FilePicker => None,
        }
    }

    async fn write(&self, region: Region, content: Content) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", render_line(region, &content)) {
            error!("Failed to write to stdout: {}", e);
        }
    }

    async fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
