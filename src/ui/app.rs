use crate::clipboard::{ClipboardHandler, ClipboardSink};
use crate::mvi::Reducer;
use crate::ui::form::{FormIntent, FormReducer, FormState, Notice};
use crate::workflow::{Attachment, CopyError, Mode, SubmitOutcome, Workflow};

pub struct App {
    should_quit: bool,
    workflow: Workflow,
    /// Form chrome state (MVI pattern).
    form: FormState,
    /// Opened on first copy; headless sessions never need it.
    clipboard: Option<Box<dyn ClipboardSink>>,
    endpoint: String,
}

impl App {
    pub fn new(workflow: Workflow, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            workflow,
            form: FormState::default(),
            clipboard: None,
            endpoint: endpoint.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_busy(&self) -> bool {
        self.workflow.state().is_busy()
    }

    fn dispatch(&mut self, intent: FormIntent) {
        FormReducer::apply(&mut self.form, intent);
    }

    fn notify(&mut self, notice: Notice) {
        self.dispatch(FormIntent::Notify(notice));
    }

    pub fn on_tick(&mut self) {
        if self.workflow.poll_settlements() {
            tracing::debug!(state = ?self.workflow.submission(), "Submission settled");
        }
        if self.is_busy() {
            self.dispatch(FormIntent::AnimationTick);
        }
    }

    pub fn next_mode(&mut self) {
        self.select_mode(self.workflow.mode().next());
    }

    pub fn previous_mode(&mut self) {
        self.select_mode(self.workflow.mode().previous());
    }

    fn select_mode(&mut self, mode: Mode) {
        self.workflow.select_mode(mode);
        self.dispatch(FormIntent::ClearPath);
        self.dispatch(FormIntent::DismissNotice);
    }

    pub fn type_char(&mut self, ch: char) {
        match self.workflow.mode() {
            Mode::Text => {
                let mut text = self.current_text();
                text.push(ch);
                self.workflow.set_text(text);
            }
            Mode::Url => {
                let mut url = self.current_url();
                url.push(ch);
                self.workflow.set_url(url);
            }
            Mode::File => self.dispatch(FormIntent::TypePath(ch)),
        }
    }

    pub fn backspace(&mut self) {
        match self.workflow.mode() {
            Mode::Text => {
                let mut text = self.current_text();
                text.pop();
                self.workflow.set_text(text);
            }
            Mode::Url => {
                let mut url = self.current_url();
                url.pop();
                self.workflow.set_url(url);
            }
            Mode::File if self.form.file_path.is_empty() => {
                if self.workflow.state().input().file().is_some() {
                    self.workflow.set_file(None);
                    self.dispatch(FormIntent::DismissNotice);
                }
            }
            Mode::File => self.dispatch(FormIntent::BackspacePath),
        }
    }

    /// Enter: newline in Text, submit in Url, attach the typed path in File.
    pub fn enter(&mut self) {
        match self.workflow.mode() {
            Mode::Text => self.type_char('\n'),
            Mode::Url => self.submit(),
            Mode::File => self.attach_typed_path(),
        }
    }

    pub fn on_paste(&mut self, pasted: String) {
        if self.is_busy() {
            return;
        }
        match self.workflow.mode() {
            Mode::Text => {
                let text = self.current_text() + &pasted;
                self.workflow.set_text(text);
            }
            Mode::Url => {
                let url = self.current_url() + pasted.trim();
                self.workflow.set_url(url);
            }
            Mode::File => self.dispatch(FormIntent::PastePath(pasted)),
        }
    }

    fn attach_typed_path(&mut self) {
        let path = self.form.file_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        match Attachment::from_path(&path) {
            Ok(file) => {
                let notice = if file.has_accepted_extension() {
                    Notice::Info(format!("Selected: {}", file.file_name()))
                } else {
                    Notice::Warning(format!(
                        "Selected: {} (not a .txt, .docx, .doc or .pdf file)",
                        file.file_name()
                    ))
                };
                self.workflow.set_file(Some(file));
                self.dispatch(FormIntent::ClearPath);
                self.notify(notice);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not attach file");
                self.notify(Notice::Error(err.to_string()));
            }
        }
    }

    pub fn cycle_length(&mut self) {
        let next = self.workflow.state().summary_length().next();
        self.workflow.set_summary_length(next);
    }

    pub fn submit(&mut self) {
        match self.workflow.submit() {
            SubmitOutcome::Started { ticket } => {
                tracing::debug!(ticket, "Submission started from UI");
                self.dispatch(FormIntent::DismissNotice);
            }
            SubmitOutcome::Invalid => self.dispatch(FormIntent::DismissNotice),
            SubmitOutcome::Busy => {}
        }
    }

    pub fn clear(&mut self) {
        if self.is_busy() {
            return;
        }
        self.workflow.clear_all();
        self.dispatch(FormIntent::ClearPath);
        self.dispatch(FormIntent::DismissNotice);
    }

    pub fn copy_summary(&mut self) {
        if self.clipboard.is_none() && self.workflow.submission().summary().is_some() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(Box::new(handler)),
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                    self.notify(Notice::Error(err.to_string()));
                    return;
                }
            }
        }
        let result = match self.clipboard.as_deref_mut() {
            Some(sink) => self.workflow.copy_result(sink),
            None => Err(CopyError::NoResult),
        };
        match result {
            Ok(()) => self.notify(Notice::Info("Summary copied to clipboard".to_string())),
            Err(CopyError::NoResult) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.notify(Notice::Error(err.to_string()));
            }
        }
    }

    fn current_text(&self) -> String {
        self.workflow
            .state()
            .input()
            .text()
            .unwrap_or_default()
            .to_string()
    }

    fn current_url(&self) -> String {
        self.workflow
            .state()
            .input()
            .url()
            .unwrap_or_default()
            .to_string()
    }
}
