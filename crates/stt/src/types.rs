/// Audio upload received on `/api/stt`
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio bytes, forwarded untouched
    pub audio: Vec<u8>,
    /// Filename declared by the browser
    pub filename: String,
    /// Content type declared for the audio part
    pub content_type: String,
    /// Caller-supplied language, `None` when the form field was absent or blank
    pub language_code: Option<String>,
}
