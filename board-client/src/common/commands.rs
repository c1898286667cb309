/// Requests the UI hands to the API worker.
///
/// Fetches carry the ticket of the view that asked, so the answer can be
/// matched back to it.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    FetchAboutUs { ticket: u64 },
    FetchMessages { ticket: u64 },
    SaveMessage { name: String, message: String },
}
